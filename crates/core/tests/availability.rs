//! Integration tests for slot generation and date saturation through the
//! booking service, including the soundness/completeness properties: every
//! offered slot re-submits as accepted, every withheld office-hour start
//! re-submits with a structured reason.

mod support;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use deskhive_core::BookingService;
use deskhive_domain::constants::SLOT_STEP_MINUTES;
use deskhive_domain::types::{BookingRequest, Reservation, ReservationSpan, ReservationStatus};
use deskhive_domain::{Area, OfficeCalendar};
use support::repositories::{FixedClock, MockAreaRepository, MockReservationRepository};
use support::{date, day_office, long_before, meeting_room, seat_pool, time};
use uuid::Uuid;

fn service_for(
    area: &Area,
    reservations: MockReservationRepository,
    now: DateTime<Utc>,
) -> BookingService {
    BookingService::new(
        Arc::new(MockAreaRepository::new(vec![area.clone()])),
        Arc::new(reservations),
        Arc::new(FixedClock(now)),
    )
    .with_calendar(OfficeCalendar::default())
}

fn confirmed(area: &Area, start: (u32, u32), end: (u32, u32)) -> Reservation {
    Reservation {
        id: Uuid::new_v4(),
        area_id: area.id,
        date: date(2025, 9, 10),
        span: ReservationSpan::interval(time(start.0, start.1), time(end.0, end.1)),
        seats: area.capacity,
        status: ReservationStatus::Confirmed,
    }
}

#[tokio::test]
async fn generated_slots_skip_booked_intervals() {
    let area = meeting_room("Sala A", 8);
    let store = MockReservationRepository::new()
        .with_reservation(confirmed(&area, (10, 0), (11, 0)))
        .with_reservation(confirmed(&area, (14, 0), (15, 30)));
    let service = service_for(&area, store, long_before());

    let slots = service
        .available_start_times(area.id, date(2025, 9, 10), 60)
        .await
        .expect("slots");

    assert!(slots.contains(&time(9, 0)));
    assert!(!slots.contains(&time(10, 0)));
    assert!(!slots.contains(&time(10, 30)));
    assert!(slots.contains(&time(11, 0)));
    assert!(!slots.contains(&time(13, 30)));
    assert!(!slots.contains(&time(15, 0)));
    assert!(slots.contains(&time(15, 30)));
}

#[tokio::test]
async fn every_offered_slot_is_accepted_on_resubmission() {
    let area = meeting_room("Sala A", 8);
    let store = MockReservationRepository::new()
        .with_reservation(confirmed(&area, (10, 0), (11, 0)))
        .with_reservation(confirmed(&area, (16, 30), (18, 0)));
    let service = service_for(&area, store, long_before());

    let duration = 90;
    let slots = service
        .available_start_times(area.id, date(2025, 9, 10), duration)
        .await
        .expect("slots");
    assert!(!slots.is_empty());

    for start in slots {
        let end = start + chrono::Duration::minutes(duration);
        let request = BookingRequest {
            area_id: area.id,
            date: date(2025, 9, 10),
            span: ReservationSpan::interval(start, end),
            seats: 1,
            recurrence: None,
        };
        let decision = service.check(&request).await.expect("check succeeds");
        assert!(
            decision.is_accepted(),
            "slot {start} should be bookable against the same snapshot"
        );
    }
}

#[tokio::test]
async fn every_withheld_start_is_rejected_with_a_reason() {
    let area = meeting_room("Sala A", 8);
    let store = MockReservationRepository::new()
        .with_reservation(confirmed(&area, (10, 0), (11, 0)));
    let service = service_for(&area, store, long_before());

    let duration = 60i64;
    let slots = service
        .available_start_times(area.id, date(2025, 9, 10), duration)
        .await
        .expect("slots");

    // Walk the full office grid; everything the generator withheld must
    // come back with a structured rejection.
    let calendar = OfficeCalendar::default();
    let mut candidate = calendar.opening;
    while candidate < calendar.closing {
        if !slots.contains(&candidate) {
            let end = candidate + chrono::Duration::minutes(duration);
            let request = BookingRequest {
                area_id: area.id,
                date: date(2025, 9, 10),
                span: ReservationSpan::interval(candidate, end),
                seats: 1,
                recurrence: None,
            };
            let decision = service.check(&request).await.expect("check succeeds");
            assert!(
                decision.rejection().is_some(),
                "withheld start {candidate} should have a rejection reason"
            );
        }
        candidate = candidate + chrono::Duration::minutes(i64::from(SLOT_STEP_MINUTES));
    }
}

#[tokio::test]
async fn fully_booked_room_reports_saturation_and_offers_nothing() {
    let area = meeting_room("Sala A", 8);
    let store = MockReservationRepository::new()
        .with_reservation(confirmed(&area, (8, 0), (13, 0)))
        .with_reservation(confirmed(&area, (13, 0), (18, 0)));
    let service = service_for(&area, store, long_before());

    assert!(service
        .is_date_fully_booked(area.id, date(2025, 9, 10))
        .await
        .expect("saturation check"));

    let slots = service
        .available_start_times(area.id, date(2025, 9, 10), 30)
        .await
        .expect("slots");
    assert!(slots.is_empty());
}

#[tokio::test]
async fn seat_pool_saturation_is_seat_based() {
    let area = seat_pool("Hot Desk", 5);
    let store = MockReservationRepository::new().with_reservation(Reservation {
        seats: 5,
        ..confirmed(&area, (9, 0), (17, 0))
    });
    let service = service_for(&area, store, long_before());

    assert!(service
        .is_date_fully_booked(area.id, date(2025, 9, 10))
        .await
        .expect("saturation check"));
}

#[tokio::test]
async fn full_day_area_saturates_after_one_booking() {
    let area = day_office("Private Office", 4);
    let store = MockReservationRepository::new().with_reservation(Reservation {
        id: Uuid::new_v4(),
        area_id: area.id,
        date: date(2025, 9, 10),
        span: ReservationSpan::FullDay,
        seats: 4,
        status: ReservationStatus::Confirmed,
    });
    let service = service_for(&area, store, long_before());

    assert!(service
        .is_date_fully_booked(area.id, date(2025, 9, 10))
        .await
        .expect("saturation check"));
}

#[tokio::test]
async fn cancelled_reservations_do_not_block_slots() {
    let area = meeting_room("Sala A", 8);
    let store = MockReservationRepository::new().with_reservation(Reservation {
        status: ReservationStatus::Cancelled,
        ..confirmed(&area, (10, 0), (11, 0))
    });
    let service = service_for(&area, store, long_before());

    let slots = service
        .available_start_times(area.id, date(2025, 9, 10), 60)
        .await
        .expect("slots");
    assert!(slots.contains(&time(10, 0)));
}
