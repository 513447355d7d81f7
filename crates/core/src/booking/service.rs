//! Booking service - validation and conflict checking behind ports

use std::sync::Arc;

use chrono::{DateTime, NaiveTime, Utc};
use deskhive_domain::types::{
    AcceptedBooking, Area, BookingRequest, CalendarDate, Decision, Reservation, ReservationSpan,
    ReservationStatus, ResourceKind, SeriesOutcome, SeriesRejection,
};
use deskhive_domain::{EngineError, OfficeCalendar, RejectionReason, Result};
use tracing::{debug, error, warn};
use uuid::Uuid;

use super::ports::{AreaRepository, Clock, ReservationRepository};
use crate::calendar::{is_office_day, is_office_hour};
use crate::conflict::{find_conflicts, is_date_fully_booked, seats_in_use};
use crate::recurrence::expand;

/// Reservation availability and conflict engine.
///
/// Every operation is a deterministic function of the request, a snapshot
/// of counting reservations read through the ports, the calendar
/// configuration, and the injected clock. The service owns no mutable state
/// of its own; serializing concurrent commits is the store's contract.
pub struct BookingService {
    areas: Arc<dyn AreaRepository>,
    reservations: Arc<dyn ReservationRepository>,
    clock: Arc<dyn Clock>,
    calendar: OfficeCalendar,
}

impl BookingService {
    /// Create a booking service.
    ///
    /// Without an explicit calendar the permissive fallback applies: every
    /// weekday bookable, default hours. Use [`Self::with_calendar`] to
    /// install the tenant configuration.
    pub fn new(
        areas: Arc<dyn AreaRepository>,
        reservations: Arc<dyn ReservationRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            areas,
            reservations,
            clock,
            calendar: OfficeCalendar::permissive(),
        }
    }

    /// Replace the office calendar (admin-managed, read-only to the engine).
    #[must_use]
    pub fn with_calendar(mut self, calendar: OfficeCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Validate one request against the calendar and the current snapshot.
    ///
    /// Rejections come back as [`Decision::Rejected`] with a structured
    /// reason; `Err` is reserved for malformed requests, bad configuration,
    /// and collaborator failures.
    pub async fn check(&self, request: &BookingRequest) -> Result<Decision> {
        self.calendar.validate()?;
        request.validate()?;

        let area = self.get_area(request.area_id).await?;
        let existing = self.snapshot(request.area_id, request.date).await?;
        let now = self.clock.now();

        let decision = decide(&area, request, &existing, now, &self.calendar);
        debug!(
            area = %area.name,
            date = %request.date,
            accepted = decision.is_accepted(),
            "booking check"
        );
        Ok(decision)
    }

    /// Check, then persist on acceptance.
    ///
    /// Atomicity of read-check-insert belongs to the store; two racing
    /// requests over the same snapshot are serialized there, not here.
    pub async fn book(&self, request: &BookingRequest) -> Result<Decision> {
        let decision = self.check(request).await?;
        if let Decision::Accepted(accepted) = &decision {
            self.reservations.insert(accepted.reservation.clone()).await?;
        }
        Ok(decision)
    }

    /// Expand the request's recurrence rule and book each date
    /// independently.
    ///
    /// Partial-success semantics: a date that fails validation is recorded
    /// with its reason and never aborts the rest of the series. A store
    /// failure is logged and propagated, but dates already committed stay
    /// committed; there is no rollback.
    pub async fn book_series(&self, request: &BookingRequest) -> Result<SeriesOutcome> {
        let Some(rule) = &request.recurrence else {
            return Err(EngineError::InvalidRecurrence(
                "request carries no recurrence rule".to_string(),
            ));
        };
        let dates = expand(request.date, rule)?;

        let mut outcome = SeriesOutcome::default();
        for date in dates {
            let dated = BookingRequest {
                date,
                recurrence: None,
                ..request.clone()
            };
            match self.book(&dated).await {
                Ok(Decision::Accepted(_)) => outcome.accepted.push(date),
                Ok(Decision::Rejected { reason }) => {
                    outcome.rejected.push(SeriesRejection { date, reason });
                }
                Err(err) => {
                    error!(error = %err, date = %date, "failed to commit series date");
                    return Err(err);
                }
            }
        }
        Ok(outcome)
    }

    /// Transition a reservation to cancelled.
    pub async fn cancel(&self, reservation_id: Uuid) -> Result<bool> {
        let cancelled = self.reservations.cancel(reservation_id).await?;
        if !cancelled {
            warn!(%reservation_id, "cancel requested for unknown reservation");
        }
        Ok(cancelled)
    }

    /// Bookable start times for a duration on one area and date.
    pub async fn available_start_times(
        &self,
        area_id: Uuid,
        date: CalendarDate,
        duration_minutes: i64,
    ) -> Result<Vec<NaiveTime>> {
        let area = self.get_area(area_id).await?;
        let existing = self.snapshot(area_id, date).await?;
        crate::slots::available_start_times(
            &area,
            date,
            duration_minutes,
            &existing,
            self.clock.now(),
            &self.calendar,
        )
    }

    /// Whether the date has no bookable room left for the area.
    pub async fn is_date_fully_booked(&self, area_id: Uuid, date: CalendarDate) -> Result<bool> {
        let area = self.get_area(area_id).await?;
        let existing = self.snapshot(area_id, date).await?;
        Ok(is_date_fully_booked(&area, &existing, &self.calendar))
    }

    /// Earliest date a new booking may target.
    pub fn min_bookable_date(&self) -> Result<CalendarDate> {
        crate::calendar::min_bookable_date(self.clock.now(), &self.calendar)
    }

    async fn get_area(&self, id: Uuid) -> Result<Area> {
        self.areas
            .get_area(id)
            .await?
            .ok_or_else(|| EngineError::AreaNotFound(id.to_string()))
    }

    /// Snapshot of counting reservations, sorted so downstream processing
    /// is independent of the store's iteration order.
    async fn snapshot(&self, area_id: Uuid, date: CalendarDate) -> Result<Vec<Reservation>> {
        let mut existing = self.reservations.list_counting(area_id, date).await?;
        existing.retain(|reservation| reservation.status.counts());
        existing.sort_by_key(|reservation| (span_sort_key(&reservation.span), reservation.id));
        Ok(existing)
    }
}

fn span_sort_key(span: &ReservationSpan) -> (u8, NaiveTime) {
    match span {
        ReservationSpan::FullDay => (0, NaiveTime::MIN),
        ReservationSpan::Interval { start, .. } => (1, *start),
    }
}

/// Pure decision kernel: no I/O, deterministic for a fixed snapshot.
///
/// `existing` must already be the counting reservations of the request's
/// (area, date).
fn decide(
    area: &Area,
    request: &BookingRequest,
    existing: &[Reservation],
    now: DateTime<Utc>,
    calendar: &OfficeCalendar,
) -> Decision {
    let date = request.date;
    if !is_office_day(date, calendar) {
        return Decision::rejected(RejectionReason::NonOfficeDay);
    }

    // Full-day areas have no time-of-day granularity; the requested span is
    // normalized to a whole-day claim.
    let span = match area.kind {
        ResourceKind::FullDay => ReservationSpan::FullDay,
        ResourceKind::SeatPool | ResourceKind::WholeUnit => request.span,
    };

    match span {
        ReservationSpan::Interval { start, end } => {
            if !is_office_hour(start, calendar) || end > calendar.closing {
                return Decision::rejected(RejectionReason::OutsideOfficeHours);
            }
            if date.and_time(start) < now.naive_utc() {
                return Decision::rejected(RejectionReason::PastDateTime);
            }
        }
        ReservationSpan::FullDay => {
            if date < CalendarDate::from_datetime(now) {
                return Decision::rejected(RejectionReason::PastDateTime);
            }
        }
    }

    let seats = area.seats_required(request);
    match area.kind {
        ResourceKind::FullDay => {
            // Single-occupancy per date: any counting reservation saturates.
            if !existing.is_empty() {
                return Decision::rejected(RejectionReason::DateFullyBooked);
            }
        }
        ResourceKind::WholeUnit => {
            if is_date_fully_booked(area, existing, calendar) {
                return Decision::rejected(RejectionReason::DateFullyBooked);
            }
            if !find_conflicts(&span, existing).is_empty() {
                return Decision::rejected(RejectionReason::TimeOverlap);
            }
        }
        ResourceKind::SeatPool => {
            let in_use = seats_in_use(existing);
            if in_use >= area.capacity {
                return Decision::rejected(RejectionReason::DateFullyBooked);
            }
            if in_use + seats > area.capacity {
                return Decision::rejected(RejectionReason::CapacityExceeded);
            }
        }
    }

    Decision::Accepted(AcceptedBooking {
        reservation: Reservation {
            id: Uuid::new_v4(),
            area_id: area.id,
            date,
            span,
            seats,
            status: ReservationStatus::Confirmed,
        },
    })
}
