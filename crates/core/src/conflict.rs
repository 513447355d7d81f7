//! Conflict detection and seat-capacity accounting
//!
//! All conflict logic reduces to a single half-open interval primitive.
//! Adjacent reservations, where one ends exactly when the next starts, never
//! conflict. Inputs are expected to be pre-filtered to counting
//! (active/confirmed) reservations for one area and one normalized date.

use chrono::NaiveTime;
use deskhive_domain::constants::SLOT_STEP_MINUTES;
use deskhive_domain::types::{Area, Reservation, ReservationSpan, ResourceKind};
use deskhive_domain::OfficeCalendar;

use crate::utils::{minutes_from_midnight, time_from_minutes};

/// Two half-open `[start, end)` intervals overlap iff
/// `a_start < b_end && b_start < a_end`.
pub fn overlaps(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Whether two spans claim a common instant of the same date.
///
/// A full-day span claims every instant, so it overlaps anything.
pub fn spans_overlap(a: &ReservationSpan, b: &ReservationSpan) -> bool {
    match (a, b) {
        (ReservationSpan::FullDay, _) | (_, ReservationSpan::FullDay) => true,
        (
            ReservationSpan::Interval {
                start: a_start,
                end: a_end,
            },
            ReservationSpan::Interval {
                start: b_start,
                end: b_end,
            },
        ) => overlaps(*a_start, *a_end, *b_start, *b_end),
    }
}

/// Every existing reservation whose span overlaps the requested one.
///
/// For whole-unit areas a non-empty result means the request must be
/// rejected with a time-overlap reason.
pub fn find_conflicts<'a>(
    span: &ReservationSpan,
    existing: &'a [Reservation],
) -> Vec<&'a Reservation> {
    existing
        .iter()
        .filter(|reservation| spans_overlap(span, &reservation.span))
        .collect()
}

/// Seat sum over the reservations of one (area, date).
pub fn seats_in_use(existing: &[Reservation]) -> u32 {
    existing.iter().map(|reservation| reservation.seats).sum()
}

/// Whether the date has no bookable room left for this area.
///
/// - Full-day areas are single-occupancy: any reservation saturates the date.
/// - Seat pools saturate when the seat sum reaches capacity.
/// - Whole units saturate when every 30-minute tick of the office window
///   conflicts with some existing reservation, i.e. no slot of any length
///   remains free.
pub fn is_date_fully_booked(
    area: &Area,
    existing: &[Reservation],
    calendar: &OfficeCalendar,
) -> bool {
    match area.kind {
        ResourceKind::FullDay => !existing.is_empty(),
        ResourceKind::SeatPool => seats_in_use(existing) >= area.capacity,
        ResourceKind::WholeUnit => office_window_covered(existing, calendar),
    }
}

/// True iff every tick of the office window overlaps an existing
/// reservation.
fn office_window_covered(existing: &[Reservation], calendar: &OfficeCalendar) -> bool {
    let open = minutes_from_midnight(calendar.opening);
    let close = minutes_from_midnight(calendar.closing);
    let step = i64::from(SLOT_STEP_MINUTES);

    let mut tick = open;
    while tick < close {
        let (Some(tick_start), Some(tick_end)) = (
            time_from_minutes(tick),
            time_from_minutes((tick + step).min(close)),
        ) else {
            return false;
        };
        let tick_span = ReservationSpan::interval(tick_start, tick_end);
        if find_conflicts(&tick_span, existing).is_empty() {
            return false;
        }
        tick += step;
    }
    close > open
}
