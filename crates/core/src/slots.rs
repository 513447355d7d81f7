//! Slot generation: candidate start times for a requested duration
//!
//! Candidates step through the office window at a fixed 30-minute grid and
//! survive only when the whole `[candidate, candidate + duration)` interval
//! fits before closing, does not lie in the past, and is free for the
//! area's kind. An empty result is a meaningful answer ("no availability"),
//! not an error.

use chrono::{DateTime, NaiveTime, Utc};
use deskhive_domain::constants::SLOT_STEP_MINUTES;
use deskhive_domain::types::{Area, CalendarDate, Reservation, ReservationSpan, ResourceKind};
use deskhive_domain::{EngineError, OfficeCalendar, Result};

use crate::calendar::is_office_day;
use crate::conflict::{find_conflicts, seats_in_use};
use crate::utils::{minutes_from_midnight, time_from_minutes};

/// Legally bookable start times for `duration_minutes` on one area and date.
///
/// The output is ascending and depends only on the arguments; existing
/// reservations are consulted through pure overlap math, never through
/// their storage order.
pub fn available_start_times(
    area: &Area,
    date: CalendarDate,
    duration_minutes: i64,
    existing: &[Reservation],
    now: DateTime<Utc>,
    calendar: &OfficeCalendar,
) -> Result<Vec<NaiveTime>> {
    if duration_minutes <= 0 {
        return Err(EngineError::InvalidDuration(duration_minutes));
    }
    calendar.validate()?;

    // Full-day areas have no sub-day grid to offer.
    if area.kind == ResourceKind::FullDay || !is_office_day(date, calendar) {
        return Ok(Vec::new());
    }

    let open = minutes_from_midnight(calendar.opening);
    let close = minutes_from_midnight(calendar.closing);
    let step = i64::from(SLOT_STEP_MINUTES);
    let wall_clock = now.naive_utc();

    let mut slots = Vec::new();
    let mut candidate = open;
    while candidate + duration_minutes <= close {
        let (Some(start), Some(end)) = (
            time_from_minutes(candidate),
            time_from_minutes(candidate + duration_minutes),
        ) else {
            break;
        };

        let span = ReservationSpan::interval(start, end);
        let free = match area.kind {
            ResourceKind::WholeUnit => find_conflicts(&span, existing).is_empty(),
            ResourceKind::SeatPool => seats_in_use(existing) < area.capacity,
            ResourceKind::FullDay => false,
        };
        let in_future = date.and_time(start) >= wall_clock;

        if free && in_future {
            slots.push(start);
        }
        candidate += step;
    }
    Ok(slots)
}
