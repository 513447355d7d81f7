//! Calendar policy: office-day and office-hour predicates
//!
//! Pure functions over a date/time and an explicit [`OfficeCalendar`].
//! Callers without a configured calendar pass
//! [`OfficeCalendar::permissive`]; nothing here reads ambient state.

use chrono::{DateTime, NaiveTime, Utc};
use deskhive_domain::types::CalendarDate;
use deskhive_domain::{OfficeCalendar, Result};

/// True iff the weekday of `date` is marked active in the calendar.
pub fn is_office_day(date: CalendarDate, calendar: &OfficeCalendar) -> bool {
    calendar.is_office_day(date.weekday())
}

/// True iff `opening <= time < closing`.
///
/// The window is half-open: the closing minute itself is not a bookable
/// start time.
pub fn is_office_hour(time: NaiveTime, calendar: &OfficeCalendar) -> bool {
    calendar.opening <= time && time < calendar.closing
}

/// Conjunction of [`is_office_day`] and [`is_office_hour`].
pub fn is_within_office_hours(
    date: CalendarDate,
    time: NaiveTime,
    calendar: &OfficeCalendar,
) -> bool {
    is_office_day(date, calendar) && is_office_hour(time, calendar)
}

/// Smallest date strictly after `from` that is an office day.
///
/// A calendar with zero active weekdays is rejected up front as a
/// configuration error rather than looped on; after validation the walk
/// terminates within a week.
pub fn next_office_day(from: CalendarDate, calendar: &OfficeCalendar) -> Result<CalendarDate> {
    calendar.validate()?;
    let mut candidate = from.succ()?;
    while !is_office_day(candidate, calendar) {
        candidate = candidate.succ()?;
    }
    Ok(candidate)
}

/// Earliest date a new booking may target.
///
/// Today qualifies only while the office has not yet opened; otherwise the
/// next office day is the floor.
pub fn min_bookable_date(now: DateTime<Utc>, calendar: &OfficeCalendar) -> Result<CalendarDate> {
    calendar.validate()?;
    let today = CalendarDate::from_datetime(now);
    if is_office_day(today, calendar) && now.time() < calendar.opening {
        return Ok(today);
    }
    next_office_day(today, calendar)
}
