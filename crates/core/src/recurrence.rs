//! Recurrence expansion: one request, many concrete dates
//!
//! Expansion emits raw dates; office-day membership and conflicts are
//! judged downstream, one date at a time, so a single bad date never aborts
//! a series. Weekly rules are the exception: their weekday set is intrinsic
//! to the rule and is applied here.

use deskhive_domain::types::{CalendarDate, Frequency, RecurrenceRule};
use deskhive_domain::Result;

/// Concrete dates a recurring request materializes, `start` through
/// `rule.end_date` inclusive.
///
/// An end date before `start` yields the empty set, which callers report as
/// "zero dates produced" rather than an error.
pub fn expand(start: CalendarDate, rule: &RecurrenceRule) -> Result<Vec<CalendarDate>> {
    rule.validate()?;
    if rule.end_date < start {
        return Ok(Vec::new());
    }
    match rule.frequency {
        Frequency::Daily => expand_daily(start, rule),
        Frequency::Weekly => expand_weekly(start, rule),
        Frequency::Monthly => expand_monthly(start, rule),
    }
}

fn expand_daily(start: CalendarDate, rule: &RecurrenceRule) -> Result<Vec<CalendarDate>> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= rule.end_date {
        dates.push(current);
        current = current.add_days(u64::from(rule.interval))?;
    }
    Ok(dates)
}

/// Day-walk emitting dates whose weekday is in the rule's set and whose
/// week lands on the interval grid (every `interval` weeks from the start
/// week, Monday-anchored).
fn expand_weekly(start: CalendarDate, rule: &RecurrenceRule) -> Result<Vec<CalendarDate>> {
    let anchor = start.week_monday();
    let interval = i64::from(rule.interval);

    let mut dates = Vec::new();
    let mut current = start;
    while current <= rule.end_date {
        let weeks = current.week_monday().days_since(anchor) / 7;
        if weeks % interval == 0 && rule.weekdays.contains(&current.weekday()) {
            dates.push(current);
        }
        current = current.succ()?;
    }
    Ok(dates)
}

fn expand_monthly(start: CalendarDate, rule: &RecurrenceRule) -> Result<Vec<CalendarDate>> {
    // Each occurrence is computed from the series start, not from the
    // previous occurrence, so a clamped short month does not shorten the
    // day-of-month for the rest of the series.
    let mut dates = Vec::new();
    let mut occurrence: u32 = 0;
    loop {
        let Some(offset) = occurrence.checked_mul(rule.interval) else {
            break;
        };
        let current = start.add_months(offset)?;
        if current > rule.end_date {
            break;
        }
        dates.push(current);
        occurrence += 1;
    }
    Ok(dates)
}
