//! Small time helpers shared by the engine components.

use chrono::{NaiveTime, Timelike};

/// Minutes since midnight, ignoring seconds (the engine is minute-granular).
pub(crate) fn minutes_from_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// The time of day `minutes` after midnight, when it exists on a 24h clock.
pub(crate) fn time_from_minutes(minutes: i64) -> Option<NaiveTime> {
    u32::try_from(minutes)
        .ok()
        .and_then(|m| m.checked_mul(60))
        .and_then(|secs| NaiveTime::from_num_seconds_from_midnight_opt(secs, 0))
}
