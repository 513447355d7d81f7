//! Canonical calendar-date value type
//!
//! Every date entering the engine is reduced to a plain year/month/day with
//! no time-of-day or timezone component. ISO-8601 timestamps are normalized
//! to their UTC calendar date through a single parse path; local-time date
//! construction is deliberately not offered.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{EngineError, Result};

/// A timezone-free calendar date (year, month, day).
///
/// Serialized as `YYYY-MM-DD`. Ordering is plain chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from year/month/day, rejecting impossible combinations.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| EngineError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Normalize an ISO-8601 string to a calendar date.
    ///
    /// Accepts plain `YYYY-MM-DD` dates and full RFC 3339 timestamps. A
    /// timestamp is converted to UTC before its date component is taken, so
    /// `2025-09-10T23:30:00-03:00` normalizes to `2025-09-11`.
    pub fn parse(input: &str) -> Result<Self> {
        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            return Ok(Self(date));
        }
        DateTime::parse_from_rfc3339(input)
            .map(|dt| Self::from_datetime(dt.with_timezone(&Utc)))
            .map_err(|_| EngineError::InvalidDate(input.to_string()))
    }

    /// The UTC calendar date of an instant.
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Self(instant.date_naive())
    }

    /// The weekday of this date.
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// The next calendar day.
    pub fn succ(self) -> Result<Self> {
        self.0
            .succ_opt()
            .map(Self)
            .ok_or_else(|| EngineError::InvalidDate("date out of range".to_string()))
    }

    /// This date plus `days` calendar days.
    pub fn add_days(self, days: u64) -> Result<Self> {
        self.0
            .checked_add_days(Days::new(days))
            .map(Self)
            .ok_or_else(|| EngineError::InvalidDate("date out of range".to_string()))
    }

    /// This date plus `months` calendar months.
    ///
    /// The day-of-month is preserved and clamped into shorter months, so
    /// January 31st plus one month is the last day of February.
    pub fn add_months(self, months: u32) -> Result<Self> {
        self.0
            .checked_add_months(Months::new(months))
            .map(Self)
            .ok_or_else(|| EngineError::InvalidDate("date out of range".to_string()))
    }

    /// Monday of the week containing this date.
    pub fn week_monday(self) -> Self {
        let back = u64::from(self.0.weekday().num_days_from_monday());
        self.0.checked_sub_days(Days::new(back)).map_or(self, Self)
    }

    /// Whole days from `earlier` to this date (negative when earlier is
    /// actually later).
    pub fn days_since(self, earlier: Self) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// Combine with a time of day into a naive UTC datetime.
    pub fn and_time(self, time: NaiveTime) -> NaiveDateTime {
        self.0.and_time(time)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
