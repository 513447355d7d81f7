//! Recurrence rules for booking series

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::date::CalendarDate;
use crate::errors::{EngineError, Result};

/// How often a recurring booking repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

/// Expands one booking request into a series of concrete dates.
///
/// The end date is inclusive. An end date before the series start expands to
/// the empty set rather than failing; a zero interval or a weekly rule with
/// no weekdays is malformed and fails validation instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    /// Repeat every `interval` days/weeks/months; at least 1.
    pub interval: u32,
    /// Inclusive end of the series.
    pub end_date: CalendarDate,
    /// Weekday filter, weekly rules only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weekdays: Vec<Weekday>,
}

impl RecurrenceRule {
    /// Daily rule repeating every `interval` days.
    pub fn daily(interval: u32, end_date: CalendarDate) -> Self {
        Self {
            frequency: Frequency::Daily,
            interval,
            end_date,
            weekdays: Vec::new(),
        }
    }

    /// Weekly rule on the given weekdays, repeating every `interval` weeks.
    pub fn weekly(interval: u32, end_date: CalendarDate, weekdays: Vec<Weekday>) -> Self {
        Self {
            frequency: Frequency::Weekly,
            interval,
            end_date,
            weekdays,
        }
    }

    /// Monthly rule repeating every `interval` months.
    pub fn monthly(interval: u32, end_date: CalendarDate) -> Self {
        Self {
            frequency: Frequency::Monthly,
            interval,
            end_date,
            weekdays: Vec::new(),
        }
    }

    /// Boundary validation for rule shape; date-range emptiness is not an
    /// error and is handled by expansion.
    pub fn validate(&self) -> Result<()> {
        if self.interval == 0 {
            return Err(EngineError::InvalidRecurrence(
                "interval must be at least 1".to_string(),
            ));
        }
        if self.frequency == Frequency::Weekly && self.weekdays.is_empty() {
            return Err(EngineError::InvalidRecurrence(
                "weekly rules need at least one weekday".to_string(),
            ));
        }
        Ok(())
    }
}
