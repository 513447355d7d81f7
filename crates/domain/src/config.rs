//! Office calendar configuration
//!
//! Admin-managed, read-only to the engine, and always passed explicitly:
//! no engine function reads calendar state from ambient context.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CLOSING_HOUR, DEFAULT_OPENING_HOUR};
use crate::errors::{EngineError, Result};
use crate::utils::serde::hhmm;

fn on_the_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default()
}

/// Which weekdays are bookable, and during which daily hours.
///
/// One opening/closing pair applies uniformly to every office day. The
/// closing time is exclusive: the office window is `[opening, closing)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeCalendar {
    /// Monday-first office-day flags.
    pub office_days: [bool; 7],
    /// Opening time of day, inclusive.
    #[serde(with = "hhmm")]
    pub opening: NaiveTime,
    /// Closing time of day, exclusive.
    #[serde(with = "hhmm")]
    pub closing: NaiveTime,
}

impl Default for OfficeCalendar {
    /// Standard workweek: Monday through Friday, 08:00-18:00.
    fn default() -> Self {
        Self {
            office_days: [true, true, true, true, true, false, false],
            opening: on_the_hour(DEFAULT_OPENING_HOUR),
            closing: on_the_hour(DEFAULT_CLOSING_HOUR),
        }
    }
}

impl OfficeCalendar {
    /// A validated calendar.
    pub fn new(office_days: [bool; 7], opening: NaiveTime, closing: NaiveTime) -> Result<Self> {
        let calendar = Self {
            office_days,
            opening,
            closing,
        };
        calendar.validate()?;
        Ok(calendar)
    }

    /// Fallback for tenants with no calendar configured: every weekday is an
    /// office day, with the default hours. Bookings are never blocked by a
    /// missing configuration.
    pub fn permissive() -> Self {
        Self {
            office_days: [true; 7],
            opening: on_the_hour(DEFAULT_OPENING_HOUR),
            closing: on_the_hour(DEFAULT_CLOSING_HOUR),
        }
    }

    /// Configuration invariants: a non-empty office week and a non-empty
    /// daily window.
    pub fn validate(&self) -> Result<()> {
        if !self.office_days.iter().any(|active| *active) {
            return Err(EngineError::Calendar(
                "no weekday is marked as an office day".to_string(),
            ));
        }
        if self.opening >= self.closing {
            return Err(EngineError::Calendar(format!(
                "opening time {} is not before closing time {}",
                self.opening.format("%H:%M"),
                self.closing.format("%H:%M"),
            )));
        }
        Ok(())
    }

    /// Whether `weekday` is marked as an office day.
    pub fn is_office_day(&self, weekday: Weekday) -> bool {
        self.office_days[weekday.num_days_from_monday() as usize]
    }
}
