//! Domain types for areas, reservations, and booking requests

pub mod booking;
pub mod date;
pub mod recurrence;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export the value types most callers need
pub use booking::{AcceptedBooking, Decision, SeriesOutcome, SeriesRejection};
pub use date::CalendarDate;
pub use recurrence::{Frequency, RecurrenceRule};

use crate::errors::{EngineError, Result};
use crate::utils::serde::hhmm;

/// How an area's capacity is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Interchangeable seats booked in partial quantities.
    SeatPool,
    /// A unit (meeting room) claimed entirely per time interval.
    WholeUnit,
    /// A unit claimed for a whole office day at a time.
    FullDay,
}

/// A bookable resource.
///
/// Capacity is read-only input to the conflict detector; editing an area
/// never retroactively invalidates reservations that already reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: Uuid,
    pub name: String,
    /// Total seats; at least 1.
    pub capacity: u32,
    pub kind: ResourceKind,
}

impl Area {
    /// Seats a request consumes on this area.
    ///
    /// Whole units are always claimed at full capacity. Full-day areas claim
    /// the date itself, so the requester's seat count is immaterial.
    pub const fn seats_required(&self, request: &BookingRequest) -> u32 {
        match self.kind {
            ResourceKind::SeatPool => request.seats,
            ResourceKind::WholeUnit | ResourceKind::FullDay => self.capacity,
        }
    }
}

/// The portion of a date a reservation claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReservationSpan {
    /// A half-open `[start, end)` interval within office hours.
    Interval {
        #[serde(with = "hhmm")]
        start: NaiveTime,
        #[serde(with = "hhmm")]
        end: NaiveTime,
    },
    /// The entire office day.
    FullDay,
}

impl ReservationSpan {
    /// An interval span.
    pub const fn interval(start: NaiveTime, end: NaiveTime) -> Self {
        Self::Interval { start, end }
    }

    /// Interval ordering check; full-day spans are always well formed.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Interval { start, end } if start >= end => Err(EngineError::InvalidDuration(
                (*end - *start).num_minutes(),
            )),
            _ => Ok(()),
        }
    }
}

/// Lifecycle state of a reservation.
///
/// Reservations are append-only once confirmed; the only permitted mutation
/// is the transition to `Cancelled`, which is a distinct operation rather
/// than an update-in-place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Active,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    /// Whether this status counts toward capacity and conflicts.
    pub const fn counts(self) -> bool {
        matches!(self, Self::Active | Self::Confirmed)
    }
}

/// The unit being protected against conflicts.
///
/// All fields are explicit and validated at the system boundary before a
/// reservation ever reaches the conflict engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub area_id: Uuid,
    pub date: CalendarDate,
    pub span: ReservationSpan,
    pub seats: u32,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Boundary validation: seat counts and interval ordering.
    pub fn validate(&self) -> Result<()> {
        if self.seats == 0 {
            return Err(EngineError::InvalidSeatCount(0));
        }
        self.span.validate()
    }
}

/// A booking attempt as it enters the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub area_id: Uuid,
    pub date: CalendarDate,
    pub span: ReservationSpan,
    /// Seats requested; meaningful for seat pools, ignored elsewhere.
    pub seats: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrenceRule>,
}

impl BookingRequest {
    /// Boundary validation before any calendar or conflict work.
    pub fn validate(&self) -> Result<()> {
        if self.seats == 0 {
            return Err(EngineError::InvalidSeatCount(0));
        }
        self.span.validate()?;
        if let Some(rule) = &self.recurrence {
            rule.validate()?;
        }
        Ok(())
    }
}
