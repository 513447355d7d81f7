//! Error types used throughout the reservation engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engine-level failure: malformed input or a collaborator error.
///
/// A turned-down booking is not an error. Rejections travel as
/// [`RejectionReason`] values inside an `Ok` result; this enum is reserved
/// for requests and configurations the engine cannot meaningfully evaluate.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum EngineError {
    #[error("Invalid calendar configuration: {0}")]
    Calendar(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid duration: {0} minutes")]
    InvalidDuration(i64),

    #[error("Invalid seat count: {0}")]
    InvalidSeatCount(u32),

    #[error("Invalid recurrence rule: {0}")]
    InvalidRecurrence(String),

    #[error("Area not found: {0}")]
    AreaNotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Why a booking request was turned down.
///
/// Structured so callers (UI, API handlers) can translate each kind to a
/// user-facing message; the engine never emits free-text rejections.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// The requested date's weekday is not an office day.
    #[error("the requested date is not an office day")]
    NonOfficeDay,

    /// The requested interval falls outside opening hours.
    #[error("the requested time is outside office hours")]
    OutsideOfficeHours,

    /// The requested start lies in the past.
    #[error("the requested date or time is in the past")]
    PastDateTime,

    /// The requested interval overlaps an existing reservation.
    #[error("the requested time overlaps an existing reservation")]
    TimeOverlap,

    /// Granting the request would exceed the area's seat capacity.
    #[error("the requested seats exceed the remaining capacity")]
    CapacityExceeded,

    /// The date is already saturated for this area.
    #[error("the requested date is fully booked")]
    DateFullyBooked,
}

impl RejectionReason {
    /// Whether retrying the same request later can succeed.
    ///
    /// Time-validity rejections need a different date or time; contention
    /// rejections can clear when other reservations are cancelled.
    pub const fn is_contention(self) -> bool {
        matches!(
            self,
            Self::TimeOverlap | Self::CapacityExceeded | Self::DateFullyBooked
        )
    }
}
