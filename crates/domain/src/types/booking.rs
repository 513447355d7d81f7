//! Booking decisions and series outcomes

use serde::{Deserialize, Serialize};

use super::date::CalendarDate;
use super::Reservation;
use crate::errors::RejectionReason;

/// Outcome of validating a single booking request.
///
/// Both arms are ordinary data: a rejection is a negotiable answer for the
/// caller, not an error condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Decision {
    /// The request is valid; the materialized reservation is ready for the
    /// store to commit.
    Accepted(AcceptedBooking),
    /// The request was turned down with a structured reason.
    Rejected { reason: RejectionReason },
}

impl Decision {
    /// Shorthand for a rejection.
    pub const fn rejected(reason: RejectionReason) -> Self {
        Self::Rejected { reason }
    }

    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The rejection reason, when there is one.
    pub const fn rejection(&self) -> Option<RejectionReason> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected { reason } => Some(*reason),
        }
    }
}

/// An accepted request, materialized as the reservation to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedBooking {
    pub reservation: Reservation,
}

/// Per-date report for a recurring series.
///
/// Partial-success semantics: a date that fails validation is recorded here
/// with its reason and never aborts the rest of the series or rolls back
/// dates already committed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesOutcome {
    pub accepted: Vec<CalendarDate>,
    pub rejected: Vec<SeriesRejection>,
}

impl SeriesOutcome {
    /// True when the rule expanded to zero dates.
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }
}

/// A series date that failed validation, with its structured reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRejection {
    pub date: CalendarDate,
    pub reason: RejectionReason,
}
