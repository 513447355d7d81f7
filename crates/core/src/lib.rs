//! # Deskhive Core
//!
//! Pure business logic layer - the reservation availability and
//! conflict-resolution engine.
//!
//! This crate contains:
//! - Calendar policy predicates over office days and hours
//! - Conflict detection and seat-capacity accounting per area kind
//! - Slot generation for legally bookable start times
//! - Recurrence expansion for booking series
//! - The booking service orchestrating the above behind port traits
//!
//! ## Architecture Principles
//! - Only depends on `deskhive-domain`
//! - No database, HTTP, or platform code
//! - All external collaborators (store, clock) behind traits
//! - Every operation is a deterministic function of the request, a snapshot
//!   of existing reservations, the calendar configuration, and the clock

pub mod booking;
pub mod calendar;
pub mod conflict;
pub mod recurrence;
pub mod slots;

mod utils;

// Re-export specific items to avoid ambiguity
pub use booking::ports::{AreaRepository, Clock, ReservationRepository, SystemClock};
pub use booking::BookingService;
pub use calendar::{
    is_office_day, is_office_hour, is_within_office_hours, min_bookable_date, next_office_day,
};
pub use conflict::{find_conflicts, is_date_fully_booked, overlaps, seats_in_use, spans_overlap};
pub use recurrence::expand;
pub use slots::available_start_times;
