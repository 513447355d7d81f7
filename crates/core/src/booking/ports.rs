//! Port interfaces for the booking engine
//!
//! These traits define the boundaries between the engine and the
//! infrastructure that owns persistence and wall-clock time. The store
//! behind [`ReservationRepository`] is responsible for making
//! read-check-insert atomic (a serializable transaction or an optimistic
//! retry loop); the engine's conflict functions are the read-side predicate
//! inside that transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deskhive_domain::types::{Area, CalendarDate, Reservation};
use deskhive_domain::Result;
use uuid::Uuid;

/// Read access to area definitions.
#[async_trait]
pub trait AreaRepository: Send + Sync {
    /// Look up an area by id.
    async fn get_area(&self, id: Uuid) -> Result<Option<Area>>;
}

/// Access to the reservation store.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Counting (active/confirmed) reservations for one area and date.
    async fn list_counting(&self, area_id: Uuid, date: CalendarDate) -> Result<Vec<Reservation>>;

    /// Persist an accepted reservation.
    async fn insert(&self, reservation: Reservation) -> Result<()>;

    /// Transition a reservation to cancelled; the only permitted mutation
    /// of a confirmed reservation. Returns false when the id is unknown.
    async fn cancel(&self, reservation_id: Uuid) -> Result<bool>;
}

/// Wall-clock source, injectable for tests.
pub trait Clock: Send + Sync {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// [`Clock`] backed by the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
