use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deskhive_core::{AreaRepository, Clock, ReservationRepository};
use deskhive_domain::types::{Area, CalendarDate, Reservation, ReservationStatus};
use deskhive_domain::Result as DomainResult;
use uuid::Uuid;

/// In-memory mock for `AreaRepository`.
#[derive(Default, Clone)]
pub struct MockAreaRepository {
    areas: Arc<Mutex<Vec<Area>>>,
}

impl MockAreaRepository {
    /// Create a new mock seeded with the provided areas.
    pub fn new(areas: Vec<Area>) -> Self {
        Self {
            areas: Arc::new(Mutex::new(areas)),
        }
    }
}

#[async_trait]
impl AreaRepository for MockAreaRepository {
    async fn get_area(&self, id: Uuid) -> DomainResult<Option<Area>> {
        Ok(self
            .areas
            .lock()
            .unwrap()
            .iter()
            .find(|area| area.id == id)
            .cloned())
    }
}

/// In-memory mock for `ReservationRepository`.
///
/// Stores reservations behind a mutex and filters by area, date, and
/// counting status, mirroring the store contract the engine relies on.
#[derive(Default, Clone)]
pub struct MockReservationRepository {
    reservations: Arc<Mutex<Vec<Reservation>>>,
}

impl MockReservationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience helper for seeding a single reservation.
    pub fn with_reservation(self, reservation: Reservation) -> Self {
        self.reservations.lock().unwrap().push(reservation);
        self
    }

    /// Every stored reservation, for assertions.
    pub fn all(&self) -> Vec<Reservation> {
        self.reservations.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReservationRepository for MockReservationRepository {
    async fn list_counting(
        &self,
        area_id: Uuid,
        date: CalendarDate,
    ) -> DomainResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.area_id == area_id && r.date == date && r.status.counts())
            .cloned()
            .collect())
    }

    async fn insert(&self, reservation: Reservation) -> DomainResult<()> {
        self.reservations.lock().unwrap().push(reservation);
        Ok(())
    }

    async fn cancel(&self, reservation_id: Uuid) -> DomainResult<bool> {
        let mut reservations = self.reservations.lock().unwrap();
        match reservations.iter_mut().find(|r| r.id == reservation_id) {
            Some(reservation) => {
                reservation.status = ReservationStatus::Cancelled;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Clock pinned to a fixed instant, for deterministic past-checks.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
