//! Shared test helpers for `deskhive-core` integration tests.
//!
//! In-memory mocks for the engine's ports plus small fixture builders, so
//! the booking-flow tests can focus on behaviour instead of boilerplate.

pub mod repositories;

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use deskhive_domain::types::{Area, CalendarDate, ResourceKind};
use uuid::Uuid;

/// A fixed instant comfortably before every date the tests book.
pub fn long_before() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0)
        .single()
        .expect("valid instant")
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

pub fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::new(y, m, d).expect("valid date")
}

/// A shared-desk area with the given seat capacity.
pub fn seat_pool(name: &str, capacity: u32) -> Area {
    Area {
        id: Uuid::new_v4(),
        name: name.to_string(),
        capacity,
        kind: ResourceKind::SeatPool,
    }
}

/// A meeting room booked entirely per time interval.
pub fn meeting_room(name: &str, capacity: u32) -> Area {
    Area {
        id: Uuid::new_v4(),
        name: name.to_string(),
        capacity,
        kind: ResourceKind::WholeUnit,
    }
}

/// A unit booked for whole office days at a time.
pub fn day_office(name: &str, capacity: u32) -> Area {
    Area {
        id: Uuid::new_v4(),
        name: name.to_string(),
        capacity,
        kind: ResourceKind::FullDay,
    }
}
