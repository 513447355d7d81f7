//! Booking orchestration: ports and the engine service

pub mod ports;
pub mod service;

pub use ports::{AreaRepository, Clock, ReservationRepository, SystemClock};
pub use service::BookingService;
