//! # Deskhive Domain
//!
//! Business domain types and models for the Deskhive reservation engine.
//!
//! This crate contains:
//! - Domain data types (Area, Reservation, RecurrenceRule, ...)
//! - Domain error types and Result definitions
//! - Office calendar configuration
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Deskhive crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::OfficeCalendar;
pub use errors::{EngineError, RejectionReason, Result};
pub use types::*;
