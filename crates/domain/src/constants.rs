//! Domain constants
//!
//! Centralized location for domain-level constants used throughout the
//! engine.

/// Step between candidate start times, in minutes.
pub const SLOT_STEP_MINUTES: u32 = 30;

/// Opening hour applied when a tenant has no calendar configured.
pub const DEFAULT_OPENING_HOUR: u32 = 8;

/// Closing hour applied when a tenant has no calendar configured.
pub const DEFAULT_CLOSING_HOUR: u32 = 18;
