//! Serialization utilities for domain wire formats
//!
//! Reusable serde modules for the compact representations the booking
//! boundary exchanges: times of day as `HH:MM` strings.

/// Custom serialization module for `NaiveTime` as an `HH:MM` string.
///
/// Office hours and reservation intervals are minute-granular; seconds are
/// dropped on the wire.
///
/// # Usage
/// ```rust
/// use chrono::NaiveTime;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Example {
///     #[serde(with = "deskhive_domain::utils::serde::hhmm")]
///     opening: NaiveTime,
/// }
/// ```
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize a time of day as `HH:MM`
    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    /// Deserialize an `HH:MM` string into a time of day
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M").map_err(serde::de::Error::custom)
    }
}
