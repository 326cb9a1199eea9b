//! Configuration schema
//!
//! `RawClockConfig` mirrors the YAML file with every field optional so
//! that missing keys surface as validation issues rather than serde
//! errors. `ClockConfig` is the validated, typed result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::SchoolOffset;

/// Top-level keys the loader understands (including legacy upper-case
/// spellings).
pub const KNOWN_KEYS: &[&str] = &["stz", "aos", "los", "STZ", "AOS", "LOS"];

/// Canonical key names, used for typo suggestions.
pub const CANONICAL_KEYS: &[&str] = &["stz", "aos", "los"];

/// Configuration file as written by the operator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawClockConfig {
    /// School time zone offset from UTC, in hours.
    #[serde(default, alias = "STZ", skip_serializing_if = "Option::is_none")]
    pub stz: Option<f64>,

    /// Predicted acquisition of signal (UTC).
    #[serde(default, alias = "AOS", skip_serializing_if = "Option::is_none")]
    pub aos: Option<String>,

    /// Predicted loss of signal (UTC).
    #[serde(default, alias = "LOS", skip_serializing_if = "Option::is_none")]
    pub los: Option<String>,
}

/// Validated clock configuration.
///
/// Frozen once loaded; changing the window means editing the file and
/// restarting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockConfig {
    /// Acquisition of signal.
    pub aos: DateTime<Utc>,
    /// Loss of signal.
    pub los: DateTime<Utc>,
    /// Informational school time zone offset.
    pub school_offset: SchoolOffset,
}
