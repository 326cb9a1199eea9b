//! School time zone offset.
//!
//! The school clock is informational: the offset shifts the displayed
//! wall time and never participates in AOS/LOS alerting.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::Serialize;

use crate::error::ConfigError;

const QUARTER_HOUR_SECS: i32 = 15 * 60;
const MIN_OFFSET_HOURS: f64 = -12.0;
const MAX_OFFSET_HOURS: f64 = 14.0;

/// UTC offset of the school taking part in the contact.
///
/// Stored in seconds; always a whole number of quarter hours within
/// `-12h..=+14h`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SchoolOffset {
    seconds: i32,
}

impl SchoolOffset {
    /// UTC itself.
    pub const UTC: Self = Self { seconds: 0 };

    /// Builds an offset from fractional hours (`-5`, `-2.5`, `5.75`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `hours` is not finite,
    /// lies outside `-12..=14`, or is not a multiple of a quarter hour.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_hours(hours: f64) -> Result<Self, ConfigError> {
        let invalid = |expected: &str| ConfigError::InvalidValue {
            field: "stz".to_string(),
            value: hours.to_string(),
            expected: expected.to_string(),
        };

        if !hours.is_finite() || !(MIN_OFFSET_HOURS..=MAX_OFFSET_HOURS).contains(&hours) {
            return Err(invalid("an offset between -12 and 14 hours"));
        }

        let quarters = hours * 4.0;
        if (quarters - quarters.round()).abs() > f64::EPSILON {
            return Err(invalid("a multiple of 0.25 hours"));
        }

        // In range after the checks above.
        Ok(Self {
            seconds: quarters.round() as i32 * QUARTER_HOUR_SECS,
        })
    }

    /// Offset in seconds east of UTC.
    #[must_use]
    pub const fn seconds(self) -> i32 {
        self.seconds
    }

    /// Offset in fractional hours.
    #[must_use]
    pub fn hours(self) -> f64 {
        f64::from(self.seconds) / 3600.0
    }

    /// The equivalent `chrono` fixed offset.
    #[must_use]
    pub fn fixed_offset(self) -> FixedOffset {
        // seconds is bounded to +/-14h, well inside FixedOffset's range
        FixedOffset::east_opt(self.seconds).unwrap_or_else(|| Utc.fix())
    }

    /// School wall time at `now`.
    #[must_use]
    pub fn apply(self, now: DateTime<Utc>) -> DateTime<FixedOffset> {
        now.with_timezone(&self.fixed_offset())
    }
}

impl std::fmt::Display for SchoolOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fixed_offset())
    }
}
