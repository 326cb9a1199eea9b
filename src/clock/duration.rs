//! Whole-second timer durations.

use std::fmt;

use serde::{Serialize, Serializer};

/// A non-negative span of whole seconds.
///
/// Displays as `HH:MM:SS`. Hours are not wrapped at 24: a span of
/// 25 hours renders as `25:00:00`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerDuration(u64);

impl TimerDuration {
    /// The zero span.
    pub const ZERO: Self = Self(0);

    /// Creates a span of `secs` seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Converts a signed `chrono` duration, clamping negatives to zero
    /// and dropping sub-second precision.
    #[must_use]
    pub fn from_chrono(delta: chrono::TimeDelta) -> Self {
        Self(u64::try_from(delta.num_seconds()).unwrap_or(0))
    }

    /// Total seconds.
    #[must_use]
    pub const fn as_secs(self) -> u64 {
        self.0
    }

    /// Whole hours (unbounded).
    #[must_use]
    pub const fn hours(self) -> u64 {
        self.0 / 3600
    }

    /// Minutes past the hour.
    #[must_use]
    pub const fn minutes(self) -> u64 {
        (self.0 % 3600) / 60
    }

    /// Seconds past the minute.
    #[must_use]
    pub const fn seconds(self) -> u64 {
        self.0 % 60
    }

    /// Returns `true` for the zero span.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TimerDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}

// Serialized as the display string; `status --format json` consumers
// read the same text the operator sees.
impl Serialize for TimerDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
