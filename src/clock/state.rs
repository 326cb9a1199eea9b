//! Snapshot types produced by the contact clock engine.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::duration::TimerDuration;

/// Where `now` falls relative to the contact window.
///
/// Intervals are half-open: `now == aos` is already [`Phase::InContact`],
/// `now == los` is already [`Phase::AfterLos`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// `now < aos`
    BeforeAos,
    /// `aos <= now < los`
    InContact,
    /// `now >= los`
    AfterLos,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::BeforeAos => "before AOS",
            Self::InContact => "in contact",
            Self::AfterLos => "after LOS",
        };
        f.write_str(name)
    }
}

/// Symbolic urgency of a timer.
///
/// Presentation maps these to colors; the engine never deals in colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// Plain wall clocks; never produced for a timer.
    Neutral,
    /// Timer running with time to spare.
    Active,
    /// Under six minutes to AOS.
    Warning,
    /// Under one minute to go.
    Critical,
    /// Event reached; timer frozen.
    Done,
    /// Timer not yet meaningful.
    Dormant,
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Neutral => "neutral",
            Self::Active => "active",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Done => "done",
            Self::Dormant => "dormant",
        };
        f.write_str(name)
    }
}

/// Value and level of a single timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerState {
    /// Remaining or elapsed time, depending on the timer.
    pub value: TimerDuration,
    /// Current alert level.
    pub level: AlertLevel,
}

impl TimerState {
    /// A timer frozen at zero.
    #[must_use]
    pub const fn zero(level: AlertLevel) -> Self {
        Self {
            value: TimerDuration::ZERO,
            level,
        }
    }
}

/// Everything the presentation layer needs for one tick.
///
/// Built fresh on every call to
/// [`ContactClockEngine::advance`](super::ContactClockEngine::advance);
/// no history is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// The whole-second instant this snapshot describes.
    pub at: DateTime<Utc>,
    /// Phase of the contact window at `at`.
    pub phase: Phase,
    /// Countdown to AOS.
    pub aos: TimerState,
    /// Countdown to LOS.
    pub los: TimerState,
    /// Elapsed time since AOS.
    pub et: TimerState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Phase::BeforeAos).unwrap(),
            "\"before_aos\""
        );
        assert_eq!(
            serde_json::to_string(&Phase::AfterLos).unwrap(),
            "\"after_los\""
        );
    }

    #[test]
    fn alert_level_display_matches_serde() {
        for level in [
            AlertLevel::Neutral,
            AlertLevel::Active,
            AlertLevel::Warning,
            AlertLevel::Critical,
            AlertLevel::Done,
            AlertLevel::Dormant,
        ] {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{level}\""));
        }
    }

    #[test]
    fn zero_timer() {
        let t = TimerState::zero(AlertLevel::Dormant);
        assert!(t.value.is_zero());
        assert_eq!(t.level, AlertLevel::Dormant);
    }
}
