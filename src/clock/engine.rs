//! Contact clock engine
//!
//! `ContactClockEngine` holds the immutable AOS/LOS window and turns a
//! caller-supplied "now" into a [`Snapshot`]. It keeps no mutable state:
//! the same `now` always yields the same snapshot.

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};

use crate::config::schema::ClockConfig;
use crate::error::ConfigError;

use super::duration::TimerDuration;
use super::state::{AlertLevel, Phase, Snapshot, TimerState};
use super::zone::SchoolOffset;

/// Remaining time below which a running AOS timer turns to `Warning`.
pub const WARNING_THRESHOLD: TimerDuration = TimerDuration::from_secs(6 * 60);

/// Remaining time below which a running AOS or LOS timer turns `Critical`.
pub const CRITICAL_THRESHOLD: TimerDuration = TimerDuration::from_secs(60);

/// Countdown engine for a single AOS/LOS contact window.
///
/// Coordinates:
/// - Phase detection over half-open intervals
/// - AOS countdown with green/yellow/red bands
/// - LOS countdown, dormant until AOS
/// - Elapsed time, frozen at the full contact duration after LOS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactClockEngine {
    aos: DateTime<Utc>,
    los: DateTime<Utc>,
    school_offset: SchoolOffset,
}

impl ContactClockEngine {
    /// Creates an engine for the window `[aos, los)`.
    ///
    /// Both instants are truncated to whole seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWindow`] unless `aos < los`.
    pub fn new(aos: DateTime<Utc>, los: DateTime<Utc>) -> Result<Self, ConfigError> {
        let aos = aos.trunc_subsecs(0);
        let los = los.trunc_subsecs(0);

        if aos >= los {
            return Err(ConfigError::InvalidWindow { aos, los });
        }

        Ok(Self {
            aos,
            los,
            school_offset: SchoolOffset::UTC,
        })
    }

    /// Creates an engine from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWindow`] unless `aos < los`.
    pub fn from_config(config: &ClockConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.aos, config.los)?.with_school_offset(config.school_offset))
    }

    /// Sets the informational school time zone offset.
    #[must_use]
    pub const fn with_school_offset(mut self, offset: SchoolOffset) -> Self {
        self.school_offset = offset;
        self
    }

    /// Acquisition of signal.
    #[must_use]
    pub const fn aos(&self) -> DateTime<Utc> {
        self.aos
    }

    /// Loss of signal.
    #[must_use]
    pub const fn los(&self) -> DateTime<Utc> {
        self.los
    }

    /// School time zone offset.
    #[must_use]
    pub const fn school_offset(&self) -> SchoolOffset {
        self.school_offset
    }

    /// Length of the contact window.
    #[must_use]
    pub fn contact_duration(&self) -> TimerDuration {
        TimerDuration::from_chrono(self.los - self.aos)
    }

    /// Phase of the window at `now`.
    #[must_use]
    pub fn phase_at(&self, now: DateTime<Utc>) -> Phase {
        if now < self.aos {
            Phase::BeforeAos
        } else if now < self.los {
            Phase::InContact
        } else {
            Phase::AfterLos
        }
    }

    /// Computes the snapshot for `now`.
    ///
    /// Total over all inputs: a wildly wrong clock just yields large
    /// durations.
    #[must_use]
    pub fn advance(&self, now: DateTime<Utc>) -> Snapshot {
        let now = now.trunc_subsecs(0);
        let phase = self.phase_at(now);

        let (aos, los, et) = match phase {
            Phase::BeforeAos => {
                let remaining = span(self.aos - now);
                (
                    TimerState {
                        value: remaining,
                        level: aos_level(remaining),
                    },
                    TimerState::zero(AlertLevel::Dormant),
                    TimerState::zero(AlertLevel::Dormant),
                )
            }
            Phase::InContact => {
                let remaining = span(self.los - now);
                (
                    TimerState::zero(AlertLevel::Done),
                    TimerState {
                        value: remaining,
                        level: los_level(remaining),
                    },
                    TimerState {
                        value: span(now - self.aos),
                        level: AlertLevel::Active,
                    },
                )
            }
            Phase::AfterLos => (
                TimerState::zero(AlertLevel::Done),
                TimerState::zero(AlertLevel::Done),
                TimerState {
                    value: self.contact_duration(),
                    level: AlertLevel::Done,
                },
            ),
        };

        Snapshot {
            at: now,
            phase,
            aos,
            los,
            et,
        }
    }
}

fn span(delta: TimeDelta) -> TimerDuration {
    TimerDuration::from_chrono(delta)
}

/// Bands are `[0, 60)` critical, `[60, 360)` warning, `[360, ..)` active.
fn aos_level(remaining: TimerDuration) -> AlertLevel {
    if remaining < CRITICAL_THRESHOLD {
        AlertLevel::Critical
    } else if remaining < WARNING_THRESHOLD {
        AlertLevel::Warning
    } else {
        AlertLevel::Active
    }
}

/// LOS has no far band: it starts yellow the moment contact begins.
fn los_level(remaining: TimerDuration) -> AlertLevel {
    if remaining < CRITICAL_THRESHOLD {
        AlertLevel::Critical
    } else {
        AlertLevel::Active
    }
}
