//! Structured clock events.
//!
//! The run loop diffs consecutive snapshots and reports what changed:
//! phase transitions and alert level changes. Events are emitted through
//! `tracing` only; nothing is written to disk.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clock::{AlertLevel, Phase, Snapshot};

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

/// Which timer an alert change refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Timer {
    /// Countdown to AOS.
    Aos,
    /// Countdown to LOS.
    Los,
    /// Elapsed time.
    Et,
}

impl std::fmt::Display for Timer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Aos => "AOS",
            Self::Los => "LOS",
            Self::Et => "ET",
        })
    }
}

/// Why the run loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// `--once` rendered its single frame.
    Completed,
    /// Interrupted by Ctrl+C.
    Interrupted,
}

// ---------------------------------------------------------------------------
// Event variants
// ---------------------------------------------------------------------------

/// A discrete event observed while the clock runs.
///
/// Tagged with `"type"` when serialized so log consumers can dispatch on
/// the event kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ClockEvent {
    /// The run loop started.
    ClockStarted {
        /// First tick.
        timestamp: DateTime<Utc>,
        /// Configured AOS.
        aos: DateTime<Utc>,
        /// Configured LOS.
        los: DateTime<Utc>,
    },

    /// The window moved into a new phase (or the first tick's phase).
    PhaseEntered {
        /// Tick at which the phase was observed.
        timestamp: DateTime<Utc>,
        /// The phase entered.
        phase: Phase,
    },

    /// A timer's alert level changed between two ticks.
    AlertChanged {
        /// Tick at which the new level was observed.
        timestamp: DateTime<Utc>,
        /// The timer concerned.
        timer: Timer,
        /// Previous level.
        from: AlertLevel,
        /// New level.
        to: AlertLevel,
    },

    /// The run loop stopped.
    ClockStopped {
        /// When the loop stopped.
        timestamp: DateTime<Utc>,
        /// Why it stopped.
        reason: StopReason,
    },
}

impl std::fmt::Display for ClockEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClockStarted { aos, los, .. } => {
                write!(f, "clock started for window {aos} .. {los}")
            }
            Self::PhaseEntered { phase, .. } => write!(f, "entered phase: {phase}"),
            Self::AlertChanged { timer, from, to, .. } => write!(f, "{timer} {from} -> {to}"),
            Self::ClockStopped { reason, .. } => write!(f, "clock stopped ({reason:?})"),
        }
    }
}

/// Lists what changed between two ticks.
///
/// With no previous snapshot, only the starting phase is reported.
#[must_use]
pub fn diff_snapshots(previous: Option<&Snapshot>, current: &Snapshot) -> Vec<ClockEvent> {
    let timestamp = current.at;

    let Some(previous) = previous else {
        return vec![ClockEvent::PhaseEntered {
            timestamp,
            phase: current.phase,
        }];
    };

    let mut events = Vec::new();
    if previous.phase != current.phase {
        events.push(ClockEvent::PhaseEntered {
            timestamp,
            phase: current.phase,
        });
    }

    let timers = [
        (Timer::Aos, previous.aos.level, current.aos.level),
        (Timer::Los, previous.los.level, current.los.level),
        (Timer::Et, previous.et.level, current.et.level),
    ];
    events.extend(
        timers
            .into_iter()
            .filter(|(_, from, to)| from != to)
            .map(|(timer, from, to)| ClockEvent::AlertChanged {
                timestamp,
                timer,
                from,
                to,
            }),
    );

    events
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

/// Emits clock events as structured `tracing` records.
///
/// Each event carries a sequence number and its JSON form; the message is
/// the human-readable rendering.
#[derive(Debug, Default)]
pub struct EventEmitter {
    sequence: AtomicU64,
}

impl EventEmitter {
    /// Creates an emitter starting at sequence zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sequence: AtomicU64::new(0),
        }
    }

    /// Emits one event.
    ///
    /// Critical alerts log at `warn`; everything else at `info`.
    pub fn emit(&self, event: &ClockEvent) {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst);
        let json = serde_json::to_string(event).unwrap_or_default();

        if matches!(
            event,
            ClockEvent::AlertChanged {
                to: AlertLevel::Critical,
                ..
            }
        ) {
            tracing::warn!(target: "ariss_clock::events", sequence, event = %json, "{event}");
        } else {
            tracing::info!(target: "ariss_clock::events", sequence, event = %json, "{event}");
        }
    }

    /// Emits every event in order.
    pub fn emit_all(&self, events: &[ClockEvent]) {
        for event in events {
            self.emit(event);
        }
    }

    /// Returns the number of events emitted so far.
    #[must_use]
    pub fn event_count(&self) -> u64 {
        self.sequence.load(Ordering::Relaxed)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
