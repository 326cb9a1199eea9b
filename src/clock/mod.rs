//! Contact clock core
//!
//! Tracks a single predicted AOS/LOS window and derives, for any UTC
//! instant, the countdown/elapsed values and alert levels of the AOS,
//! LOS, and elapsed-time timers.
//!
//! # Architecture
//!
//! - [`TimeSource`] - Supplies "now" (system clock or a fixed instant)
//! - [`ContactClockEngine`] - Pure function of `(aos, los, now)` producing a [`Snapshot`]
//! - [`TimerDuration`] - Whole-second span rendered as `HH:MM:SS`
//! - [`SchoolOffset`] - Informational school time zone offset

pub mod duration;
pub mod engine;
pub mod instant;
pub mod source;
pub mod state;
pub mod zone;

pub use duration::TimerDuration;
pub use engine::{CRITICAL_THRESHOLD, ContactClockEngine, WARNING_THRESHOLD};
pub use instant::{format_instant, parse_instant};
pub use source::{FixedTimeSource, SystemTimeSource, TimeSource};
pub use state::{AlertLevel, Phase, Snapshot, TimerState};
pub use zone::SchoolOffset;
