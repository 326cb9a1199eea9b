//! Observability module
//!
//! Logging and structured clock events. Everything goes through
//! `tracing`; there is no event file and no pass history.

pub mod events;
pub mod logging;

pub use events::{ClockEvent, EventEmitter, StopReason, Timer, diff_snapshots};
pub use logging::{LogFormat, init_logging};
