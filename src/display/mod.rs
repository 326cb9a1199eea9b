//! Presentation of contact clock snapshots.
//!
//! - `palette` - maps alert levels onto colors per timer
//! - `render` - lays out a frame and writes it as plain or ANSI text

pub mod palette;
pub mod render;

pub use palette::{Swatch, TimerRole, swatch_for};
pub use render::{DORMANT_TEXT, DisplayOptions, Frame, FrameLine, TITLE, render_frame};
