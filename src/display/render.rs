//! Frame rendering.
//!
//! A [`Frame`] is the terminal-independent layout of one tick: which
//! lines appear, in what order, with which text and swatch. Turning it
//! into bytes is a separate step so the layout can be tested without a
//! terminal.

use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset, TimeZone};
use colored::Colorize;

use crate::clock::{AlertLevel, SchoolOffset, Snapshot, TimerState};

use super::palette::{Swatch, TimerRole, swatch_for};

/// Window title shown above the clocks.
pub const TITLE: &str = "ARISS ISS Contact Clock";

/// Placeholder for a timer that has not started.
pub const DORMANT_TEXT: &str = "__:__:__";

const WALL_CLOCK_FORMAT: &str = "%H:%M:%S";

// ============================================================================
// Options
// ============================================================================

/// Presentation switches, one per `run` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DisplayOptions {
    /// Black & white: live timer colors collapse to one.
    pub monochrome: bool,
    /// Paint the swatch behind the text rather than on it.
    pub background: bool,
    /// Show a label line above each value.
    pub labels: bool,
    /// Show the school wall clock.
    pub school_clock: bool,
    /// Put the wall clocks below the timers.
    pub clocks_bottom: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            monochrome: false,
            background: true,
            labels: true,
            school_clock: true,
            clocks_bottom: false,
        }
    }
}

// ============================================================================
// Frame
// ============================================================================

/// One rendered line of the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    /// What the line shows.
    pub role: TimerRole,
    /// Caption shown above the value, when labels are on.
    pub label: Option<&'static str>,
    /// The value text, including its suffix.
    pub text: String,
    /// Color for the value.
    pub swatch: Swatch,
}

/// Layout of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Heading line.
    pub title: &'static str,
    /// Lines in display order.
    pub lines: Vec<FrameLine>,
}

impl Frame {
    /// Finds the line for `role`, if it is shown.
    #[must_use]
    pub fn line(&self, role: TimerRole) -> Option<&FrameLine> {
        self.lines.iter().find(|line| line.role == role)
    }

    /// Text for stdout: colored when `colorize`, plain otherwise.
    #[must_use]
    pub fn to_terminal(&self, colorize: bool, background: bool) -> String {
        if colorize {
            self.to_ansi(background)
        } else {
            self.to_plain()
        }
    }

    /// Plain text, one value per line, labels included when present.
    #[must_use]
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        for line in &self.lines {
            if let Some(label) = line.label {
                let _ = writeln!(out, "{label}");
            }
            let _ = writeln!(out, "{}", line.text);
        }
        out
    }

    /// ANSI-colored text.
    ///
    /// With `background`, each value sits on its swatch with a
    /// contrasting foreground; otherwise the swatch colors the text.
    #[must_use]
    pub fn to_ansi(&self, background: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title.bold());
        for line in &self.lines {
            if let Some(label) = line.label {
                let _ = writeln!(out, "{}", label.dimmed());
            }
            let value = if background {
                line.text
                    .as_str()
                    .color(line.swatch.contrast())
                    .on_color(line.swatch.color())
                    .bold()
            } else {
                line.text.as_str().color(line.swatch.color()).bold()
            };
            let _ = writeln!(out, "{value}");
        }
        out
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Lays out one tick.
///
/// `local_offset` is the ground station's offset at `snapshot.at`;
/// the caller resolves it so rendering stays deterministic.
#[must_use]
pub fn render_frame(
    snapshot: &Snapshot,
    school_offset: SchoolOffset,
    local_offset: FixedOffset,
    options: &DisplayOptions,
) -> Frame {
    let mut clocks = Vec::with_capacity(3);
    clocks.push(wall_clock(
        TimerRole::LocalClock,
        "Local Time",
        &snapshot.at.with_timezone(&local_offset),
        "LT",
        options,
    ));
    clocks.push(wall_clock(
        TimerRole::UtcClock,
        "Universal Time Coordinated",
        &snapshot.at,
        "UTC",
        options,
    ));
    if options.school_clock {
        clocks.push(wall_clock(
            TimerRole::SchoolClock,
            "Local School Time",
            &school_offset.apply(snapshot.at),
            "LST",
            options,
        ));
    }

    let timers = [
        (TimerRole::Aos, "Acquisition of Signal", "AOS", snapshot.aos),
        (TimerRole::Los, "Loss of Signal", "LOS", snapshot.los),
        (TimerRole::Et, "Elapsed Time", "ET", snapshot.et),
    ]
    .map(|(role, name, tag, st)| timer(role, name, tag, st, options));

    let lines = if options.clocks_bottom {
        timers.into_iter().chain(clocks).collect()
    } else {
        clocks.into_iter().chain(timers).collect()
    };

    Frame {
        title: TITLE,
        lines,
    }
}

fn wall_clock<Tz>(
    role: TimerRole,
    label: &'static str,
    at: &DateTime<Tz>,
    suffix: &str,
    options: &DisplayOptions,
) -> FrameLine
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    FrameLine {
        role,
        label: options.labels.then_some(label),
        text: format!(" {} {suffix} ", at.format(WALL_CLOCK_FORMAT)),
        swatch: swatch_for(role, AlertLevel::Neutral, options.monochrome),
    }
}

fn timer(
    role: TimerRole,
    label: &'static str,
    suffix: &str,
    state: TimerState,
    options: &DisplayOptions,
) -> FrameLine {
    FrameLine {
        role,
        label: options.labels.then_some(label),
        text: format!(" {} {suffix} ", timer_text(state)),
        swatch: swatch_for(role, state.level, options.monochrome),
    }
}

fn timer_text(state: TimerState) -> String {
    if state.level == AlertLevel::Dormant {
        DORMANT_TEXT.to_string()
    } else {
        state.value.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
