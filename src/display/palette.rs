//! Alert level to color mapping.
//!
//! The engine only speaks in [`AlertLevel`]s; this is the one place that
//! decides what each level looks like for each timer.

use colored::Color;

use crate::clock::AlertLevel;

/// What a display line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerRole {
    /// Countdown to AOS.
    Aos,
    /// Countdown to LOS.
    Los,
    /// Elapsed time since AOS.
    Et,
    /// Ground station local wall clock.
    LocalClock,
    /// UTC wall clock.
    UtcClock,
    /// School local wall clock.
    SchoolClock,
}

/// Symbolic display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swatch {
    /// Far from AOS.
    Green,
    /// Warning, or LOS/ET running.
    Yellow,
    /// Under a minute to go.
    Red,
    /// Stopped or not yet running.
    Gray,
    /// Local clock.
    White,
    /// UTC clock.
    Black,
    /// Any live timer level in black & white mode.
    Mono,
}

impl Swatch {
    /// Terminal color for this swatch.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Green => Color::Green,
            Self::Yellow => Color::Yellow,
            Self::Red => Color::Red,
            Self::Gray => Color::BrightBlack,
            Self::White => Color::White,
            Self::Black => Color::Black,
            Self::Mono => Color::BrightWhite,
        }
    }

    /// Readable text color when this swatch is used as a background.
    #[must_use]
    pub const fn contrast(self) -> Color {
        match self {
            Self::Black | Self::Gray => Color::BrightWhite,
            _ => Color::Black,
        }
    }
}

/// Picks the swatch for a line.
///
/// AOS runs green, yellow, red; LOS and ET run yellow then red; every
/// stopped or dormant timer is gray. With `monochrome`, live timer
/// levels collapse to [`Swatch::Mono`] while stopped ones stay gray.
#[must_use]
pub const fn swatch_for(role: TimerRole, level: AlertLevel, monochrome: bool) -> Swatch {
    let live = match role {
        TimerRole::LocalClock => return Swatch::White,
        TimerRole::UtcClock => return Swatch::Black,
        TimerRole::SchoolClock => return Swatch::Gray,
        TimerRole::Aos => match level {
            AlertLevel::Active => Swatch::Green,
            AlertLevel::Warning => Swatch::Yellow,
            AlertLevel::Critical => Swatch::Red,
            AlertLevel::Neutral | AlertLevel::Done | AlertLevel::Dormant => return Swatch::Gray,
        },
        TimerRole::Los | TimerRole::Et => match level {
            AlertLevel::Active | AlertLevel::Warning => Swatch::Yellow,
            AlertLevel::Critical => Swatch::Red,
            AlertLevel::Neutral | AlertLevel::Done | AlertLevel::Dormant => return Swatch::Gray,
        },
    };

    if monochrome { Swatch::Mono } else { live }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aos_runs_green_yellow_red_gray() {
        let aos = |level| swatch_for(TimerRole::Aos, level, false);
        assert_eq!(aos(AlertLevel::Active), Swatch::Green);
        assert_eq!(aos(AlertLevel::Warning), Swatch::Yellow);
        assert_eq!(aos(AlertLevel::Critical), Swatch::Red);
        assert_eq!(aos(AlertLevel::Done), Swatch::Gray);
    }

    #[test]
    fn los_and_et_start_yellow() {
        for role in [TimerRole::Los, TimerRole::Et] {
            assert_eq!(swatch_for(role, AlertLevel::Active, false), Swatch::Yellow);
            assert_eq!(swatch_for(role, AlertLevel::Critical, false), Swatch::Red);
            assert_eq!(swatch_for(role, AlertLevel::Dormant, false), Swatch::Gray);
            assert_eq!(swatch_for(role, AlertLevel::Done, false), Swatch::Gray);
        }
    }

    #[test]
    fn monochrome_flattens_live_levels_only() {
        let mono = |role, level| swatch_for(role, level, true);
        assert_eq!(mono(TimerRole::Aos, AlertLevel::Critical), Swatch::Mono);
        assert_eq!(mono(TimerRole::Los, AlertLevel::Active), Swatch::Mono);
        assert_eq!(mono(TimerRole::Aos, AlertLevel::Done), Swatch::Gray);
        assert_eq!(mono(TimerRole::Et, AlertLevel::Dormant), Swatch::Gray);
    }

    #[test]
    fn wall_clocks_ignore_level_and_monochrome() {
        for mono in [false, true] {
            assert_eq!(
                swatch_for(TimerRole::LocalClock, AlertLevel::Neutral, mono),
                Swatch::White
            );
            assert_eq!(
                swatch_for(TimerRole::UtcClock, AlertLevel::Neutral, mono),
                Swatch::Black
            );
            assert_eq!(
                swatch_for(TimerRole::SchoolClock, AlertLevel::Neutral, mono),
                Swatch::Gray
            );
        }
    }

    #[test]
    fn dark_backgrounds_get_light_text() {
        assert_eq!(Swatch::Black.contrast(), Color::BrightWhite);
        assert_eq!(Swatch::Yellow.contrast(), Color::Black);
    }
}
