//! Time sources.
//!
//! The engine never samples a clock itself; callers take one reading per
//! tick from a [`TimeSource`] and pass it in.

use chrono::{DateTime, SubsecRound, Utc};

/// Supplies the current UTC instant.
pub trait TimeSource {
    /// Current instant, truncated to whole seconds.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the host clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(0)
    }
}

/// Always reports the same instant.
///
/// Backs `status --at` and deterministic tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimeSource(DateTime<Utc>);

impl FixedTimeSource {
    /// Creates a source frozen at `at` (sub-seconds dropped).
    #[must_use]
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at.trunc_subsecs(0))
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone, Timelike};

    #[test]
    fn system_source_has_whole_seconds() {
        let now = SystemTimeSource.now();
        assert_eq!(now.nanosecond(), 0);
    }

    #[test]
    fn system_source_tracks_wall_clock() {
        let before = Utc::now() - TimeDelta::seconds(1);
        let now = SystemTimeSource.now();
        let after = Utc::now();
        assert!(now >= before && now <= after);
    }

    #[test]
    fn fixed_source_is_stable() {
        let at = Utc.with_ymd_and_hms(2024, 9, 4, 18, 40, 0).unwrap();
        let source = FixedTimeSource::new(at);
        assert_eq!(source.now(), at);
        assert_eq!(source.now(), source.now());
    }

    #[test]
    fn fixed_source_drops_subseconds() {
        let at = Utc.with_ymd_and_hms(2024, 9, 4, 18, 40, 0).unwrap();
        let source = FixedTimeSource::new(at + TimeDelta::milliseconds(900));
        assert_eq!(source.now(), at);
    }

    #[test]
    fn boxed_source_delegates() {
        let at = Utc.with_ymd_and_hms(2024, 9, 4, 18, 40, 0).unwrap();
        let source: Box<dyn TimeSource> = Box::new(FixedTimeSource::new(at));
        assert_eq!(source.now(), at);
    }
}
