//! Property tests for the contact clock engine.

use ariss_clock::clock::{
    AlertLevel, CRITICAL_THRESHOLD, ContactClockEngine, Phase, TimerDuration, WARNING_THRESHOLD,
};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use proptest::prelude::*;

/// 2024-09-04T00:00:00Z
fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 4, 0, 0, 0).unwrap()
}

/// A window starting somewhere within a day of `base`, lasting up to a
/// day, plus an offset of `now` relative to AOS.
fn window_and_now() -> impl Strategy<Value = (i64, i64, i64)> {
    (0i64..86_400, 1i64..86_400, -200_000i64..200_000)
}

fn setup(aos_secs: i64, len: i64, now_offset: i64) -> (ContactClockEngine, DateTime<Utc>) {
    let aos = base() + TimeDelta::seconds(aos_secs);
    let los = aos + TimeDelta::seconds(len);
    let engine = ContactClockEngine::new(aos, los).unwrap();
    (engine, aos + TimeDelta::seconds(now_offset))
}

proptest! {
    #[test]
    fn phase_matches_half_open_intervals((a, len, off) in window_and_now()) {
        let (engine, now) = setup(a, len, off);
        let snap = engine.advance(now);
        let expected = if now < engine.aos() {
            Phase::BeforeAos
        } else if now < engine.los() {
            Phase::InContact
        } else {
            Phase::AfterLos
        };
        prop_assert_eq!(snap.phase, expected);
    }

    #[test]
    fn in_contact_values_sum_to_duration((a, len, off) in window_and_now()) {
        let (engine, now) = setup(a, len, off);
        let snap = engine.advance(now);
        if snap.phase == Phase::InContact {
            prop_assert_eq!(
                snap.los.value.as_secs() + snap.et.value.as_secs(),
                engine.contact_duration().as_secs()
            );
        }
    }

    #[test]
    fn aos_level_follows_thresholds((a, len, off) in window_and_now()) {
        let (engine, now) = setup(a, len, off);
        let snap = engine.advance(now);
        if snap.phase == Phase::BeforeAos {
            let remaining = snap.aos.value;
            prop_assert!(!remaining.is_zero());
            let expected = if remaining < CRITICAL_THRESHOLD {
                AlertLevel::Critical
            } else if remaining < WARNING_THRESHOLD {
                AlertLevel::Warning
            } else {
                AlertLevel::Active
            };
            prop_assert_eq!(snap.aos.level, expected);
            prop_assert_eq!(snap.los.level, AlertLevel::Dormant);
            prop_assert_eq!(snap.et.level, AlertLevel::Dormant);
        } else {
            prop_assert_eq!(snap.aos.value, TimerDuration::ZERO);
            prop_assert_eq!(snap.aos.level, AlertLevel::Done);
        }
    }

    #[test]
    fn los_never_warns((a, len, off) in window_and_now()) {
        let (engine, now) = setup(a, len, off);
        prop_assert_ne!(engine.advance(now).los.level, AlertLevel::Warning);
    }

    #[test]
    fn after_los_is_frozen((a, len, off) in window_and_now(), later in 0i64..10_000_000) {
        let (engine, now) = setup(a, len, off);
        let snap = engine.advance(now);
        if snap.phase == Phase::AfterLos {
            let much_later = engine.advance(now + TimeDelta::seconds(later));
            prop_assert_eq!(much_later.aos, snap.aos);
            prop_assert_eq!(much_later.los, snap.los);
            prop_assert_eq!(much_later.et, snap.et);
            prop_assert_eq!(snap.et.value, engine.contact_duration());
        }
    }

    #[test]
    fn aos_countdown_steps_by_one((a, len, off) in window_and_now()) {
        let (engine, now) = setup(a, len, off);
        let this = engine.advance(now);
        let next = engine.advance(now + TimeDelta::seconds(1));
        if this.phase == Phase::BeforeAos {
            prop_assert_eq!(this.aos.value.as_secs() - 1, next.aos.value.as_secs());
        }
        if this.phase == Phase::InContact && next.phase == Phase::InContact {
            prop_assert_eq!(next.et.value.as_secs(), this.et.value.as_secs() + 1);
        }
    }

    #[test]
    fn subseconds_never_matter((a, len, off) in window_and_now(), ms in 0i64..1000) {
        let (engine, now) = setup(a, len, off);
        prop_assert_eq!(
            engine.advance(now),
            engine.advance(now + TimeDelta::milliseconds(ms))
        );
    }

    #[test]
    fn duration_display_fields_add_up(secs in 0u64..10_000_000) {
        let d = TimerDuration::from_secs(secs);
        let text = d.to_string();
        let parts: Vec<u64> = text.split(':').map(|p| p.parse().unwrap()).collect();
        prop_assert_eq!(parts.len(), 3);
        prop_assert!(parts[1] < 60 && parts[2] < 60);
        prop_assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], secs);
    }
}
