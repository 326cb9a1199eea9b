//! Configuration validation
//!
//! Turns a `RawClockConfig` into a `ClockConfig`, collecting ALL issues
//! (doesn't stop at first) so the operator can fix the file in one pass.

use chrono::{DateTime, Utc};

use crate::clock::{SchoolOffset, format_instant, parse_instant};
use crate::config::schema::{ClockConfig, RawClockConfig};
use crate::error::{Severity, ValidationIssue};

/// AOS further out than this draws a "check the date" warning.
const FAR_AOS_WARNING_SECS: i64 = 24 * 60 * 60;

// ============================================================================
// Public API
// ============================================================================

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,

    /// The typed configuration, present only when there are no errors.
    pub config: Option<ClockConfig>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Configuration validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a raw configuration.
    ///
    /// When `reference` is given, the window is also checked against it
    /// (already ended, suspiciously far away); those checks only warn.
    pub fn validate(
        &mut self,
        raw: &RawClockConfig,
        reference: Option<DateTime<Utc>>,
    ) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        let school_offset = self.validate_stz(raw.stz);
        let aos = self.validate_instant("aos", "AOS", raw.aos.as_deref());
        let los = self.validate_instant("los", "LOS", raw.los.as_deref());

        let mut config = None;
        if let (Some(aos), Some(los)) = (aos, los) {
            if self.validate_window(aos, los) {
                if let Some(now) = reference {
                    self.validate_against_reference(aos, los, now);
                }
                config = Some(ClockConfig {
                    aos,
                    los,
                    school_offset: school_offset.unwrap_or_default(),
                });
            }
        }

        if !self.errors.is_empty() {
            config = None;
        }

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
            config,
        }
    }

    // ========================================================================
    // Field Validation
    // ========================================================================

    fn validate_stz(&mut self, stz: Option<f64>) -> Option<SchoolOffset> {
        let Some(hours) = stz else {
            self.add_warning(
                "stz",
                "school time zone offset not set; school clock will show UTC",
            );
            return Some(SchoolOffset::UTC);
        };

        match SchoolOffset::from_hours(hours) {
            Ok(offset) => Some(offset),
            Err(e) => {
                self.add_error("stz", &e.to_string());
                None
            }
        }
    }

    fn validate_instant(
        &mut self,
        key: &str,
        label: &str,
        value: Option<&str>,
    ) -> Option<DateTime<Utc>> {
        let Some(text) = value else {
            self.add_error(key, &format!("{label} is required"));
            return None;
        };

        match parse_instant(text) {
            Ok(instant) => Some(instant),
            Err(e) => {
                self.add_error(
                    key,
                    &format!(
                        "{label} '{text}' is in an incorrect format ({e}); \
                         expected YYYY-MM-DD HH:MM:SS in UTC"
                    ),
                );
                None
            }
        }
    }

    // ========================================================================
    // Semantic Validation
    // ========================================================================

    /// Returns `true` if AOS is strictly before LOS.
    fn validate_window(&mut self, aos: DateTime<Utc>, los: DateTime<Utc>) -> bool {
        if los < aos {
            self.add_error("los", "LOS is before AOS");
            false
        } else if los == aos {
            self.add_error("los", "LOS is the same instant as AOS");
            false
        } else {
            true
        }
    }

    fn validate_against_reference(
        &mut self,
        aos: DateTime<Utc>,
        los: DateTime<Utc>,
        now: DateTime<Utc>,
    ) {
        if los <= now {
            self.add_warning(
                "los",
                &format!(
                    "contact window already ended at {} UTC; timers will read zero",
                    format_instant(&los)
                ),
            );
        } else if (aos - now).num_seconds() > FAR_AOS_WARNING_SECS {
            self.add_warning(
                "aos",
                &format!(
                    "AOS {} UTC is more than 24 hours away; check the date",
                    format_instant(&aos)
                ),
            );
        }
    }

    // ========================================================================
    // Helper Methods
    // ========================================================================

    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn raw(stz: Option<f64>, aos: Option<&str>, los: Option<&str>) -> RawClockConfig {
        RawClockConfig {
            stz,
            aos: aos.map(str::to_string),
            los: los.map(str::to_string),
        }
    }

    fn validate(config: &RawClockConfig) -> ValidationResult {
        Validator::new().validate(config, None)
    }

    #[test]
    fn test_valid_config() {
        let result = validate(&raw(
            Some(-5.0),
            Some("2024-09-04 18:40:00"),
            Some("2024-09-04 18:42:00"),
        ));
        assert!(result.is_valid(), "errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());

        let config = result.config.unwrap();
        assert_eq!(
            config.aos,
            Utc.with_ymd_and_hms(2024, 9, 4, 18, 40, 0).unwrap()
        );
        assert_eq!(config.school_offset.seconds(), -5 * 3600);
    }

    #[test]
    fn test_missing_stz_warns_and_defaults_to_utc() {
        let result = validate(&raw(
            None,
            Some("2024-09-04 18:40:00"),
            Some("2024-09-04 18:42:00"),
        ));
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].path, "stz");
        assert_eq!(result.config.unwrap().school_offset, SchoolOffset::UTC);
    }

    #[test]
    fn test_missing_aos_and_los_both_reported() {
        let result = validate(&raw(Some(0.0), None, None));
        assert!(result.has_errors());
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors.iter().any(|e| e.message == "AOS is required"));
        assert!(result.errors.iter().any(|e| e.message == "LOS is required"));
        assert!(result.config.is_none());
    }

    #[test]
    fn test_malformed_aos() {
        let result = validate(&raw(
            Some(0.0),
            Some("2024-09-04 18h40"),
            Some("2024-09-04 18:42:00"),
        ));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].path, "aos");
        assert!(result.errors[0].message.contains("incorrect format"));
    }

    #[test]
    fn test_los_before_aos() {
        let result = validate(&raw(
            Some(0.0),
            Some("2024-09-04 18:42:00"),
            Some("2024-09-04 18:40:00"),
        ));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "LOS is before AOS");
        assert!(result.config.is_none());
    }

    #[test]
    fn test_los_equal_to_aos() {
        let result = validate(&raw(
            Some(0.0),
            Some("2024-09-04 18:40:00"),
            Some("2024-09-04 18:40:00"),
        ));
        assert!(result.has_errors());
    }

    #[test]
    fn test_bad_stz_blocks_config_even_with_valid_window() {
        let result = validate(&raw(
            Some(-3.3),
            Some("2024-09-04 18:40:00"),
            Some("2024-09-04 18:42:00"),
        ));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].path, "stz");
        assert!(result.config.is_none());
    }

    #[test]
    fn test_collects_all_errors() {
        let result = validate(&raw(Some(99.0), Some("nope"), None));
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_ended_window_warns() {
        let now = Utc.with_ymd_and_hms(2024, 9, 5, 0, 0, 0).unwrap();
        let result = Validator::new().validate(
            &raw(
                Some(0.0),
                Some("2024-09-04 18:40:00"),
                Some("2024-09-04 18:42:00"),
            ),
            Some(now),
        );
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("already ended"));
    }

    #[test]
    fn test_far_aos_warns() {
        let now = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();
        let result = Validator::new().validate(
            &raw(
                Some(0.0),
                Some("2024-09-04 18:40:00"),
                Some("2024-09-04 18:42:00"),
            ),
            Some(now),
        );
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("24 hours"));
    }

    #[test]
    fn test_validator_is_reusable() {
        let mut validator = Validator::new();
        let bad = validator.validate(&raw(None, None, None), None);
        assert!(bad.has_errors());
        let good = validator.validate(
            &raw(
                Some(1.0),
                Some("2024-09-04 18:40:00"),
                Some("2024-09-04 18:42:00"),
            ),
            None,
        );
        assert!(good.is_valid());
    }
}
