//! UTC instant parsing and formatting.
//!
//! Accepted forms, all interpreted as UTC when no offset is given:
//! `2024-09-04 18:40:00`, `2024-09-04T18:40:00`, and RFC 3339
//! (`2024-09-04T18:40:00Z`, `2024-09-04T14:40:00-04:00`).

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Display format used for AOS/LOS predicts and status output.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a timestamp into a whole-second UTC instant.
///
/// # Errors
///
/// Returns the last `chrono` parse error if no accepted form matches.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let input = input.trim();

    let mut last_err = match DateTime::parse_from_rfc3339(input) {
        Ok(dt) => return Ok(whole_second(dt.with_timezone(&Utc))),
        Err(e) => e,
    };

    for format in NAIVE_FORMATS {
        match NaiveDateTime::parse_from_str(input, format) {
            Ok(naive) => return Ok(whole_second(naive.and_utc())),
            Err(e) => last_err = e,
        }
    }

    Err(last_err)
}

// A leap second (`23:59:60`) folds into `23:59:59`.
fn whole_second(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.with_nanosecond(0).unwrap_or(instant)
}

/// Formats an instant as `YYYY-MM-DD HH:MM:SS`.
///
/// [`parse_instant`] reads the result back unchanged.
#[must_use]
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn expected() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 4, 18, 40, 0).unwrap()
    }

    #[test]
    fn parses_space_separated_as_utc() {
        assert_eq!(parse_instant("2024-09-04 18:40:00").unwrap(), expected());
    }

    #[test]
    fn parses_t_separated_as_utc() {
        assert_eq!(parse_instant("2024-09-04T18:40:00").unwrap(), expected());
    }

    #[test]
    fn parses_rfc3339_zulu() {
        assert_eq!(parse_instant("2024-09-04T18:40:00Z").unwrap(), expected());
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        assert_eq!(
            parse_instant("2024-09-04T14:40:00-04:00").unwrap(),
            expected()
        );
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(
            parse_instant("2024-09-04T18:40:00.750Z").unwrap(),
            expected()
        );
    }

    #[test]
    fn trims_whitespace() {
        let parsed = parse_instant("  2024-09-04 18:40:00\n").unwrap();
        assert_eq!(parsed, expected());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_instant("tomorrow at noon").is_err());
        assert!(parse_instant("2024-13-01 00:00:00").is_err());
        assert!(parse_instant("").is_err());
    }

    #[test]
    fn leap_second_folds_into_previous_second() {
        let parsed = parse_instant("2016-12-31T23:59:60Z").unwrap();
        let last_second = Utc.with_ymd_and_hms(2016, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(parsed, last_second);
        assert_eq!(format_instant(&parsed), "2016-12-31 23:59:59");
    }

    #[test]
    fn formatted_instants_parse_back() {
        let instants = [
            expected(),
            Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(10_000, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(-44, 3, 15, 12, 0, 0).unwrap(),
        ];
        for instant in instants {
            let text = format_instant(&instant);
            assert_eq!(parse_instant(&text).ok(), Some(instant), "{text}");
        }
    }

    #[test]
    fn formats_for_display() {
        assert_eq!(format_instant(&expected()), "2024-09-04 18:40:00");
    }
}
