//! Version information display
//!
//! Prints version and build metadata in human or JSON format.

use serde::Serialize;

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::clock::{CRITICAL_THRESHOLD, WARNING_THRESHOLD};
use crate::error::ClockError;

#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    warning_threshold_secs: u64,
    critical_threshold_secs: u64,
}

/// Print version and build information.
///
/// # Errors
///
/// Returns an error if the JSON output cannot be serialized.
pub fn run(args: &VersionArgs) -> Result<(), ClockError> {
    let info = VersionInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        warning_threshold_secs: WARNING_THRESHOLD.as_secs(),
        critical_threshold_secs: CRITICAL_THRESHOLD.as_secs(),
    };

    match args.format {
        OutputFormat::Human => {
            println!("{} {}", info.name, info.version);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&info)?);
        }
    }
    Ok(())
}
