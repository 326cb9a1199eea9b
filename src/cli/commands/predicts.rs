//! AOS/LOS predicts window.
//!
//! Shows the configured pass in UTC and in ground station local time,
//! with the contact length and school offset.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::args::{OutputFormat, PredictsArgs};
use crate::clock::{
    ContactClockEngine, SystemTimeSource, TimeSource, TimerDuration, format_instant,
};
use crate::config::resolve_config_path;
use crate::error::{ClockError, ExitCode};

use super::{load_engine, local_offset_at};

/// The configured pass, ready for display.
#[derive(Debug, Serialize)]
pub struct Predicts {
    /// AOS in UTC.
    pub aos: DateTime<Utc>,
    /// LOS in UTC.
    pub los: DateTime<Utc>,
    /// AOS in ground station local time.
    pub aos_local: String,
    /// LOS in ground station local time.
    pub los_local: String,
    /// Contact length.
    pub contact_duration: TimerDuration,
    /// School offset from UTC, in hours.
    pub school_offset_hours: f64,
}

impl Predicts {
    /// Builds the predicts view of an engine.
    #[must_use]
    pub fn from_engine(engine: &ContactClockEngine) -> Self {
        let local = |at: DateTime<Utc>| {
            at.with_timezone(&local_offset_at(at))
                .format("%Y-%m-%d %H:%M:%S %:z")
                .to_string()
        };
        Self {
            aos: engine.aos(),
            los: engine.los(),
            aos_local: local(engine.aos()),
            los_local: local(engine.los()),
            contact_duration: engine.contact_duration(),
            school_offset_hours: engine.school_offset().hours(),
        }
    }
}

/// Print the configured AOS/LOS.
///
/// # Errors
///
/// Returns a configuration error if the file cannot be loaded.
pub fn run(args: &PredictsArgs) -> Result<i32, ClockError> {
    let path = resolve_config_path(args.config.as_deref());
    let engine = load_engine(&path, SystemTimeSource.now(), false)?;
    let predicts = Predicts::from_engine(&engine);

    match args.format {
        OutputFormat::Human => {
            println!("AOS/LOS Predicts");
            println!(
                "  AOS       {} UTC   {}",
                format_instant(&predicts.aos),
                predicts.aos_local
            );
            println!(
                "  LOS       {} UTC   {}",
                format_instant(&predicts.los),
                predicts.los_local
            );
            println!("  Duration  {}", predicts.contact_duration);
            println!("  School    UTC{}", engine.school_offset());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&predicts)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
