//! One-shot clock state.
//!
//! Evaluates the engine at a single instant (now, or `--at`) and prints
//! the snapshot. Handy for checking a configuration ahead of a pass.

use crate::cli::args::{OutputFormat, StatusArgs};
use crate::clock::{FixedTimeSource, SystemTimeSource, TimeSource, parse_instant};
use crate::config::resolve_config_path;
use crate::display::{DisplayOptions, render_frame};
use crate::error::{ClockError, ExitCode};

use super::{load_engine, local_offset_at};

/// Print the clock state.
///
/// # Errors
///
/// Returns a usage error for an unparseable `--at`, or a configuration
/// error if the file cannot be loaded.
pub fn run(args: &StatusArgs) -> Result<i32, ClockError> {
    let source = match args.at.as_deref() {
        Some(text) => FixedTimeSource::new(
            parse_instant(text)
                .map_err(|e| ClockError::Usage(format!("invalid --at '{text}': {e}")))?,
        ),
        None => FixedTimeSource::new(SystemTimeSource.now()),
    };

    let path = resolve_config_path(args.config.as_deref());
    let engine = load_engine(&path, source.now(), false)?;
    let snapshot = engine.advance(source.now());

    match args.format {
        OutputFormat::Human => {
            let options = DisplayOptions {
                background: false,
                ..DisplayOptions::default()
            };
            let frame = render_frame(
                &snapshot,
                engine.school_offset(),
                local_offset_at(snapshot.at),
                &options,
            );
            let colorize = colored::control::SHOULD_COLORIZE.should_colorize();
            print!("{}", frame.to_terminal(colorize, options.background));
            println!("Phase: {}", snapshot.phase);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
