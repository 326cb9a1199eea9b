//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod config;
pub mod predicts;
pub mod run;
pub mod status;
pub mod version;

use std::io::IsTerminal;
use std::path::Path;

use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};

use crate::cli::args::{Cli, ColorChoice, Commands};
use crate::clock::ContactClockEngine;
use crate::config::{ConfigLoader, LoadWarning, LoaderOptions};
use crate::error::{ClockError, ExitCode};

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// Returns the process exit code on success.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli) -> Result<i32, ClockError> {
    apply_color_choice(cli.color);

    match cli.command {
        Commands::Run(args) => run::run(&args).await,
        Commands::Status(args) => status::run(&args),
        Commands::Predicts(args) => predicts::run(&args),
        Commands::Validate(args) => config::validate(&args),
        Commands::Init(args) => config::init(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Version(args) => {
            version::run(&args)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Sets `colored`'s global override for stdout rendering.
pub fn apply_color_choice(choice: ColorChoice) {
    let enabled = match choice {
        ColorChoice::Auto => {
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };
    colored::control::set_override(enabled);
}

/// Loads the configuration at `path` and builds the engine.
///
/// `now` is only used for the time-relative warnings. With `create`, a
/// missing file is replaced by the template and startup halts.
pub(crate) fn load_engine(
    path: &Path,
    now: DateTime<Utc>,
    create: bool,
) -> Result<ContactClockEngine, ClockError> {
    let loader = ConfigLoader::new(LoaderOptions {
        reference_time: Some(now),
        ..LoaderOptions::default()
    });

    tracing::debug!(path = %path.display(), "loading configuration");
    let loaded = if create {
        loader.load_or_create(path)?
    } else {
        loader.load(path)?
    };
    log_warnings(&loaded.warnings);

    let engine = ContactClockEngine::from_config(&loaded.config)?;
    tracing::info!(
        aos = %engine.aos(),
        los = %engine.los(),
        school_offset = %engine.school_offset(),
        "contact window loaded"
    );
    Ok(engine)
}

pub(crate) fn log_warnings(warnings: &[LoadWarning]) {
    for warning in warnings {
        tracing::warn!(
            location = warning.location.as_deref().unwrap_or("<unknown>"),
            "{}",
            warning.message
        );
    }
}

/// Ground station offset in effect at `at`.
pub(crate) fn local_offset_at(at: DateTime<Utc>) -> FixedOffset {
    Local.offset_from_utc_datetime(&at.naive_utc()).fix()
}
