//! CLI argument definitions
//!
//! All Clap derive structs for `ariss-clock` command-line parsing.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::display::DisplayOptions;
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// AOS/LOS countdown clock for ARISS school contacts.
#[derive(Parser, Debug)]
#[command(name = "ariss-clock", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// No log output; errors are still printed.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Colors for frames and logs.
    #[arg(long, default_value = "auto", global = true, env = "ARISS_CLOCK_COLOR")]
    pub color: ColorChoice,

    /// Log output format on stderr.
    #[arg(
        long,
        default_value = "human",
        global = true,
        env = "ARISS_CLOCK_LOG_FORMAT"
    )]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the live countdown display.
    Run(RunArgs),

    /// Print the clock state at one instant.
    Status(StatusArgs),

    /// Show the configured AOS/LOS predicts.
    Predicts(PredictsArgs),

    /// Validate configuration files without starting the clock.
    Validate(ValidateArgs),

    /// Write a configuration template.
    Init(InitArgs),

    /// Print a shell completion script.
    Completions(CompletionsArgs),

    /// Show the version and alert thresholds.
    Version(VersionArgs),
}

// ============================================================================
// Run / Status / Predicts
// ============================================================================

/// Arguments for `run`.
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct RunArgs {
    /// Path to YAML configuration file.
    #[arg(short = 'C', long, env = "ARISS_CLOCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Black & white display.
    #[arg(short, long)]
    pub bw: bool,

    /// Color the text instead of the background.
    #[arg(short = 'c', long)]
    pub no_background: bool,

    /// Hide the label above each clock.
    #[arg(short = 'l', long)]
    pub no_labels: bool,

    /// Hide the school clock.
    #[arg(short = 's', long)]
    pub no_school: bool,

    /// Put the wall clocks below the timers.
    #[arg(short = 't', long)]
    pub clocks_bottom: bool,

    /// Refresh interval (e.g. `1s`, `500ms`).
    #[arg(long, default_value = "1s", value_parser = parse_interval)]
    pub interval: Duration,

    /// Render a single frame and exit.
    #[arg(long)]
    pub once: bool,
}

impl RunArgs {
    /// Display options selected by the flags.
    #[must_use]
    pub const fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            monochrome: self.bw,
            background: !self.no_background,
            labels: !self.no_labels,
            school_clock: !self.no_school,
            clocks_bottom: self.clocks_bottom,
        }
    }
}

/// Arguments for `status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Path to YAML configuration file.
    #[arg(short = 'C', long, env = "ARISS_CLOCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Evaluate at this UTC instant instead of now.
    #[arg(long, value_name = "TIMESTAMP")]
    pub at: Option<String>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `predicts`.
#[derive(Args, Debug)]
pub struct PredictsArgs {
    /// Path to YAML configuration file.
    #[arg(short = 'C', long, env = "ARISS_CLOCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Validate / Init
// ============================================================================

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// One or more YAML files; each gets its own report.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Fail on warnings too (unknown keys, window already over).
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the template.
    #[arg(short = 'C', long, env = "ARISS_CLOCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for `completions`.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    pub shell: Shell,
}

/// Arguments for `version`.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// When to emit ANSI colors, for both the frames and the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// Output of `status`, `predicts`, `validate`, and `version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    /// Pretty-printed JSON on stdout.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

fn parse_interval(value: &str) -> Result<Duration, String> {
    let interval = humantime::parse_duration(value).map_err(|e| e.to_string())?;
    if interval.is_zero() {
        return Err("interval must be greater than zero".to_string());
    }
    Ok(interval)
}

// ============================================================================
// Tests
// ============================================================================
