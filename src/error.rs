//! Error types for the ARISS clock
//!
//! A small hierarchy: configuration problems (including the invalid
//! contact window the engine refuses to accept), I/O, and serialization,
//! all mapped onto process exit codes.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Process exit codes.
pub struct ExitCode;

impl ExitCode {
    pub const SUCCESS: i32 = 0;
    pub const ERROR: i32 = 1;

    /// Bad or missing window, unreadable YAML, or a freshly written template.
    pub const CONFIG_ERROR: i32 = 2;

    pub const IO_ERROR: i32 = 3;

    /// `EX_USAGE`: a bad `--at` value and similar.
    pub const USAGE_ERROR: i32 = 64;

    /// 128 + SIGINT.
    pub const INTERRUPTED: i32 = 130;

    /// 128 + SIGTERM.
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for clock operations.
///
/// Aggregates the domain errors and maps each one to an exit code.
#[derive(Debug, Error)]
pub enum ClockError {
    /// Configuration loading, validation, or contact window error
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line usage not caught by the argument parser
    #[error("usage error: {0}")]
    Usage(String),
}

impl ClockError {
    /// Exit code the process should end with.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while reading, checking, or writing the clock configuration.
///
/// `InvalidWindow` is the one error the clock engine itself can raise:
/// it refuses to be built around a window whose AOS is not strictly
/// before its LOS.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file is empty, not UTF-8, or not YAML.
    #[error("parse error in {path}: {message}")]
    ParseError {
        path: PathBuf,
        /// 1-based, when the YAML parser reports one.
        line: Option<usize>,
        message: String,
    },

    /// One or more keys failed validation; `errors` holds every issue found.
    #[error("validation failed for {path}:\n{}", render_issues(.errors))]
    ValidationError {
        path: String,
        errors: Vec<ValidationIssue>,
    },

    #[error("file not found: {path}")]
    MissingFile { path: PathBuf },

    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fresh template was written because no configuration existed
    #[error(
        "configuration file missing; created a new one at {path}. \
         Edit the AOS/LOS date/times, then restart"
    )]
    TemplateCreated {
        /// Path of the generated template
        path: PathBuf,
    },

    /// Refused to overwrite an existing configuration file
    #[error("{path} already exists (use --force to overwrite)")]
    AlreadyExists {
        /// Path of the existing file
        path: PathBuf,
    },

    /// Configuration file exceeds the size limit
    #[error("{path} is {size} bytes (limit: {limit})")]
    TooLarge {
        /// Path to the configuration file
        path: PathBuf,
        /// Actual size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: u64,
    },

    /// AOS is not strictly before LOS
    #[error("LOS ({los}) is not after AOS ({aos}); fix the configuration and restart")]
    InvalidWindow {
        /// Configured acquisition of signal
        aos: DateTime<Utc>,
        /// Configured loss of signal
        los: DateTime<Utc>,
    },

    /// A single key holds something outside its accepted range or format.
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
}

fn render_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Validation Types
// ============================================================================

/// One finding from [`Validator`](crate::config::validation::Validator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Configuration key the issue refers to (e.g. `"aos"`)
    pub path: String,
    pub message: String,
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{label}: {} at {}", self.message, self.path)
    }
}

/// Whether an issue blocks the clock from starting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocks startup.
    Error,
    /// Logged; the clock still starts (fails `validate --strict`).
    Warning,
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result alias used by the command layer.
pub type Result<T> = std::result::Result<T, ClockError>;

// ============================================================================
// Tests
// ============================================================================
