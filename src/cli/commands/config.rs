//! Configuration commands: `validate` and `init`.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::{InitArgs, OutputFormat, ValidateArgs};
use crate::clock::{SystemTimeSource, TimeSource};
use crate::config::{ConfigLoader, LoaderOptions, resolve_config_path, write_template};
use crate::error::{ClockError, ConfigError, ExitCode};

/// Outcome of validating one file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// File that was checked.
    pub file: PathBuf,
    /// Whether the file passed (under `--strict`, warnings fail it).
    pub valid: bool,
    /// Blocking problems.
    pub errors: Vec<String>,
    /// Non-blocking problems.
    pub warnings: Vec<String>,
}

impl FileReport {
    fn check(loader: &ConfigLoader, path: &Path, strict: bool) -> Self {
        tracing::info!(file = %path.display(), "validating configuration");

        let (errors, warnings) = match loader.load(path) {
            Ok(loaded) => (
                Vec::new(),
                loaded
                    .warnings
                    .into_iter()
                    .map(|w| match w.location {
                        Some(location) => format!("{} at {location}", w.message),
                        None => w.message,
                    })
                    .collect(),
            ),
            Err(ConfigError::ValidationError { errors, .. }) => (
                errors.into_iter().map(|issue| issue.to_string()).collect(),
                Vec::new(),
            ),
            Err(other) => (vec![other.to_string()], Vec::new()),
        };

        let valid = errors.is_empty() && !(strict && !warnings.is_empty());
        Self {
            file: path.to_path_buf(),
            valid,
            errors,
            warnings,
        }
    }
}

/// Validate configuration files without starting the clock.
///
/// Every file is checked and reported; the exit code is
/// [`ExitCode::CONFIG_ERROR`] if any of them failed.
///
/// # Errors
///
/// Returns an error only if the JSON report cannot be serialized.
pub fn validate(args: &ValidateArgs) -> Result<i32, ClockError> {
    let loader = ConfigLoader::new(LoaderOptions {
        reference_time: Some(SystemTimeSource.now()),
        ..LoaderOptions::default()
    });

    let reports: Vec<FileReport> = args
        .files
        .iter()
        .map(|path| FileReport::check(&loader, path, args.strict))
        .collect();

    match args.format {
        OutputFormat::Human => {
            for report in &reports {
                let status = if report.valid { "ok" } else { "FAILED" };
                println!("{}: {status}", report.file.display());
                for error in &report.errors {
                    println!("  {error}");
                }
                for warning in &report.warnings {
                    println!("  warning: {warning}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    if reports.iter().all(|r| r.valid) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::CONFIG_ERROR)
    }
}

/// Write the configuration template.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyExists`] unless `--force`, or an I/O
/// error if the file cannot be written.
pub fn init(args: &InitArgs) -> Result<i32, ClockError> {
    let path = resolve_config_path(args.config.as_deref());
    write_template(&path, args.force)?;
    tracing::info!(path = %path.display(), "configuration template written");
    println!(
        "Wrote {}. Edit the AOS/LOS date/times, then start the clock.",
        path.display()
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn report_for_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "ok.yaml",
            "stz: -5\naos: 2024-09-04 18:40:00\nlos: 2024-09-04 18:42:00\n",
        );
        let report = FileReport::check(&ConfigLoader::with_defaults(), &path, false);
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn report_lists_every_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "bad.yaml", "stz: 0\naos: nonsense\n");
        let report = FileReport::check(&ConfigLoader::with_defaults(), &path, false);
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn strict_fails_on_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "warn.yaml",
            "aos: 2024-09-04 18:40:00\nlos: 2024-09-04 18:42:00\n",
        );
        let loader = ConfigLoader::with_defaults();
        assert!(FileReport::check(&loader, &path, false).valid);
        let strict = FileReport::check(&loader, &path, true);
        assert!(!strict.valid);
        assert_eq!(strict.warnings.len(), 1);
    }

    #[test]
    fn missing_file_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let report = FileReport::check(
            &ConfigLoader::with_defaults(),
            &dir.path().join("nope.yaml"),
            false,
        );
        assert!(!report.valid);
        assert!(report.errors[0].contains("not found"));
    }
}
