//! Configuration loader
//!
//! This module implements the configuration loading pipeline:
//! 1. Size check and read
//! 2. YAML parsing
//! 3. Unknown key detection (with typo suggestions)
//! 4. Deserialization to `RawClockConfig`
//! 5. Validation
//! 6. Freeze with `Arc`
//!
//! It also owns the default template written when no configuration
//! exists yet.

use crate::config::schema::{CANONICAL_KEYS, ClockConfig, KNOWN_KEYS, RawClockConfig};
use crate::config::validation::Validator;
use crate::error::ConfigError;

use chrono::{DateTime, Utc};
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "ariss_clock.yaml";

// ============================================================================
// Public API
// ============================================================================

/// Options for the configuration loader.
#[derive(Debug, Clone, Default)]
pub struct LoaderOptions {
    /// Limits for configuration size.
    pub config_limits: ConfigLimits,

    /// Instant to check the window against (e.g. "now"). `None` skips
    /// the time-relative warnings.
    pub reference_time: Option<DateTime<Utc>>,
}

/// Limits for configuration size to prevent resource exhaustion.
#[derive(Debug, Clone)]
pub struct ConfigLimits {
    /// Maximum configuration file size in bytes.
    pub max_config_size: u64,
}

impl Default for ConfigLimits {
    fn default() -> Self {
        Self {
            max_config_size: env_or("ARISS_CLOCK_MAX_CONFIG_SIZE", 64 * 1024),
        }
    }
}

/// Result of loading a configuration file.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded and validated configuration.
    pub config: Arc<ClockConfig>,

    /// Warnings encountered during loading.
    pub warnings: Vec<LoadWarning>,
}

/// Warning during configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// Warning message.
    pub message: String,

    /// Location where the warning occurred.
    pub location: Option<String>,
}

/// Configuration loader.
///
/// Handles the full loading pipeline from YAML file to frozen `ClockConfig`.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

impl ConfigLoader {
    /// Creates a new configuration loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a new configuration loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LoaderOptions::default())
    }

    /// Loads a configuration file and returns the frozen configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist, cannot be read, or is too large
    /// - The YAML is malformed or empty
    /// - Validation fails
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
        let limit = self.options.config_limits.max_config_size;
        if metadata.len() > limit {
            return Err(ConfigError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit,
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
        self.load_from_str_at(&content, path)
    }

    /// Loads a configuration file, writing the default template first if
    /// it does not exist.
    ///
    /// A freshly written template is never loaded: the operator must edit
    /// the AOS/LOS first, so this returns [`ConfigError::TemplateCreated`].
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load), plus `TemplateCreated` when the file
    /// was missing.
    pub fn load_or_create(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        if !path.exists() {
            write_template(path, false)?;
            tracing::warn!(path = %path.display(), "configuration file missing; template created");
            return Err(ConfigError::TemplateCreated {
                path: path.to_path_buf(),
            });
        }
        self.load(path)
    }

    /// Loads a configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn load_from_str(&self, content: &str) -> Result<LoadResult, ConfigError> {
        self.load_from_str_at(content, Path::new("<string>"))
    }

    fn load_from_str_at(&self, content: &str, path: &Path) -> Result<LoadResult, ConfigError> {
        let empty = || ConfigError::ParseError {
            path: path.to_path_buf(),
            line: None,
            message: "configuration file is empty".to_string(),
        };
        if content.trim().is_empty() {
            return Err(empty());
        }

        // Stage 2: YAML parsing
        let root: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })?;

        if root.is_null() {
            return Err(empty());
        }

        let Value::Mapping(mapping) = &root else {
            return Err(ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: "expected a mapping of stz/aos/los keys".to_string(),
            });
        };

        // Stage 3: unknown keys
        let mut warnings: Vec<LoadWarning> = mapping
            .keys()
            .filter_map(unknown_key_warning)
            .collect();

        // Stage 4: deserialization
        let raw: RawClockConfig =
            serde_yaml::from_value(root).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: format!("failed to deserialize configuration: {e}"),
            })?;

        // Stage 5: validation
        let mut validator = Validator::new();
        let result = validator.validate(&raw, self.options.reference_time);

        if result.has_errors() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                errors: result.errors,
            });
        }

        warnings.extend(result.warnings.into_iter().map(|issue| LoadWarning {
            message: issue.message,
            location: Some(issue.path),
        }));

        let Some(config) = result.config else {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                errors: Vec::new(),
            });
        };

        // Stage 6: freeze
        Ok(LoadResult {
            config: Arc::new(config),
            warnings,
        })
    }
}

// ============================================================================
// Template
// ============================================================================

/// Default configuration written for first-time users.
#[must_use]
pub fn default_template() -> String {
    format!(
        "# ARISS Clock configuration\n\
         # Used by ariss-clock version {version}\n\
         #\n\
         # stz: school time zone offset from UTC in hours, in quarter-hour\n\
         #      steps (e.g. -5, -2.5, 5.75). Only used for the school clock.\n\
         # aos: predicted Acquisition Of Signal, UTC, YYYY-MM-DD HH:MM:SS\n\
         # los: predicted Loss Of Signal, UTC, YYYY-MM-DD HH:MM:SS\n\
         #\n\
         # The date matters. LOS must be after AOS. Edit, then restart.\n\
         stz: 0\n\
         aos: 2024-09-04 12:00:00\n\
         los: 2024-09-04 12:10:00\n",
        version = env!("CARGO_PKG_VERSION"),
    )
}

/// Writes the default template to `path`.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyExists`] if the file exists and `force`
/// is not set, or [`ConfigError::Io`] if writing fails.
pub fn write_template(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    std::fs::write(path, default_template()).map_err(|e| io_error(path, e))
}

/// Resolves the configuration path: explicit flag, else the default
/// file name in the working directory.
#[must_use]
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf)
}

// ============================================================================
// Helpers
// ============================================================================

fn io_error(path: &Path, source: std::io::Error) -> ConfigError {
    if source.kind() == std::io::ErrorKind::NotFound {
        ConfigError::MissingFile {
            path: path.to_path_buf(),
        }
    } else {
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn unknown_key_warning(key: &Value) -> Option<LoadWarning> {
    let Some(name) = key.as_str() else {
        return Some(LoadWarning {
            message: format!("ignoring non-string key {key:?}"),
            location: None,
        });
    };

    if KNOWN_KEYS.contains(&name) {
        return None;
    }

    let message = suggest_key(name).map_or_else(
        || format!("unknown key '{name}' ignored"),
        |hint| format!("unknown key '{name}' ignored (did you mean '{hint}'?)"),
    );

    Some(LoadWarning {
        message,
        location: Some(name.to_string()),
    })
}

/// Suggest a known key for a misspelled one.
///
/// Returns the closest match if its Damerau-Levenshtein distance is ≤ 3.
#[must_use]
pub fn suggest_key(input: &str) -> Option<&'static str> {
    let lower = input.to_ascii_lowercase();
    CANONICAL_KEYS
        .iter()
        .map(|key| (*key, strsim::damerau_levenshtein(&lower, key)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(key, _)| key)
}

fn env_or(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ============================================================================
// Tests
// ============================================================================
