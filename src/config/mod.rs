//! Configuration module
//!
//! Loading, validation, and template generation for the clock's YAML
//! configuration file (school time zone offset, AOS, LOS).

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{
    ConfigLimits, ConfigLoader, DEFAULT_CONFIG_FILE, LoadResult, LoadWarning, LoaderOptions,
    default_template, resolve_config_path, write_template,
};
pub use schema::{ClockConfig, RawClockConfig};
pub use validation::{ValidationResult, Validator};
