//! `ariss-clock` - AOS/LOS countdown clock for ARISS school contacts
//!
//! This library provides the contact clock engine (pure timing and alert
//! logic for one predicted ISS pass), its YAML configuration, and the
//! terminal presentation used by the `ariss-clock` binary.

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod observability;
