//! Command-line interface
//!
//! Argument parsing (`args`) and the command handlers (`commands`).

pub mod args;
pub mod commands;
