//! Shared integration-test harness for running the `ariss-clock` binary
//! as a child process.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Helpers for invoking the `ariss-clock` binary.
pub struct ClockProcess;

impl ClockProcess {
    fn command() -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ariss-clock"));
        cmd.env_remove("ARISS_CLOCK_CONFIG")
            .env_remove("ARISS_CLOCK_LOG_LEVEL")
            .env_remove("ARISS_CLOCK_COLOR")
            .env_remove("ARISS_CLOCK_LOG_FORMAT")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Runs the binary with `args` and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Self::command()
            .args(args)
            .output()
            .expect("failed to run ariss-clock")
    }

    /// Runs the binary with `args` from `dir`, so the default
    /// configuration file is looked up there.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command_in(dir: &Path, args: &[&str]) -> Output {
        Self::command()
            .current_dir(dir)
            .args(args)
            .output()
            .expect("failed to run ariss-clock")
    }

    /// Runs the binary with `args` and extra environment variables.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command_env(args: &[&str], envs: &[(&str, &str)]) -> Output {
        Self::command()
            .envs(envs.iter().copied())
            .args(args)
            .output()
            .expect("failed to run ariss-clock")
    }

    /// Returns the path to a test fixture.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Returns a fixture path as a `&str`-friendly `String`.
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub fn fixture(name: &str) -> String {
        Self::fixture_path(name)
            .to_str()
            .expect("non-UTF-8 fixture path")
            .to_string()
    }
}

/// Lossy stdout.
#[must_use]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lossy stderr.
#[must_use]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
