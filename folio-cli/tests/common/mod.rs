//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Page helpers wrapping `edit` and `show`

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into tests.
const FOLIO_ENV_VARS: [&str; 10] = [
    "FOLIO_DATA_DIR",
    "FOLIO_STORAGE_ROOT",
    "FOLIO_BACKEND",
    "FOLIO_EXTENSION",
    "FOLIO_DEFAULT_PAGE",
    "FOLIO_CHARSET",
    "FOLIO_SERVE_INTERFACE",
    "FOLIO_SERVE_PORT",
    "FOLIO_BUSY_TIMEOUT_MS",
    "FOLIO_LOG_MODE",
];

/// Test environment with isolated data directory and storage root.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory; commands run here
    pub temp_path: PathBuf,
    /// Path to the folio data directory
    pub data_dir: PathBuf,
    /// Path to the storage root
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// Neither the data directory nor the root exists yet.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("folio-data");
        let root = temp_path.join("wiki");

        Self {
            temp_dir,
            temp_path,
            data_dir,
            root,
        }
    }

    /// A command with only the binary, run from the temp directory with
    /// `FOLIO_*` variables cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("folio").expect("Failed to find folio binary");
        cmd.current_dir(&self.temp_path);
        for var in FOLIO_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command with `--data-dir` and `--root` pointing into the
    /// environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .arg("--root")
            .arg(&self.root);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Save a page and return its new token.
    ///
    /// # Panics
    /// Panics if the edit fails.
    pub fn edit(&self, path: &str, expect: &str, title: &str, body: &str) -> i64 {
        let output = self
            .command()
            .args(["edit", path, "--expect", expect, "--title", title, "--body", body])
            .output()
            .expect("Failed to run edit command");

        assert!(
            output.status.success(),
            "Edit failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        parse_token(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// `show --json` parsed into a JSON value.
    pub fn show_json(&self, path: &str) -> serde_json::Value {
        let output = self
            .command()
            .args(["show", path, "--json"])
            .output()
            .expect("Failed to run show command");

        assert!(
            output.status.success(),
            "Show failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("show --json did not print JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the token printed by `edit`.
#[allow(dead_code)]
pub fn parse_token(output: &str) -> i64 {
    output
        .trim()
        .parse()
        .expect("Output is not a valid token")
}
