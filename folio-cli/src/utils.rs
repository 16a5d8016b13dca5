//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, settings loading, opening the
//! wiki, and output formatting.

use crate::error::CliError;
use folio::config::{Backend, ConfigBuilder, WikiSettings};
use folio::database::default_data_dir;
use folio::path::normalize::normalize;
use folio::Wiki;
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the storage root.
    pub root: Option<PathBuf>,

    /// Override the storage backend.
    pub backend: Option<Backend>,
}

/// Resolve the data directory: `--data-dir` (or `FOLIO_DATA_DIR`), then
/// `~/.folio`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => default_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load hierarchical configuration and resolve it into wiki settings.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_settings(global: &GlobalOptions) -> Result<WikiSettings, CliError> {
    let data_dir = resolve_data_dir(global)?;

    let mut settings = ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .build_settings()
        .map_err(|e| CliError::Config(e.to_string()))?;

    if let Some(ref root) = global.root {
        settings.root = normalize_path(root)?;
    }
    if let Some(backend) = global.backend {
        settings.backend = backend;
    }

    log::debug!(
        "storage root {} ({} backend)",
        settings.root.display(),
        settings.backend
    );
    Ok(settings)
}

/// Load settings and open the wiki, creating the storage root if needed.
pub fn open_wiki(global: &GlobalOptions) -> Result<Wiki, CliError> {
    let settings = load_settings(global)?;
    Wiki::open(settings).map_err(CliError::from)
}

/// Normalize a path (make absolute, expand ~) without following symlinks.
pub fn normalize_path(path: &Path) -> Result<PathBuf, CliError> {
    normalize(path).map_err(CliError::from)
}

/// Format a modification token for display.
pub fn format_timestamp(secs: i64) -> String {
    use chrono::DateTime;
    match DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => secs.to_string(),
    }
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

/// Find project configuration file (folio.yaml) starting from current directory.
///
/// Searches up the directory tree for `folio.local.yaml` or `folio.yaml`.
/// Returns the first match found, with `folio.local.yaml` taking precedence.
pub fn find_project_config() -> Result<Option<PathBuf>, CliError> {
    let mut current = env::current_dir()?;

    loop {
        for name in ["folio.local.yaml", "folio.yaml"] {
            let candidate = current.join(name);
            if candidate.exists() {
                return Ok(Some(candidate));
            }
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

/// Resolve the configuration file to use (project or user).
///
/// Returns the project configuration file if one exists, otherwise the
/// user configuration file in the data directory (which may not exist yet).
pub fn resolve_config_file(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match find_project_config()? {
        Some(path) => Ok(path),
        None => Ok(resolve_data_dir(global)?.join("config.yaml")),
    }
}
