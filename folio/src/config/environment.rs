//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `FOLIO_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Backend, Config};
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// | Variable | Field |
/// |---|---|
/// | `FOLIO_STORAGE_ROOT` | `storage.root` |
/// | `FOLIO_BACKEND` | `storage.backend` |
/// | `FOLIO_EXTENSION` | `storage.extension` |
/// | `FOLIO_DEFAULT_PAGE` | `storage.default_page` |
/// | `FOLIO_CHARSET` | `http.charset` |
/// | `FOLIO_SERVE_INTERFACE` | `serve.interface` |
/// | `FOLIO_SERVE_PORT` | `serve.port` |
/// | `FOLIO_BUSY_TIMEOUT_MS` | `busy_timeout_ms` |
///
/// # Examples
///
/// ```no_run
/// use folio::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric port, unknown backend).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(root) = Self::var("FOLIO_STORAGE_ROOT") {
            config.storage.get_or_insert_with(Default::default).root = Some(root);
        }

        if let Some(backend) = Self::var("FOLIO_BACKEND") {
            let backend: Backend = backend.parse().map_err(|message| Error::Validation {
                field: "FOLIO_BACKEND".into(),
                message,
            })?;
            config.storage.get_or_insert_with(Default::default).backend = Some(backend);
        }

        if let Some(extension) = Self::var("FOLIO_EXTENSION") {
            config.storage.get_or_insert_with(Default::default).extension = Some(extension);
        }

        if let Some(page) = Self::var("FOLIO_DEFAULT_PAGE") {
            config.storage.get_or_insert_with(Default::default).default_page = Some(page);
        }

        if let Some(charset) = Self::var("FOLIO_CHARSET") {
            config.http.get_or_insert_with(Default::default).charset = Some(charset);
        }

        Self::apply_serve_overrides(config)?;

        if let Some(ms) = Self::var("FOLIO_BUSY_TIMEOUT_MS") {
            config.busy_timeout_ms = Some(ms.parse().map_err(|_| Error::Validation {
                field: "FOLIO_BUSY_TIMEOUT_MS".into(),
                message: "Must be a non-negative integer".into(),
            })?);
        }

        Ok(())
    }

    fn apply_serve_overrides(config: &mut Config) -> Result<()> {
        if let Some(interface) = Self::var("FOLIO_SERVE_INTERFACE") {
            config.serve.get_or_insert_with(Default::default).interface = Some(interface);
        }

        if let Some(port) = Self::var("FOLIO_SERVE_PORT") {
            let port = port.parse().map_err(|_| Error::Validation {
                field: "FOLIO_SERVE_PORT".into(),
                message: format!("Invalid port number: {port}"),
            })?;
            config.serve.get_or_insert_with(Default::default).port = Some(port);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.is_empty())
    }
}
