//! Configuration schema definitions.
//!
//! Every field is optional so that partial files and environment overrides
//! can be layered; [`WikiSettings`](super::WikiSettings) fills in the
//! defaults once everything is merged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default response content type.
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// Default response charset.
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Default interface for `folio serve`.
pub const DEFAULT_INTERFACE: &str = "127.0.0.1";

/// Default port for `folio serve`.
pub const DEFAULT_SERVE_PORT: u16 = 8080;

/// Default `SQLite` busy timeout in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use folio::config::{Backend, Config, StorageConfig};
///
/// let config = Config {
///     storage: Some(StorageConfig {
///         backend: Some(Backend::Sqlite),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.backend(), Backend::Sqlite);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where and how pages are stored.
    pub storage: Option<StorageConfig>,

    /// Response metadata.
    pub http: Option<HttpConfig>,

    /// Settings for the built-in HTTP server.
    pub serve: Option<ServeConfig>,

    /// How long a `SQLite` connection waits on a locked database.
    pub busy_timeout_ms: Option<u64>,
}

impl Config {
    /// The configured backend, or the default.
    #[must_use]
    pub fn backend(&self) -> Backend {
        self.storage
            .as_ref()
            .and_then(|s| s.backend)
            .unwrap_or_default()
    }
}

/// Page storage settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Storage root. `~` is expanded; relative paths are taken from the
    /// working directory.
    pub root: Option<String>,

    /// Storage backend.
    pub backend: Option<Backend>,

    /// Suffix appended to page keys on disk.
    pub extension: Option<String>,

    /// Key served for the empty path.
    pub default_page: Option<String>,
}

/// Response metadata settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// Content type of rendered pages.
    pub content_type: Option<String>,

    /// Charset appended to the content type.
    pub charset: Option<String>,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServeConfig {
    /// Interface to bind.
    pub interface: Option<String>,

    /// Port to bind.
    pub port: Option<u16>,
}

/// Storage backend selection.
///
/// # Examples
///
/// ```
/// use folio::config::Backend;
///
/// let backend: Backend = "sqlite".parse().unwrap();
/// assert_eq!(backend, Backend::Sqlite);
/// assert_eq!(backend.to_string(), "sqlite");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One document file per page.
    #[default]
    Files,
    /// One row per page in `folio.db`.
    Sqlite,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Files => write!(f, "files"),
            Self::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "files" | "file" => Ok(Self::Files),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(format!("unknown backend '{s}' (expected files or sqlite)")),
        }
    }
}
