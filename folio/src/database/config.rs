//! Database configuration and connection parameters.
//!
//! This module provides configuration types for database connections,
//! including path resolution and connection parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// File name of the page database inside a storage root.
pub const DATABASE_FILE: &str = "folio.db";

/// Configuration for database connections.
///
/// This struct contains all parameters needed to open and configure
/// a database connection: the database file path and the busy timeout.
///
/// # Examples
///
/// ```
/// use folio::database::DatabaseConfig;
/// use std::time::Duration;
///
/// // Create a configuration with default settings
/// let config = DatabaseConfig::new("/tmp/folio.db");
///
/// // Customize the configuration
/// let config = DatabaseConfig::new("/tmp/folio.db")
///     .with_busy_timeout(Duration::from_millis(10000));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// The busy timeout defaults to 5000ms.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::new("/tmp/folio.db");
    /// assert_eq!(config.path.to_str().unwrap(), "/tmp/folio.db");
    /// ```
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
        }
    }

    /// Configuration for the page database inside `root`.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::for_root("/srv/wiki");
    /// assert!(config.path.ends_with("folio.db"));
    /// ```
    #[must_use]
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        Self::new(root.as_ref().join(DATABASE_FILE))
    }

    /// Sets the busy timeout duration.
    ///
    /// The busy timeout determines how long the database connection will
    /// wait when encountering a locked database before returning an error.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}

/// Returns the default data directory for folio.
///
/// The default directory is `~/.folio`, with the home directory located
/// by the `home` crate.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use folio::database::default_data_dir;
///
/// let data_dir = default_data_dir().unwrap();
/// println!("Data directory: {}", data_dir.display());
/// ```
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".folio"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

/// Resolves the data directory from `FOLIO_DATA_DIR` or the default.
///
/// # Errors
///
/// Returns an error if `FOLIO_DATA_DIR` is unset and the home directory
/// cannot be determined.
pub fn resolve_data_dir() -> Result<PathBuf> {
    match std::env::var_os("FOLIO_DATA_DIR") {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}
