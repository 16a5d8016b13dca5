//! Resolved runtime settings.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::schema::{
    Backend, Config, DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_CHARSET, DEFAULT_CONTENT_TYPE,
};
use crate::error::Result;
use crate::path::normalize::normalize;
use crate::path::{DEFAULT_EXTENSION, DEFAULT_KEY};

/// Directory under the data directory used as storage root by default.
pub const DEFAULT_PAGES_DIR: &str = "pages";

/// Everything a [`Wiki`](crate::Wiki) needs, with defaults applied.
///
/// # Examples
///
/// ```
/// use folio::config::{Backend, WikiSettings};
///
/// let settings = WikiSettings::new("/srv/wiki");
/// assert_eq!(settings.backend, Backend::Files);
/// assert_eq!(settings.extension, ".html");
/// assert_eq!(settings.default_page, "index");
/// assert_eq!(settings.content_type_header(), "text/html; charset=utf-8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiSettings {
    /// Storage root directory.
    pub root: PathBuf,
    /// Storage backend.
    pub backend: Backend,
    /// Suffix of page files.
    pub extension: String,
    /// Key served for the empty path.
    pub default_page: String,
    /// Media type of rendered pages.
    pub content_type: String,
    /// Charset of rendered pages.
    pub charset: String,
    /// `SQLite` busy timeout.
    pub busy_timeout: Duration,
}

impl WikiSettings {
    /// Default settings for a wiki stored under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            backend: Backend::default(),
            extension: DEFAULT_EXTENSION.to_string(),
            default_page: DEFAULT_KEY.to_string(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        }
    }

    /// Apply a merged configuration on top of the defaults.
    ///
    /// Without a configured root the wiki lives in `<data_dir>/pages`.
    /// The root is made absolute with `~` expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be normalized.
    pub fn from_config(config: &Config, data_dir: &Path) -> Result<Self> {
        let storage = config.storage.clone().unwrap_or_default();
        let http = config.http.clone().unwrap_or_default();

        let root = match storage.root {
            Some(ref root) => normalize(Path::new(root))?,
            None => normalize(&data_dir.join(DEFAULT_PAGES_DIR))?,
        };

        let mut settings = Self::new(root);
        settings.backend = storage.backend.unwrap_or_default();
        if let Some(extension) = storage.extension {
            settings.extension = extension;
        }
        if let Some(page) = storage.default_page {
            settings.default_page = page;
        }
        if let Some(content_type) = http.content_type {
            settings.content_type = content_type;
        }
        if let Some(charset) = http.charset {
            settings.charset = charset;
        }
        if let Some(ms) = config.busy_timeout_ms {
            settings.busy_timeout = Duration::from_millis(ms);
        }

        Ok(settings)
    }

    /// Select the storage backend.
    #[must_use]
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// The `Content-Type` header value for rendered pages.
    #[must_use]
    pub fn content_type_header(&self) -> String {
        format!("{}; charset={}", self.content_type, self.charset)
    }
}
