//! Core types for path handling.

use std::fmt;
use std::path::{Path, PathBuf};

/// A canonical storage key produced by the [`PathResolver`](super::PathResolver).
///
/// A key has two faces: its `name`, the `/`-separated identifier relative to
/// the storage root (`index`, `docs/intro`), and its `path`, the absolute
/// location of the page file (`<root>/docs/intro.html`). Both are fixed at
/// resolution time.
///
/// # Examples
///
/// ```
/// use folio::path::PathResolver;
///
/// let resolver = PathResolver::new("/data/wiki");
/// let key = resolver.resolve("/docs/intro").unwrap();
/// assert_eq!(key.name(), "docs/intro");
/// assert_eq!(key.path(), std::path::Path::new("/data/wiki/docs/intro.html"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey {
    name: String,
    path: PathBuf,
}

impl StorageKey {
    /// Create a storage key from already-validated parts.
    pub(crate) fn new(name: String, path: PathBuf) -> Self {
        Self { name, path }
    }

    /// The canonical key name, relative to the storage root.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The absolute location of the stored page.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The last segment of the key name.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::path::PathResolver;
    ///
    /// let key = PathResolver::new("/data/wiki").resolve("docs/getting_started").unwrap();
    /// assert_eq!(key.leaf(), "getting_started");
    /// ```
    #[must_use]
    pub fn leaf(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Convert into the underlying file path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
