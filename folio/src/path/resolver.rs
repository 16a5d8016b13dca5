//! Request path resolution.
//!
//! This module provides the `PathResolver` type, which turns an
//! attacker-controlled request path into a [`StorageKey`] guaranteed to lie
//! beneath the storage root.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize::resolve_components;
use crate::path::relationship::PathRelationship;
use crate::path::types::StorageKey;

/// Extension appended to every resolved key when none is configured.
pub const DEFAULT_EXTENSION: &str = ".html";

/// Key used for an empty request path when none is configured.
pub const DEFAULT_KEY: &str = "index";

/// Resolves request paths to storage keys under a fixed root.
///
/// Resolution is a pure function of the root, the configured extension and
/// default key, and the request path: nothing on disk is consulted, so the
/// same input always yields the same key.
///
/// # Examples
///
/// ```
/// use folio::path::PathResolver;
///
/// let resolver = PathResolver::new("/data/wiki");
///
/// let key = resolver.resolve("").unwrap();
/// assert_eq!(key.name(), "index");
///
/// let err = resolver.resolve("/../../etc/passwd").unwrap_err();
/// assert!(err.is_path_escape());
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver {
    /// Absolute, normalized storage root.
    root: PathBuf,
    /// Suffix appended to the normalized key.
    extension: String,
    /// Key substituted for an empty request path.
    default_key: String,
}

impl PathResolver {
    /// Create a resolver for the given storage root.
    ///
    /// The root is expected to be absolute and already normalized; the
    /// [`Wiki`](crate::Wiki) facade canonicalizes it before constructing the
    /// resolver.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            default_key: DEFAULT_KEY.to_string(),
        }
    }

    /// Configure the suffix appended to resolved keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::path::PathResolver;
    ///
    /// let resolver = PathResolver::new("/data/wiki").with_extension(".page");
    /// let key = resolver.resolve("intro").unwrap();
    /// assert!(key.path().ends_with("intro.page"));
    /// ```
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Configure the key used for an empty request path.
    #[must_use]
    pub fn with_default_key(mut self, key: impl Into<String>) -> Self {
        self.default_key = key.into();
        self
    }

    /// The storage root keys are resolved under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The configured key suffix.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Resolve a request path to a storage key.
    ///
    /// Leading and trailing separators are stripped; an empty remainder
    /// becomes the default key. The remainder is joined to the root, `.` and
    /// `..` are collapsed, and the result must lie strictly beneath the root
    /// (compared segment by segment). Finally the extension is appended.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathEscape`] if the path contains a NUL byte,
    /// climbs above the filesystem root, normalizes to a location that is
    /// not strictly inside the storage root, or has a directory segment
    /// ending in the extension (`x.html/y` would turn page `x` into a
    /// directory).
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::path::PathResolver;
    ///
    /// let resolver = PathResolver::new("/data/wiki");
    ///
    /// let key = resolver.resolve("/docs/./setup/../intro/").unwrap();
    /// assert_eq!(key.name(), "docs/intro");
    ///
    /// assert!(resolver.resolve("docs/../../wiki-evil/x").is_err());
    /// ```
    pub fn resolve(&self, request_path: &str) -> Result<StorageKey> {
        let trimmed = request_path.trim_matches(|c| c == '/' || c == '\\');

        if trimmed.contains('\0') {
            return Err(escape(request_path, "path contains a NUL byte"));
        }

        let candidate = if trimmed.is_empty() {
            self.default_key.as_str()
        } else {
            trimmed
        };

        let joined = self.root.join(candidate);
        let normalized = resolve_components(&joined)
            .map_err(|_| escape(request_path, "path climbs above the filesystem root"))?;

        if !PathRelationship::is_strictly_within(&normalized, &self.root) {
            log::debug!(
                "rejected request path {request_path:?}: {}",
                PathRelationship::between(&normalized, &self.root)
                    .description(&normalized, &self.root)
            );
            return Err(escape(request_path, "path resolves outside the storage root"));
        }

        let relative = normalized
            .strip_prefix(&self.root)
            .map_err(|_| escape(request_path, "path resolves outside the storage root"))?;
        let segments: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();

        // A directory named like a page file would hide that page.
        if !self.extension.is_empty() {
            if let Some((_, parents)) = segments.split_last() {
                if parents.iter().any(|s| s.ends_with(self.extension.as_str())) {
                    return Err(escape(
                        request_path,
                        "a directory segment ends with the page extension",
                    ));
                }
            }
        }

        let name = segments.join("/");

        let mut file = normalized.into_os_string();
        file.push(&self.extension);

        Ok(StorageKey::new(name, PathBuf::from(file)))
    }
}

fn escape(path: &str, reason: &str) -> Error {
    Error::PathEscape {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}
