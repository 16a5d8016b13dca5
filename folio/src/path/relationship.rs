//! Path relationship checking.
//!
//! Containment is decided component by component (`Path::starts_with`),
//! never by string prefix, so `/srv/wiki-evil` is unrelated to `/srv/wiki`.

use std::path::{Path, PathBuf};

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use folio::path::PathRelationship;
/// use std::path::Path;
///
/// let root = Path::new("/srv/wiki");
/// let page = Path::new("/srv/wiki/index.html");
///
/// assert_eq!(PathRelationship::between(root, page), PathRelationship::Ancestor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path is an ancestor or descendant of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Both paths are compared with trailing separators removed. Callers are
    /// expected to pass lexically normalized paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let rel = PathRelationship::between(Path::new("/a/b"), Path::new("/a"));
    /// assert_eq!(rel, PathRelationship::Descendant);
    ///
    /// let rel = PathRelationship::between(Path::new("/a"), Path::new("/a/"));
    /// assert_eq!(rel, PathRelationship::Same);
    ///
    /// let rel = PathRelationship::between(Path::new("/root"), Path::new("/root-evil"));
    /// assert_eq!(rel, PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &Path, path2: &Path) -> Self {
        let p1 = normalize_for_comparison(path1);
        let p2 = normalize_for_comparison(path2);

        if p1 == p2 {
            return Self::Same;
        }

        if p2.starts_with(&p1) {
            return Self::Ancestor;
        }

        if p1.starts_with(&p2) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if `path` lies strictly beneath `directory`.
    ///
    /// The directory itself does not count as being inside itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let root = Path::new("/srv/wiki");
    /// assert!(PathRelationship::is_strictly_within(Path::new("/srv/wiki/a"), root));
    /// assert!(!PathRelationship::is_strictly_within(root, root));
    /// assert!(!PathRelationship::is_strictly_within(Path::new("/srv/wiki-evil/a"), root));
    /// ```
    #[must_use]
    pub fn is_strictly_within(path: &Path, directory: &Path) -> bool {
        Self::between(path, directory) == Self::Descendant
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &Path, path2: &Path) -> String {
        match self {
            Self::Ancestor => {
                format!("{} is an ancestor of {}", path1.display(), path2.display())
            }
            Self::Descendant => {
                format!("{} is a descendant of {}", path1.display(), path2.display())
            }
            Self::Same => {
                format!(
                    "{} and {} are the same path",
                    path1.display(),
                    path2.display()
                )
            }
            Self::Unrelated => {
                format!(
                    "{} is not inside {}",
                    path1.display(),
                    path2.display()
                )
            }
        }
    }
}

/// Remove a trailing separator (but not from a bare root).
fn normalize_for_comparison(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();

    if let Some(s) = p.to_str() {
        if s.len() > 1 && (s.ends_with('/') || s.ends_with('\\')) {
            p = PathBuf::from(&s[..s.len() - 1]);
        }
    }

    p
}
