//! Path normalization functions.
//!
//! This module provides lexical path normalization:
//! - Expanding tilde (~) to the home directory
//! - Converting relative paths to absolute paths
//! - Resolving `.` and `..` components without touching the filesystem

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use folio::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/pages")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("pages"));
///
/// let expanded = expand_tilde(Path::new("/srv/wiki")).unwrap();
/// assert_eq!(expanded, Path::new("/srv/wiki"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in an absolute path.
///
/// Purely lexical: symlinks are not consulted, so the result describes
/// where the path points by name, not where the filesystem would lead.
///
/// # Errors
///
/// Returns an error if the path contains too many `..` components that would
/// escape the filesystem root.
///
/// # Examples
///
/// ```
/// use folio::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// let resolved = resolve_components(Path::new("/data/wiki/../../etc/passwd")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/etc/passwd"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` on a bare root or prefix reports false
                if !result.pop() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Path contains too many '..' components (escapes root)".to_string(),
                    });
                }
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Normalize a path to absolute form.
///
/// 1. Expands tilde (~) if present
/// 2. Converts relative paths to absolute (using current directory)
/// 3. Resolves `.` and `..` components
///
/// # Errors
///
/// Returns an error if tilde expansion fails, the current directory cannot
/// be determined, or the path contains too many `..` components.
///
/// # Examples
///
/// ```no_run
/// use folio::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("~/wiki/./pages")).unwrap();
/// assert!(normalized.is_absolute());
/// assert!(normalized.ends_with("wiki/pages"));
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        cwd.join(expanded)
    };

    resolve_components(&absolute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_home() {
        let home = home::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")).unwrap(), home);
    }

    #[test]
    fn test_expand_tilde_with_path() {
        let home = home::home_dir().unwrap();
        let expanded = expand_tilde(Path::new("~/.folio/pages")).unwrap();
        assert_eq!(expanded, home.join(".folio/pages"));
    }

    #[test]
    fn test_expand_tilde_user_syntax_not_supported() {
        assert!(expand_tilde(Path::new("~someone/pages")).is_err());
    }

    #[test]
    fn test_resolve_components_simple() {
        let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
        assert_eq!(resolved, PathBuf::from("/a/c"));
    }

    #[test]
    fn test_resolve_components_to_root() {
        let resolved = resolve_components(Path::new("/a/..")).unwrap();
        assert_eq!(resolved, PathBuf::from("/"));
    }

    #[test]
    fn test_resolve_components_too_many_parent() {
        assert!(resolve_components(Path::new("/a/../..")).is_err());
    }

    #[test]
    fn test_resolve_components_relative_input() {
        let resolved = resolve_components(Path::new("docs/./intro")).unwrap();
        assert_eq!(resolved, PathBuf::from("docs/intro"));
    }

    #[test]
    #[cfg(unix)]
    fn test_normalize_absolute() {
        let normalized = normalize(Path::new("/srv/./wiki/../pages")).unwrap();
        assert_eq!(normalized, PathBuf::from("/srv/pages"));
    }

    #[test]
    fn test_normalize_relative() {
        let cwd = env::current_dir().unwrap();
        let normalized = normalize(Path::new("pages")).unwrap();
        assert!(normalized.is_absolute());
        assert!(normalized.starts_with(&cwd));
        assert!(normalized.ends_with("pages"));
    }
}
