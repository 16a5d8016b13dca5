//! Page snapshots.
//!
//! A [`Page`] is an immutable view of one stored page, produced by a single
//! read of the backing store. Title, body and modification time all come
//! from that one read; to observe later changes, load the page again.

pub mod document;

use serde::Serialize;

use crate::path::StorageKey;

/// An immutable snapshot of a wiki page.
///
/// # Examples
///
/// ```
/// use folio::path::PathResolver;
/// use folio::Page;
///
/// let key = PathResolver::new("/data/wiki").resolve("getting_started").unwrap();
/// let page = Page::absent(&key);
/// assert!(!page.exists());
/// assert_eq!(page.title(), "Getting started");
/// assert_eq!(page.body(), "");
/// assert_eq!(page.modified_at(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    key: String,
    exists: bool,
    title: String,
    body: String,
    modified_at: Option<i64>,
}

impl Page {
    /// Snapshot of a page with no stored content.
    ///
    /// The title is derived from the key's last segment.
    #[must_use]
    pub fn absent(key: &StorageKey) -> Self {
        Self {
            key: key.name().to_string(),
            exists: false,
            title: humanize(key.leaf()),
            body: String::new(),
            modified_at: None,
        }
    }

    /// Snapshot of a stored page.
    #[must_use]
    pub fn stored(key: &StorageKey, title: String, body: String, modified_at: i64) -> Self {
        Self {
            key: key.name().to_string(),
            exists: true,
            title,
            body,
            modified_at: Some(modified_at),
        }
    }

    /// The canonical key name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the page had stored content when the snapshot was taken.
    #[must_use]
    pub const fn exists(&self) -> bool {
        self.exists
    }

    /// The page title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The page body markup.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Seconds since the Unix epoch of the last write, if stored.
    ///
    /// This doubles as the optimistic-concurrency token for updates.
    #[must_use]
    pub const fn modified_at(&self) -> Option<i64> {
        self.modified_at
    }
}

/// Turn a key segment into a display title.
///
/// Underscores and hyphens become spaces and the first character is
/// uppercased; the rest is left as written.
///
/// # Examples
///
/// ```
/// use folio::page::humanize;
///
/// assert_eq!(humanize("front_page"), "Front page");
/// assert_eq!(humanize("release-notes-2024"), "Release notes 2024");
/// assert_eq!(humanize("FAQ"), "FAQ");
/// ```
#[must_use]
pub fn humanize(segment: &str) -> String {
    let spaced = segment.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathResolver;

    fn key(path: &str) -> StorageKey {
        PathResolver::new("/data/wiki").resolve(path).unwrap()
    }

    #[test]
    fn test_absent_page() {
        let page = Page::absent(&key("docs/release-notes"));
        assert_eq!(page.key(), "docs/release-notes");
        assert!(!page.exists());
        assert_eq!(page.title(), "Release notes");
        assert_eq!(page.body(), "");
        assert_eq!(page.modified_at(), None);
    }

    #[test]
    fn test_absent_index_title() {
        assert_eq!(Page::absent(&key("")).title(), "Index");
    }

    #[test]
    fn test_stored_page() {
        let page = Page::stored(&key("index"), "Home".into(), "<p>hi</p>".into(), 1_700_000_000);
        assert!(page.exists());
        assert_eq!(page.title(), "Home");
        assert_eq!(page.body(), "<p>hi</p>");
        assert_eq!(page.modified_at(), Some(1_700_000_000));
    }

    #[test]
    fn test_humanize_edge_cases() {
        assert_eq!(humanize(""), "");
        assert_eq!(humanize("_"), " ");
        assert_eq!(humanize("élan_vital"), "Élan vital");
    }

    #[test]
    fn test_page_serializes() {
        let page = Page::stored(&key("index"), "Home".into(), "B".into(), 42);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["key"], "index");
        assert_eq!(json["exists"], true);
        assert_eq!(json["modified_at"], 42);
    }
}
