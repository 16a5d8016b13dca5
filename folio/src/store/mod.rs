//! Page storage with optimistic concurrency control.
//!
//! A [`PageStore`] exclusively owns the mapping from storage keys to stored
//! documents. Reads produce immutable [`Page`] snapshots; writes are
//! conditional on the caller's modification token.
//!
//! # Update protocol
//!
//! A caller loads a page, remembers its [`Page::modified_at`] token, and
//! later submits an update carrying that token. The store compares the
//! token against the currently persisted one for exact equality (absent
//! equals absent, and `Some(0)` counts as absent). On mismatch nothing is
//! written and [`Error::Conflict`](crate::Error::Conflict) is returned. No
//! lock is held across the caller's editing session; the comparison and
//! the write happen together under a per-key lock.
//!
//! Every successful write produces a token strictly different from the
//! previous one, even for two writes within the same second.
//!
//! # Backends
//!
//! - [`FileStore`]: one document file per key beneath the storage root.
//! - [`SqliteStore`]: one row per key in a `SQLite` database.

mod file;
mod locks;
mod sqlite;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub use file::FileStore;
pub use locks::KeyLocks;
pub use sqlite::SqliteStore;

use crate::error::{Error, Result};
use crate::page::Page;
use crate::path::StorageKey;

/// Storage for wiki pages.
///
/// Implementations are shared between request-handling threads.
pub trait PageStore: Send + Sync + std::fmt::Debug {
    /// Take a snapshot of the page stored under `key`.
    ///
    /// A missing page is not an error: it yields [`Page::absent`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResource`] if the stored content lacks a
    /// title or body, or a storage error if reading fails.
    fn load(&self, key: &StorageKey) -> Result<Page>;

    /// Replace the page under `key` if its token still equals `expected`.
    ///
    /// Returns the snapshot of the page as written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] if the persisted token differs from
    /// `expected`, or a storage error if writing fails.
    fn update(
        &self,
        key: &StorageKey,
        expected: Option<i64>,
        title: &str,
        body: &str,
    ) -> Result<Page>;

    /// Names of all stored pages, sorted.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be enumerated.
    fn list(&self) -> Result<Vec<String>>;
}

/// Treat a zero token as "no page", matching callers that send `0` for a
/// page they believe does not exist yet.
///
/// # Examples
///
/// ```
/// use folio::store::normalize_token;
///
/// assert_eq!(normalize_token(Some(0)), None);
/// assert_eq!(normalize_token(Some(17)), Some(17));
/// assert_eq!(normalize_token(None), None);
/// ```
#[must_use]
pub fn normalize_token(token: Option<i64>) -> Option<i64> {
    token.filter(|&t| t != 0)
}

/// Fail with a conflict unless `expected` equals `actual` exactly.
pub(crate) fn check_token(key: &StorageKey, expected: Option<i64>, actual: Option<i64>) -> Result<()> {
    let expected = normalize_token(expected);
    if expected == actual {
        return Ok(());
    }
    log::debug!("conflict on {key}: expected {expected:?}, found {actual:?}");
    Err(Error::Conflict {
        key: key.name().to_string(),
        expected,
        actual,
    })
}

/// The token for a write replacing a page whose token was `previous`.
pub(crate) fn next_token(previous: Option<i64>) -> Result<i64> {
    let now = system_time_to_secs(SystemTime::now())?;
    Ok(previous.map_or(now, |p| now.max(p.saturating_add(1))))
}

#[allow(clippy::cast_possible_wrap)]
pub(crate) fn system_time_to_secs(time: SystemTime) -> Result<i64> {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|e| Error::Validation {
            field: "modified_at".into(),
            message: format!("Timestamp before the Unix epoch: {e}"),
        })
}

#[allow(clippy::cast_sign_loss)]
pub(crate) fn secs_to_system_time(secs: i64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs.max(0) as u64)
}
