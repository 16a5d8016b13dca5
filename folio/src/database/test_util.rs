//! Shared test utilities for database unit tests.

use rusqlite::params;
use tempfile::{tempdir, TempDir};

use crate::database::{Database, DatabaseConfig};

/// Creates a database in a fresh temporary directory.
///
/// The directory is returned so it lives as long as the test needs it.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> (TempDir, Database) {
    let dir = tempdir().unwrap();
    let db = Database::open(DatabaseConfig::for_root(dir.path())).unwrap();
    (dir, db)
}

/// Inserts a raw page row, bypassing token checks.
///
/// # Panics
///
/// Panics if the insert fails.
pub fn insert_test_page(db: &Database, key: &str, content: &str, modified_at: i64) {
    db.connection()
        .execute(
            "INSERT OR REPLACE INTO pages (key, content, modified_at) VALUES (?, ?, ?)",
            params![key, content, modified_at],
        )
        .unwrap();
}
