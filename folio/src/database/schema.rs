//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions and statements used by
//! the page database.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the pages table.
///
/// One row per page. `content` holds the full stored document and
/// `modified_at` its token in Unix seconds.
pub const CREATE_PAGES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS pages (
        key TEXT PRIMARY KEY NOT NULL,
        content TEXT NOT NULL,
        modified_at INTEGER NOT NULL
    )";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

pub const SELECT_PAGE: &str = "SELECT content, modified_at FROM pages WHERE key = ?";

pub const SELECT_TOKEN: &str = "SELECT modified_at FROM pages WHERE key = ?";

pub const UPSERT_PAGE: &str = r"
    INSERT INTO pages (key, content, modified_at) VALUES (?1, ?2, ?3)
    ON CONFLICT(key) DO UPDATE SET content = excluded.content, modified_at = excluded.modified_at
";

pub const LIST_KEYS: &str = "SELECT key FROM pages ORDER BY key";
