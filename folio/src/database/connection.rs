//! Database connection management.
//!
//! This module provides the main database connection type with proper
//! initialization and PRAGMA settings for `SQLite`.

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;

use super::config::DatabaseConfig;

/// A configured database connection.
///
/// This type manages a `SQLite` connection with appropriate PRAGMA settings
/// for concurrent access from several connections and processes.
///
/// # Examples
///
/// ```no_run
/// use folio::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/folio.db");
/// let db = Database::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
}

impl Database {
    /// Opens the database, creating and initializing it if needed.
    ///
    /// This function will:
    /// - Create the parent directory and the database file if missing
    /// - Configure busy timeout
    /// - Set WAL mode for concurrent access
    /// - Initialize or verify the database schema
    ///
    /// Run it once per database; use [`Database::connect`] for the
    /// connections that serve individual operations afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database file cannot be opened
    /// - The parent directory cannot be created
    /// - PRAGMA settings cannot be applied
    /// - Schema initialization or verification fails
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open_with_flags(
            &config.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        // Busy timeout first: switching to WAL takes a lock other openers may hold
        conn.busy_timeout(config.busy_timeout)?;
        // PRAGMA journal_mode returns a row; the mode is stored in the file
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        super::migrations::check_schema_compatibility(&conn)?;

        Ok(Self { conn })
    }

    /// Connects to a database that [`Database::open`] already set up.
    ///
    /// Only per-connection settings are applied: the busy timeout and
    /// `synchronous`. The file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be opened.
    pub fn connect(config: &DatabaseConfig) -> Result<Self> {
        let conn = Connection::open_with_flags(
            &config.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(config.busy_timeout)?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;

        Ok(Self { conn })
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        let config = DatabaseConfig::new(&path);

        let db = Database::open(config).unwrap();
        assert!(path.exists());

        let journal_mode: String = db
            .connection()
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(journal_mode.to_lowercase(), "wal");
    }

    #[test]
    fn test_open_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("subdir").join("test.db");
        let config = DatabaseConfig::new(&path);

        assert!(!path.parent().unwrap().exists());

        let _db = Database::open(config).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_connect_requires_existing_database() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");

        assert!(Database::connect(&DatabaseConfig::new(&path)).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_connect_after_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        Database::open(DatabaseConfig::new(&path)).unwrap();

        let db = Database::connect(&DatabaseConfig::new(&path)).unwrap();
        let journal_mode: String = db
            .connection()
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(journal_mode.to_lowercase(), "wal");

        let version = super::super::migrations::get_schema_version(db.connection()).unwrap();
        assert_eq!(version, super::super::schema::CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_database_reopen_keeps_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");

        Database::open(DatabaseConfig::new(&path)).unwrap();
        let db = Database::open(DatabaseConfig::new(&path)).unwrap();
        let version = super::super::migrations::get_schema_version(db.connection()).unwrap();
        assert_eq!(version, super::super::schema::CURRENT_SCHEMA_VERSION);
    }
}
