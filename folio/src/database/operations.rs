//! Read operations on the page table.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;

use super::connection::Database;
use super::schema::{LIST_KEYS, SELECT_PAGE};

/// A page row as stored: the full document and its token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPage {
    /// The stored document.
    pub content: String,
    /// Unix seconds of the last write.
    pub modified_at: i64,
}

impl Database {
    /// Reads one page row in a single query.
    ///
    /// Returns `Ok(None)` if no row exists for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use folio::database::{Database, DatabaseConfig};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/folio.db")).unwrap();
    /// if let Some(row) = Database::get_page(db.connection(), "index").unwrap() {
    ///     println!("{} bytes, modified at {}", row.content.len(), row.modified_at);
    /// }
    /// ```
    pub fn get_page(conn: &Connection, key: &str) -> Result<Option<StoredPage>> {
        let row = conn
            .query_row(SELECT_PAGE, params![key], |row| {
                Ok(StoredPage {
                    content: row.get(0)?,
                    modified_at: row.get(1)?,
                })
            })
            .optional()?;
        Ok(row)
    }

    /// Lists all page keys in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_keys(conn: &Connection) -> Result<Vec<String>> {
        let mut stmt = conn.prepare(LIST_KEYS)?;

        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(keys)
    }
}
