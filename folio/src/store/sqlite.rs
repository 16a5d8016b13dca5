//! Page storage in a `SQLite` database.

use std::path::Path;

use crate::database::{Database, DatabaseConfig};
use crate::error::Result;
use crate::page::{document, Page};
use crate::path::StorageKey;

use super::{KeyLocks, PageStore};

/// Stores pages as rows of a `SQLite` database.
///
/// Each operation opens its own connection, so threads working on
/// different keys never queue behind one connection. Within a process,
/// updates also serialize per key; across processes the `IMMEDIATE`
/// transaction in [`Database::compare_and_put`] does the serializing.
///
/// # Examples
///
/// ```no_run
/// use folio::database::DatabaseConfig;
/// use folio::path::PathResolver;
/// use folio::store::{PageStore, SqliteStore};
///
/// let store = SqliteStore::open(DatabaseConfig::for_root("/srv/wiki")).unwrap();
/// let key = PathResolver::new("/srv/wiki").resolve("index").unwrap();
/// let page = store.update(&key, None, "Home", "Welcome").unwrap();
/// assert_eq!(page.title(), "Home");
/// ```
#[derive(Debug)]
pub struct SqliteStore {
    config: DatabaseConfig,
    locks: KeyLocks,
}

impl SqliteStore {
    /// Open the store, creating and initializing the database if needed.
    ///
    /// Schema checks happen here once; each later operation opens a plain
    /// connection to the prepared file.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or has an
    /// unsupported schema version.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        Database::open(config.clone())?;
        log::debug!("opened page database at {}", config.path.display());
        Ok(Self {
            config,
            locks: KeyLocks::new(),
        })
    }

    /// Path of the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    fn connect(&self) -> Result<Database> {
        Database::connect(&self.config)
    }
}

impl PageStore for SqliteStore {
    fn load(&self, key: &StorageKey) -> Result<Page> {
        let db = self.connect()?;
        match Database::get_page(db.connection(), key.name())? {
            Some(row) => {
                let parts = document::parse(key.name(), &row.content)?;
                Ok(Page::stored(key, parts.title, parts.body, row.modified_at))
            }
            None => Ok(Page::absent(key)),
        }
    }

    fn update(
        &self,
        key: &StorageKey,
        expected: Option<i64>,
        title: &str,
        body: &str,
    ) -> Result<Page> {
        self.locks.with_lock(key.name(), || {
            let mut db = self.connect()?;
            let token = db.compare_and_put(key, expected, &document::render(title, body))?;
            log::debug!("stored page '{}' at token {token}", key.name());
            self.load(key)
        })
    }

    fn list(&self) -> Result<Vec<String>> {
        let db = self.connect()?;
        Database::list_keys(db.connection())
    }
}
