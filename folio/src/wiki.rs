//! The wiki facade: a resolver, a store and a route table over one root.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::config::{Backend, WikiSettings};
use crate::database::DatabaseConfig;
use crate::dispatch::{self, Outcome, Request, RouteTable};
use crate::error::Result;
use crate::page::Page;
use crate::path::{PathResolver, StorageKey};
use crate::store::{FileStore, PageStore, SqliteStore};

/// An open wiki.
///
/// `Wiki` is `Send + Sync`; share it between request threads behind an
/// `Arc`.
///
/// # Examples
///
/// ```no_run
/// use folio::config::WikiSettings;
/// use folio::Wiki;
///
/// let wiki = Wiki::open(WikiSettings::new("/srv/wiki")).unwrap();
/// let page = wiki.load("/docs/intro").unwrap();
/// if !page.exists() {
///     wiki.update("/docs/intro", None, "Intro", "<p>Start here.</p>").unwrap();
/// }
/// ```
pub struct Wiki {
    settings: WikiSettings,
    resolver: PathResolver,
    store: Box<dyn PageStore>,
    routes: RouteTable,
}

impl Wiki {
    /// Open the wiki described by `settings` with the standard routes.
    ///
    /// The storage root is created if missing and canonicalized, so keys
    /// never pass through a symlinked root.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be created or canonicalized,
    /// or if the `SQLite` backend cannot open its database.
    pub fn open(settings: WikiSettings) -> Result<Self> {
        fs::create_dir_all(&settings.root)?;
        let root = fs::canonicalize(&settings.root)?;

        let resolver = PathResolver::new(&root)
            .with_extension(settings.extension.clone())
            .with_default_key(settings.default_page.clone());

        let store: Box<dyn PageStore> = match settings.backend {
            Backend::Files => Box::new(FileStore::new(&root, settings.extension.clone())),
            Backend::Sqlite => Box::new(SqliteStore::open(
                DatabaseConfig::for_root(&root).with_busy_timeout(settings.busy_timeout),
            )?),
        };

        log::info!(
            "opened wiki at {} ({} backend)",
            root.display(),
            settings.backend
        );

        Ok(Self {
            settings: WikiSettings { root, ..settings },
            resolver,
            store,
            routes: RouteTable::standard()?,
        })
    }

    /// Replace the route table.
    #[must_use]
    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    /// Settings in effect; the root is canonical.
    #[must_use]
    pub const fn settings(&self) -> &WikiSettings {
        &self.settings
    }

    /// The path resolver.
    #[must_use]
    pub const fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// The page store.
    #[must_use]
    pub fn store(&self) -> &dyn PageStore {
        self.store.as_ref()
    }

    /// The route table.
    #[must_use]
    pub const fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Where `key` is persisted: its page file, or the database holding
    /// every page for the `SQLite` backend.
    #[must_use]
    pub fn storage_location(&self, key: &StorageKey) -> PathBuf {
        match self.settings.backend {
            Backend::Files => key.path().to_path_buf(),
            Backend::Sqlite => DatabaseConfig::for_root(&self.settings.root).path,
        }
    }

    /// Resolve a request path to a storage key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathEscape`](crate::Error::PathEscape) if the path
    /// leaves the root.
    pub fn resolve(&self, request_path: &str) -> Result<StorageKey> {
        self.resolver.resolve(request_path)
    }

    /// Resolve and load a page.
    ///
    /// # Errors
    ///
    /// Returns a path escape, a malformed page, or a storage error.
    pub fn load(&self, request_path: &str) -> Result<Page> {
        let key = self.resolve(request_path)?;
        self.store.load(&key)
    }

    /// Resolve and update a page if `expected` still matches its token.
    ///
    /// # Errors
    ///
    /// Returns a path escape, [`Error::Conflict`](crate::Error::Conflict)
    /// on a stale token, or a storage error.
    pub fn update(
        &self,
        request_path: &str,
        expected: Option<i64>,
        title: &str,
        body: &str,
    ) -> Result<Page> {
        let key = self.resolve(request_path)?;
        self.store.update(&key, expected, title, body)
    }

    /// Keys of all stored pages, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be enumerated.
    pub fn list(&self) -> Result<Vec<String>> {
        self.store.list()
    }

    /// Dispatch a request through the wiki's route table.
    ///
    /// # Errors
    ///
    /// Propagates storage errors and malformed pages; request-level
    /// failures come back as [`Outcome`] values.
    pub fn handle(&self, request: &Request) -> Result<Outcome> {
        dispatch::dispatch(self, &self.routes, request)
    }
}

impl fmt::Debug for Wiki {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wiki")
            .field("root", &self.settings.root)
            .field("backend", &self.settings.backend)
            .field("store", &self.store)
            .field("routes", &self.routes)
            .finish()
    }
}
