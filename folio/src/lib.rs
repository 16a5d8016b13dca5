#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # folio
//!
//! A library for a small wiki that stores one page per key beneath a
//! storage root.
//!
//! Request paths are resolved lexically to storage keys that can never
//! leave the root. Pages are saved with optimistic concurrency: every
//! update carries the modification token the client last saw, and a
//! stale token is rejected instead of overwriting someone else's edit.
//!
//! ## Core Types
//!
//! - [`PathResolver`] and [`StorageKey`]: request path to key resolution
//! - [`Page`]: an immutable snapshot of a stored page
//! - [`PageStore`]: files or `SQLite` storage with compare-and-set updates
//! - [`Wiki`]: resolver, store and routes behind one handle
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use folio::config::WikiSettings;
//! use folio::Wiki;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let wiki = Wiki::open(WikiSettings::new(dir.path())).unwrap();
//!
//! let page = wiki.update("docs/intro", None, "Intro", "<p>Hi</p>").unwrap();
//!
//! // A second writer still holding the "no page yet" token loses.
//! let err = wiki.update("docs/intro", None, "Intro", "<p>Mine</p>").unwrap_err();
//! assert!(err.is_conflict());
//!
//! // Presenting the current token succeeds.
//! wiki.update("docs/intro", page.modified_at(), "Intro", "<p>Hi again</p>").unwrap();
//! ```

pub mod config;
pub mod database;
pub mod dispatch;
pub mod error;
pub mod init;
pub mod logging;
pub mod page;
pub mod path;
pub mod store;
pub mod wiki;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, WikiSettings};
pub use database::{Database, DatabaseConfig};
pub use dispatch::{Outcome, Request};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use page::Page;
pub use path::{PathRelationship, PathResolver, StorageKey};
pub use store::{FileStore, PageStore, SqliteStore};
pub use wiki::Wiki;
