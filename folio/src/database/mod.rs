//! `SQLite` storage for pages.
//!
//! This module provides connection management, schema versioning and the
//! conditional write used by [`SqliteStore`](crate::store::SqliteStore).
//!
//! # Examples
//!
//! ```no_run
//! use folio::database::{Database, DatabaseConfig};
//!
//! let db = Database::open(DatabaseConfig::for_root("/srv/wiki")).unwrap();
//! for key in Database::list_keys(db.connection()).unwrap() {
//!     println!("{key}");
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
#[cfg(test)]
mod test_util;
mod transaction;

pub use config::{default_data_dir, resolve_data_dir, DatabaseConfig, DATABASE_FILE};
pub use connection::Database;
pub use operations::StoredPage;
pub use schema::CURRENT_SCHEMA_VERSION;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
