//! Error types for the folio library.
//!
//! This module provides the error hierarchy for all operations in the folio
//! library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a folio error.
///
/// # Examples
///
/// ```
/// use folio::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(1_700_000_000)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the folio library.
///
/// The first three variants are the domain failures of the wiki core; the
/// remainder wrap storage and configuration problems, which are propagated
/// unmodified.
#[derive(Debug, Error)]
pub enum Error {
    /// A request path resolved outside the storage root.
    #[error("path escapes storage root: {path:?} ({reason})")]
    PathEscape {
        /// The request path as received.
        path: String,
        /// Why the path was rejected.
        reason: String,
    },

    /// Stored content lacks the structural markers of a page document.
    #[error("malformed page '{key}': {details}")]
    MalformedResource {
        /// The key of the malformed page.
        key: String,
        /// What was missing or wrong.
        details: String,
    },

    /// The caller's modification token no longer matches the stored page.
    #[error(
        "edit conflict on '{key}': expected {}, found {}",
        describe_token(*.expected),
        describe_token(*.actual)
    )]
    Conflict {
        /// The key of the page being updated.
        key: String,
        /// The token supplied by the caller.
        expected: Option<i64>,
        /// The token currently persisted.
        actual: Option<i64>,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The route table is inconsistent.
    #[error("invalid route table: {details}")]
    InvalidRoute {
        /// Details about the inconsistency.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

fn describe_token(token: Option<i64>) -> String {
    token.map_or_else(|| "no page".to_string(), |t| t.to_string())
}

impl Error {
    /// Check if error is an optimistic-concurrency conflict.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::Error;
    ///
    /// let err = Error::Conflict { key: "index".into(), expected: None, actual: Some(5) };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Check if error indicates a rejected request path.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::Error;
    ///
    /// let err = Error::PathEscape { path: "../x".into(), reason: "outside root".into() };
    /// assert!(err.is_path_escape());
    /// ```
    #[must_use]
    pub fn is_path_escape(&self) -> bool {
        matches!(self, Self::PathEscape { .. })
    }

    /// Check if error indicates corrupt stored content.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResource { .. })
    }
}
