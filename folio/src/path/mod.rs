//! Mapping request paths onto storage keys.
//!
//! Request paths are attacker-controlled, so key derivation is the trust
//! boundary of the wiki: a path either resolves to a key strictly beneath
//! the storage root or is rejected with [`Error::PathEscape`](crate::Error).
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization is lexical. `.` and `..` segments are collapsed by name,
//! without consulting the filesystem, so resolution is a pure function of
//! its inputs.
//!
//! ## Containment
//!
//! Containment is checked segment by segment via [`PathRelationship`]. A
//! textual prefix test would accept `/data/wiki-evil` for the root
//! `/data/wiki`; a component test does not.
//!
//! # Examples
//!
//! ```
//! use folio::path::PathResolver;
//!
//! let resolver = PathResolver::new("/data/wiki");
//!
//! let key = resolver.resolve("/docs/intro").unwrap();
//! assert_eq!(key.name(), "docs/intro");
//!
//! assert!(resolver.resolve("/../../etc/passwd").is_err());
//! ```

pub mod normalize;
pub mod relationship;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use relationship::PathRelationship;
pub use resolver::{PathResolver, DEFAULT_EXTENSION, DEFAULT_KEY};
pub use types::StorageKey;
