//! Configuration system for folio.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of every field
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`FOLIO_*`)
//! 3. Private project config (`folio.local.yaml`)
//! 4. Project config (`folio.yaml`)
//! 5. User config (`~/.folio/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use folio::config::ConfigBuilder;
//!
//! let settings = ConfigBuilder::new().build_settings().unwrap();
//! println!("Pages live in {}", settings.root.display());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use folio::config::{Backend, Config, ConfigBuilder, StorageConfig};
//!
//! let custom = Config {
//!     storage: Some(StorageConfig {
//!         root: Some("/srv/wiki".to_string()),
//!         backend: Some(Backend::Sqlite),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.backend(), Backend::Sqlite);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod settings;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Backend, Config, HttpConfig, ServeConfig, StorageConfig};
pub use settings::WikiSettings;
pub use validator::ConfigValidator;
