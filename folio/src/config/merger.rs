//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.
//! Nested sections merge field by field, so a project file can change the
//! backend without repeating the user's storage root.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, HttpConfig, ServeConfig, StorageConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use folio::config::{Config, ConfigMerger};
///
/// let low = Config { busy_timeout_ms: Some(100), ..Default::default() };
/// let high = Config { busy_timeout_ms: Some(200), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.busy_timeout_ms, Some(200));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Scalar fields are replaced when the source has a value; sections
    /// are merged field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.busy_timeout_ms.is_some() {
            target.busy_timeout_ms = source.busy_timeout_ms;
        }

        if let Some(ref s) = source.storage {
            target.storage = Some(match &target.storage {
                Some(t) => Self::merge_storage(t, s),
                None => s.clone(),
            });
        }

        if let Some(ref s) = source.http {
            target.http = Some(match &target.http {
                Some(t) => Self::merge_http(t, s),
                None => s.clone(),
            });
        }

        if let Some(ref s) = source.serve {
            target.serve = Some(match &target.serve {
                Some(t) => Self::merge_serve(t, s),
                None => s.clone(),
            });
        }
    }

    fn merge_storage(target: &StorageConfig, source: &StorageConfig) -> StorageConfig {
        StorageConfig {
            root: source.root.clone().or_else(|| target.root.clone()),
            backend: source.backend.or(target.backend),
            extension: source.extension.clone().or_else(|| target.extension.clone()),
            default_page: source
                .default_page
                .clone()
                .or_else(|| target.default_page.clone()),
        }
    }

    fn merge_http(target: &HttpConfig, source: &HttpConfig) -> HttpConfig {
        HttpConfig {
            content_type: source
                .content_type
                .clone()
                .or_else(|| target.content_type.clone()),
            charset: source.charset.clone().or_else(|| target.charset.clone()),
        }
    }

    fn merge_serve(target: &ServeConfig, source: &ServeConfig) -> ServeConfig {
        ServeConfig {
            interface: source.interface.clone().or_else(|| target.interface.clone()),
            port: source.port.or(target.port),
        }
    }
}
