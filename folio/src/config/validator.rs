//! Configuration validation.
//!
//! This module checks every configured value before it reaches a
//! resolver, store or server, so mistakes surface as configuration errors
//! rather than odd request-time behavior.

use crate::config::schema::{Config, HttpConfig, ServeConfig, StorageConfig};
use crate::error::{Error, Result};

const MAX_EXTENSION_LEN: usize = 16;

/// Validates merged or single-file configuration.
///
/// # Examples
///
/// ```
/// use folio::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref storage) = config.storage {
            Self::validate_storage(storage)?;
        }

        if let Some(ref http) = config.http {
            Self::validate_http(http)?;
        }

        if let Some(ref serve) = config.serve {
            Self::validate_serve(serve)?;
        }

        if let Some(timeout) = config.busy_timeout_ms {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "busy_timeout_ms".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }

    fn validate_storage(storage: &StorageConfig) -> Result<()> {
        if let Some(ref root) = storage.root {
            Self::validate_text("storage.root", root)?;
        }

        if let Some(ref extension) = storage.extension {
            Self::validate_extension(extension)?;
        }

        if let Some(ref page) = storage.default_page {
            Self::validate_default_page(page)?;
        }

        Ok(())
    }

    /// Extensions look like `.html`: a dot, then no separators.
    fn validate_extension(extension: &str) -> Result<()> {
        let field = "storage.extension";
        Self::validate_text(field, extension)?;

        if !extension.starts_with('.') || extension.len() < 2 {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{extension}' must start with '.' followed by a suffix"),
            });
        }

        if extension.contains(['/', '\\']) {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain path separators".into(),
            });
        }

        if extension.len() > MAX_EXTENSION_LEN {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Cannot exceed {MAX_EXTENSION_LEN} characters"),
            });
        }

        Ok(())
    }

    /// The default page must itself be a clean relative key.
    fn validate_default_page(page: &str) -> Result<()> {
        let field = "storage.default_page";
        Self::validate_text(field, page)?;

        let clean = page
            .split(['/', '\\'])
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..");
        if !clean {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{page}' must be a relative page key without '.' or '..'"),
            });
        }

        Ok(())
    }

    fn validate_http(http: &HttpConfig) -> Result<()> {
        if let Some(ref content_type) = http.content_type {
            let field = "http.content_type";
            Self::validate_text(field, content_type)?;
            Self::validate_header_token(field, content_type)?;
            if !content_type.contains('/') {
                return Err(Error::Validation {
                    field: field.into(),
                    message: format!("'{content_type}' is not a media type"),
                });
            }
        }

        if let Some(ref charset) = http.charset {
            Self::validate_text("http.charset", charset)?;
            Self::validate_header_token("http.charset", charset)?;
        }

        Ok(())
    }

    fn validate_serve(serve: &ServeConfig) -> Result<()> {
        if let Some(ref interface) = serve.interface {
            Self::validate_text("serve.interface", interface)?;
            if interface.chars().any(char::is_whitespace) {
                return Err(Error::Validation {
                    field: "serve.interface".into(),
                    message: "Cannot contain whitespace".into(),
                });
            }
        }

        if serve.port == Some(0) {
            return Err(Error::Validation {
                field: "serve.port".into(),
                message: "Port must be between 1 and 65535".into(),
            });
        }

        Ok(())
    }

    /// Non-empty after trimming, and free of NUL bytes.
    fn validate_text(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }

    fn validate_header_token(field: &str, value: &str) -> Result<()> {
        if value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == ';')
        {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{}' is not a valid header token", value.escape_debug()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(storage: StorageConfig) -> Config {
        Config {
            storage: Some(storage),
            ..Default::default()
        }
    }

    fn assert_invalid(config: &Config, expected_field: &str) {
        match ConfigValidator::validate(config) {
            Err(Error::Validation { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected validation error on {expected_field}, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_config() {
        ConfigValidator::validate(&Config::default()).unwrap();
    }

    #[test]
    fn test_validate_full_config() {
        let config: Config = serde_yaml::from_str(
            r"
storage:
  root: ~/.folio/pages
  backend: files
  extension: .html
  default_page: docs/index
http:
  content_type: text/html
  charset: utf-8
serve:
  interface: 127.0.0.1
  port: 8080
busy_timeout_ms: 5000
",
        )
        .unwrap();
        ConfigValidator::validate(&config).unwrap();
    }

    #[test]
    fn test_validate_root_empty() {
        let config = storage(StorageConfig {
            root: Some("  ".into()),
            ..Default::default()
        });
        assert_invalid(&config, "storage.root");
    }

    #[test]
    fn test_validate_root_null_byte() {
        let config = storage(StorageConfig {
            root: Some("/srv/\0wiki".into()),
            ..Default::default()
        });
        assert_invalid(&config, "storage.root");
    }

    #[test]
    fn test_validate_extension() {
        for bad in ["html", ".", "./x", ".a\\b", ".abcdefghijklmnopq"] {
            let config = storage(StorageConfig {
                extension: Some(bad.into()),
                ..Default::default()
            });
            assert_invalid(&config, "storage.extension");
        }

        let config = storage(StorageConfig {
            extension: Some(".md".into()),
            ..Default::default()
        });
        ConfigValidator::validate(&config).unwrap();
    }

    #[test]
    fn test_validate_default_page() {
        for bad in ["", "../escape", "/index", "docs/", "a/./b"] {
            let config = storage(StorageConfig {
                default_page: Some(bad.into()),
                ..Default::default()
            });
            assert_invalid(&config, "storage.default_page");
        }
    }

    #[test]
    fn test_validate_content_type() {
        let config = Config {
            http: Some(HttpConfig {
                content_type: Some("html".into()),
                charset: None,
            }),
            ..Default::default()
        };
        assert_invalid(&config, "http.content_type");

        let config = Config {
            http: Some(HttpConfig {
                content_type: Some("text/html; charset=utf-8".into()),
                charset: None,
            }),
            ..Default::default()
        };
        assert_invalid(&config, "http.content_type");
    }

    #[test]
    fn test_validate_charset() {
        let config = Config {
            http: Some(HttpConfig {
                content_type: None,
                charset: Some("utf 8".into()),
            }),
            ..Default::default()
        };
        assert_invalid(&config, "http.charset");
    }

    #[test]
    fn test_validate_serve() {
        let config = Config {
            serve: Some(ServeConfig {
                interface: None,
                port: Some(0),
            }),
            ..Default::default()
        };
        assert_invalid(&config, "serve.port");

        let config = Config {
            serve: Some(ServeConfig {
                interface: Some("local host".into()),
                port: None,
            }),
            ..Default::default()
        };
        assert_invalid(&config, "serve.interface");
    }

    #[test]
    fn test_validate_busy_timeout_zero() {
        let config = Config {
            busy_timeout_ms: Some(0),
            ..Default::default()
        };
        assert_invalid(&config, "busy_timeout_ms");
    }
}
