//! Integration tests for the configuration system.
//!
//! Covers the whole path from files on disk and `FOLIO_*` variables to a
//! running [`Wiki`]: discovery, layering, validation, and settings
//! resolution.
//!
//! Tests that touch environment variables are marked `#[serial]`; the
//! environment is process-global.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use folio::config::{Backend, ConfigBuilder};
use folio::error::Error;
use folio::Wiki;

// ============================================================================
// Test Utilities
// ============================================================================

fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// Restores an environment variable when dropped.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

fn clear_folio_env_vars() -> Vec<EnvGuard> {
    [
        "FOLIO_STORAGE_ROOT",
        "FOLIO_BACKEND",
        "FOLIO_EXTENSION",
        "FOLIO_DEFAULT_PAGE",
        "FOLIO_CHARSET",
        "FOLIO_SERVE_INTERFACE",
        "FOLIO_SERVE_PORT",
        "FOLIO_BUSY_TIMEOUT_MS",
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}

/// A builder isolated from the real home directory.
fn builder(working: &Path, data: &Path) -> ConfigBuilder {
    ConfigBuilder::new()
        .with_working_dir(working)
        .with_data_dir(data)
}

// ============================================================================
// Discovery and layering
// ============================================================================

#[test]
#[serial]
fn test_project_config_found_from_subdirectory() {
    let _env = clear_folio_env_vars();
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    let nested = temp.path().join("project/docs/deep");
    fs::create_dir_all(&nested).unwrap();
    create_temp_config(
        &temp.path().join("project"),
        "folio.yaml",
        "storage:\n  backend: sqlite\n",
    );

    let config = builder(&nested, &data).build().unwrap();
    assert_eq!(config.backend(), Backend::Sqlite);
}

#[test]
#[serial]
fn test_local_config_overrides_project_overrides_user() {
    let _env = clear_folio_env_vars();
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir_all(&data).unwrap();

    create_temp_config(
        &data,
        "config.yaml",
        "storage:\n  extension: .page\n  default_page: home\nbusy_timeout_ms: 100\n",
    );
    create_temp_config(
        temp.path(),
        "folio.yaml",
        "storage:\n  extension: .htm\nbusy_timeout_ms: 200\n",
    );
    create_temp_config(temp.path(), "folio.local.yaml", "busy_timeout_ms: 300\n");

    let config = builder(temp.path(), &data).build().unwrap();
    let storage = config.storage.unwrap();
    assert_eq!(storage.extension.as_deref(), Some(".htm"));
    assert_eq!(storage.default_page.as_deref(), Some("home"));
    assert_eq!(config.busy_timeout_ms, Some(300));
}

#[test]
#[serial]
fn test_environment_beats_files() {
    let _env = clear_folio_env_vars();
    let temp = TempDir::new().unwrap();
    create_temp_config(temp.path(), "folio.yaml", "storage:\n  backend: files\n");

    let _backend = EnvGuard::new("FOLIO_BACKEND", "sqlite");
    let _port = EnvGuard::new("FOLIO_SERVE_PORT", "9000");

    let config = builder(temp.path(), &temp.path().join("data")).build().unwrap();
    assert_eq!(config.backend(), Backend::Sqlite);
    assert_eq!(config.serve.unwrap().port, Some(9000));
}

#[test]
#[serial]
fn test_invalid_environment_value_rejected() {
    let _env = clear_folio_env_vars();
    let temp = TempDir::new().unwrap();
    let _backend = EnvGuard::new("FOLIO_BACKEND", "postgres");

    let result = builder(temp.path(), &temp.path().join("data")).build();
    assert!(result.is_err());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
#[serial]
fn test_unknown_field_rejected() {
    let _env = clear_folio_env_vars();
    let temp = TempDir::new().unwrap();
    create_temp_config(temp.path(), "folio.yaml", "storage:\n  flavour: vanilla\n");

    let err = builder(temp.path(), &temp.path().join("data"))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("flavour"), "{err}");
}

#[test]
#[serial]
fn test_bad_extension_rejected() {
    let _env = clear_folio_env_vars();
    let temp = TempDir::new().unwrap();
    create_temp_config(temp.path(), "folio.yaml", "storage:\n  extension: html\n");

    let err = builder(temp.path(), &temp.path().join("data"))
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
#[serial]
fn test_escaping_default_page_rejected() {
    let _env = clear_folio_env_vars();
    let temp = TempDir::new().unwrap();
    create_temp_config(temp.path(), "folio.yaml", "storage:\n  default_page: ../up\n");

    assert!(builder(temp.path(), &temp.path().join("data")).build().is_err());
}

// ============================================================================
// Settings and end to end
// ============================================================================

#[test]
#[serial]
fn test_settings_default_root_under_data_dir() {
    let _env = clear_folio_env_vars();
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");

    let settings = builder(temp.path(), &data).build_settings().unwrap();
    assert_eq!(settings.root, data.join("pages"));
    assert_eq!(settings.backend, Backend::Files);
}

#[test]
#[serial]
fn test_configured_wiki_uses_extension_and_default_page() {
    let _env = clear_folio_env_vars();
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("wiki");
    create_temp_config(
        temp.path(),
        "folio.yaml",
        &format!(
            "storage:\n  root: {}\n  extension: .page\n  default_page: home\nhttp:\n  charset: iso-8859-1\n",
            root.display()
        ),
    );

    let settings = builder(temp.path(), &temp.path().join("data"))
        .build_settings()
        .unwrap();
    assert_eq!(settings.content_type_header(), "text/html; charset=iso-8859-1");

    let wiki = Wiki::open(settings).unwrap();
    wiki.update("", None, "Home", "hello").unwrap();

    assert!(root.join("home.page").is_file());
    assert_eq!(wiki.list().unwrap(), vec!["home".to_string()]);
}

#[test]
#[serial]
fn test_storage_root_from_environment() {
    let _env = clear_folio_env_vars();
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("from-env");
    let _root = EnvGuard::new("FOLIO_STORAGE_ROOT", root.to_str().unwrap());

    let settings = builder(temp.path(), &temp.path().join("data"))
        .build_settings()
        .unwrap();
    assert_eq!(settings.root, root);
}
