//! Common test utilities for integration tests.

use std::fs::File;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use folio::config::{Backend, WikiSettings};
use folio::dispatch::{Method, Request};
use folio::Wiki;
use tempfile::TempDir;

/// Both storage backends, for tests that must hold for each.
#[allow(dead_code)]
pub const BACKENDS: [Backend; 2] = [Backend::Files, Backend::Sqlite];

/// Opens a wiki over a fresh temporary root.
///
/// The `TempDir` must outlive the wiki.
#[allow(dead_code)]
pub fn open_wiki(backend: Backend) -> (TempDir, Wiki) {
    let temp = TempDir::new().unwrap();
    let wiki = open_at(temp.path(), backend);
    (temp, wiki)
}

/// Opens a wiki over an existing root.
#[allow(dead_code)]
pub fn open_at(root: &Path, backend: Backend) -> Wiki {
    Wiki::open(WikiSettings::new(root).with_backend(backend)).unwrap()
}

/// A `GET` request.
#[allow(dead_code)]
pub fn get(path: &str) -> Request {
    Request::new(Method::Get, path)
}

/// A `POST` save request.
#[allow(dead_code)]
pub fn save(path: &str, mtime: &str, title: &str, content: &str) -> Request {
    Request::new(Method::Post, path).with_params([
        ("mtime", mtime),
        ("title", title),
        ("content", content),
    ])
}

/// Sets a file's modification time to `secs` after the epoch.
#[allow(dead_code)]
pub fn set_mtime(path: &Path, secs: u64) {
    let time: SystemTime = UNIX_EPOCH + Duration::from_secs(secs);
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
}
