//! File-per-page storage.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::page::{document, Page};
use crate::path::StorageKey;

use super::{check_token, next_token, secs_to_system_time, system_time_to_secs, KeyLocks, PageStore};

/// Stores each page as a document file at its key's path.
///
/// The file's modification time is the page's token. Writes go to a
/// temporary file in the same directory which is then renamed over the
/// page, so a reader that has opened a page sees one complete version:
/// the content and timestamp it reads belong to the same inode.
///
/// Updates serialize per key within this process. Separate processes
/// sharing a root are not coordinated; use [`SqliteStore`](super::SqliteStore)
/// for that.
///
/// # Examples
///
/// ```no_run
/// use folio::path::PathResolver;
/// use folio::store::{FileStore, PageStore};
///
/// let store = FileStore::new("/srv/wiki", ".html");
/// let key = PathResolver::new("/srv/wiki").resolve("index").unwrap();
///
/// let page = store.load(&key).unwrap();
/// let saved = store.update(&key, page.modified_at(), "Home", "<p>Hello</p>").unwrap();
/// assert!(saved.exists());
/// ```
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    extension: String,
    locks: KeyLocks,
}

impl FileStore {
    /// Create a store rooted at `root`, whose page files end in `extension`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
            locks: KeyLocks::new(),
        }
    }

    /// The storage root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn current_token(key: &StorageKey) -> Result<Option<i64>> {
        match fs::metadata(key.path()) {
            Ok(meta) if !meta.is_file() => Err(not_a_file(key)),
            Ok(meta) => Ok(Some(system_time_to_secs(meta.modified()?)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(key: &StorageKey, title: &str, body: &str, token: i64) -> Result<()> {
        let path = key.path();
        let dir = path.parent().ok_or_else(|| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "page path has no parent directory".to_string(),
        })?;
        fs::create_dir_all(dir)?;

        let mut tmp = tempfile::Builder::new()
            .prefix(".folio-")
            .suffix(".tmp")
            .tempfile_in(dir)?;
        tmp.write_all(document::render(title, body).as_bytes())?;
        tmp.as_file().set_modified(secs_to_system_time(token))?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }
}

impl PageStore for FileStore {
    fn load(&self, key: &StorageKey) -> Result<Page> {
        let mut file = match File::open(key.path()) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Page::absent(key)),
            Err(e) => return Err(e.into()),
        };

        let meta = file.metadata()?;
        if !meta.is_file() {
            return Err(not_a_file(key));
        }
        let modified_at = system_time_to_secs(meta.modified()?)?;

        let mut content = String::new();
        file.read_to_string(&mut content).map_err(|e| {
            if e.kind() == io::ErrorKind::InvalidData {
                Error::MalformedResource {
                    key: key.name().to_string(),
                    details: "content is not valid UTF-8".to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        let parts = document::parse(key.name(), &content)?;
        Ok(Page::stored(key, parts.title, parts.body, modified_at))
    }

    fn update(
        &self,
        key: &StorageKey,
        expected: Option<i64>,
        title: &str,
        body: &str,
    ) -> Result<Page> {
        self.locks.with_lock(key.name(), || {
            let current = Self::current_token(key)?;
            check_token(key, expected, current)?;

            let token = next_token(current)?;
            Self::write(key, title, body, token)?;
            log::debug!("wrote {} ({:?} -> {token})", key.path().display(), current);

            self.load(key)
        })
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        if !self.root.is_dir() {
            return Ok(names);
        }

        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let segments: Vec<_> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            let joined = segments.join("/");
            if let Some(name) = joined.strip_suffix(&self.extension) {
                if !name.is_empty() && !name.ends_with('/') {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }
}

fn not_a_file(key: &StorageKey) -> Error {
    Error::MalformedResource {
        key: key.name().to_string(),
        details: format!("{} is not a regular file", key.path().display()),
    }
}
