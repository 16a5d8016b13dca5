//! Wiki initialization.
//!
//! Creates the data directory and storage root, the page database for the
//! `SQLite` backend, and optionally a starter configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::loader::USER_CONFIG_FILE;
use crate::config::settings::DEFAULT_PAGES_DIR;
use crate::config::Backend;
use crate::database::{Database, DatabaseConfig};
use crate::error::{Error, Result};

/// Options for [`init_wiki`].
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory holding the user configuration.
    pub data_dir: PathBuf,
    /// Storage root; `<data_dir>/pages` when unset.
    pub root: Option<PathBuf>,
    /// Backend to prepare.
    pub backend: Backend,
    /// Replace an existing page database.
    pub overwrite: bool,
    /// Write a starter `config.yaml` into the data directory.
    pub create_config: bool,
}

impl InitOptions {
    /// Options for a files-backed wiki under `data_dir`.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            root: None,
            backend: Backend::default(),
            overwrite: false,
            create_config: false,
        }
    }

    /// Use an explicit storage root.
    #[must_use]
    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = Some(root);
        self
    }

    /// Select the backend.
    #[must_use]
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Sets whether to replace an existing database.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to write a starter configuration file.
    #[must_use]
    pub fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }

    /// The storage root these options resolve to.
    #[must_use]
    pub fn storage_root(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| self.data_dir.join(DEFAULT_PAGES_DIR))
    }
}

/// What [`init_wiki`] did.
#[derive(Debug)]
pub struct InitResult {
    /// The data directory was created.
    pub data_dir_created: bool,
    /// The storage root was created.
    pub root_created: bool,
    /// A page database was created or recreated.
    pub database_created: bool,
    /// A configuration file was written.
    pub config_created: bool,
    /// Data directory.
    pub data_dir: PathBuf,
    /// Storage root.
    pub root: PathBuf,
}

/// Prepare a wiki on disk.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be created, the
/// database cannot be initialized, or a database already exists and
/// `overwrite` is off.
///
/// # Examples
///
/// ```no_run
/// use folio::config::Backend;
/// use folio::init::{init_wiki, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/folio-test"))
///     .with_backend(Backend::Sqlite)
///     .with_create_config(true);
///
/// let result = init_wiki(&options).unwrap();
/// println!("pages in {}", result.root.display());
/// ```
pub fn init_wiki(options: &InitOptions) -> Result<InitResult> {
    let root = options.storage_root();
    let mut result = InitResult {
        data_dir_created: false,
        root_created: false,
        database_created: false,
        config_created: false,
        data_dir: options.data_dir.clone(),
        root: root.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    if !root.exists() {
        fs::create_dir_all(&root)?;
        result.root_created = true;
    }

    if options.backend == Backend::Sqlite {
        let db_config = DatabaseConfig::for_root(&root);

        if db_config.path.exists() {
            if !options.overwrite {
                return Err(Error::Validation {
                    field: "database".into(),
                    message: format!(
                        "database already exists at {}; use --overwrite to replace it",
                        db_config.path.display()
                    ),
                });
            }
            fs::remove_file(&db_config.path)?;
            for suffix in ["-wal", "-shm"] {
                let mut sidecar = db_config.path.clone().into_os_string();
                sidecar.push(suffix);
                if let Err(e) = fs::remove_file(&sidecar) {
                    if e.kind() != std::io::ErrorKind::NotFound {
                        return Err(e.into());
                    }
                }
            }
        }

        Database::open(db_config)?;
        result.database_created = true;
    }

    if options.create_config {
        let config_path = options.data_dir.join(USER_CONFIG_FILE);
        if !config_path.exists() {
            fs::write(&config_path, config_template(options.root.as_deref(), options.backend)?)?;
            result.config_created = true;
        }
    }

    log::info!("initialized wiki at {}", root.display());
    Ok(result)
}

fn config_template(root: Option<&Path>, backend: Backend) -> Result<String> {
    let root_line = match root {
        Some(root) => {
            let quoted = serde_yaml::to_string(&root.to_string_lossy())?;
            format!("  root: {}", quoted.trim_end())
        }
        None => format!("  # root: ~/.folio/{DEFAULT_PAGES_DIR}"),
    };

    Ok(format!(
        "# folio configuration\n\
         \n\
         storage:\n\
         {root_line}\n  \
         backend: {backend}\n  \
         # extension: .html\n  \
         # default_page: index\n\
         \n\
         # http:\n\
         #   content_type: text/html\n\
         #   charset: utf-8\n\
         \n\
         # serve:\n\
         #   interface: 127.0.0.1\n\
         #   port: 8080\n\
         \n\
         # busy_timeout_ms: 5000\n"
    ))
}
