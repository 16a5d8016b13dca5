//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::settings::WikiSettings;
use crate::config::validator::ConfigValidator;
use crate::database::resolve_data_dir;
use crate::error::{Error, Result};

/// Builds a [`Config`] from files, environment and explicit overrides.
///
/// # Examples
///
/// ```
/// use folio::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { busy_timeout_ms: Some(250), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.busy_timeout_ms, Some(250));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// A builder that loads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover project files from `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Read the user config from `dir` instead of the default data directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Ignore configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `FOLIO_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer `config` above every other source. Later calls win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is invalid, or the merged result fails validation.
    pub fn build(&self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(ref dir) => dir.clone(),
                None => std::env::current_dir().map_err(|e| Error::InvalidPath {
                    path: PathBuf::from("."),
                    reason: format!("Cannot get current directory: {e}"),
                })?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.data_dir.as_deref())?;
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overrides in &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Build the configuration and resolve it into [`WikiSettings`].
    ///
    /// # Errors
    ///
    /// As [`build`](Self::build), plus failure to locate the data directory.
    pub fn build_settings(&self) -> Result<WikiSettings> {
        let config = self.build()?;
        let data_dir = match self.data_dir {
            Some(ref dir) => dir.clone(),
            None => resolve_data_dir()?,
        };
        WikiSettings::from_config(&config, &data_dir)
    }
}
