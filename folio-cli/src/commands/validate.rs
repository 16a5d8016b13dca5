//! Command to validate a folio configuration file.

use crate::error::CliError;
use crate::utils::{resolve_config_file, GlobalOptions};
use clap::Args;
use folio::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a folio configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate (defaults to the nearest project
    /// config, then the user config)
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config_path = match self.config_path {
            Some(path) => path,
            None => resolve_config_file(global)?,
        };

        if !config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                config_path.display()
            )));
        }

        let config = match ConfigLoader::load_file(&config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        match ConfigValidator::validate(&config) {
            Ok(()) => {
                if !global.quiet {
                    println!("Configuration is valid: {}", config_path.display());
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
