//! Init command implementation.
//!
//! This module implements the `init` command for explicitly preparing the
//! data directory, the storage root and, for the `SQLite` backend, the page
//! database.

use crate::error::CliError;
use crate::utils::{normalize_path, resolve_data_dir, GlobalOptions};
use clap::Parser;
use folio::config::Backend;
use folio::database::DATABASE_FILE;
use folio::init::{init_wiki, InitOptions};

/// Initialize the folio data directory and storage root.
#[derive(Parser)]
#[command(about = "Initialize the folio data directory and storage root")]
pub struct InitCommand {
    /// Overwrite an existing page database
    #[arg(long)]
    overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// The global `--data-dir` names the directory to create, and `--root`
    /// and `--backend` choose what to prepare inside it.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;
        let backend = global.backend.unwrap_or_default();

        let mut options = InitOptions::new(data_dir.clone())
            .with_backend(backend)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config);
        options.root = global.root.as_deref().map(normalize_path).transpose()?;
        let root = options.storage_root();

        if self.dry_run {
            println!("Dry-run mode: no changes will be made");
            println!();
            println!("Would initialize folio in: {}", data_dir.display());

            if data_dir.exists() {
                println!("  - Data directory already exists: {}", data_dir.display());
            } else {
                println!("  - Create data directory: {}", data_dir.display());
            }

            if root.exists() {
                println!("  - Storage root already exists: {}", root.display());
            } else {
                println!("  - Create storage root: {}", root.display());
            }

            if backend == Backend::Sqlite {
                let db_path = root.join(DATABASE_FILE);
                if !db_path.exists() {
                    println!("  - Create database: {}", db_path.display());
                } else if self.overwrite {
                    println!("  - Recreate database: {}", db_path.display());
                } else {
                    println!(
                        "  - ERROR: Database already exists (use --overwrite to replace): {}",
                        db_path.display()
                    );
                }
            }

            if self.with_config {
                let config_path = data_dir.join("config.yaml");
                if config_path.exists() {
                    println!(
                        "  - Configuration file already exists (will not overwrite): {}",
                        config_path.display()
                    );
                } else {
                    println!("  - Create configuration file: {}", config_path.display());
                }
            }

            return Ok(());
        }

        let result = init_wiki(&options)?;

        if global.quiet {
            return Ok(());
        }

        println!("Initialized folio in: {}", result.data_dir.display());

        if result.data_dir_created {
            println!("  - Created data directory");
        }

        if result.root_created {
            println!("  - Created storage root: {}", result.root.display());
        }

        if result.database_created {
            if self.overwrite {
                println!("  - Recreated database");
            } else {
                println!("  - Created database");
            }
        }

        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}
