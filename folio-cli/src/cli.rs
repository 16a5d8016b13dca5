//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, EditCommand, InitCommand, ListCommand, ResolveCommand, ServeCommand,
    ShowCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use folio::config::Backend;
use std::path::PathBuf;

/// Command-line tool and development server for a folio wiki.
#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Read, edit and serve a folio wiki", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "FOLIO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the storage root
    #[arg(long, value_name = "PATH", global = true)]
    pub root: Option<PathBuf>,

    /// Override the storage backend (files or sqlite)
    #[arg(long, value_name = "BACKEND", global = true)]
    pub backend: Option<Backend>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and storage root
    Init(InitCommand),

    /// Show the storage key a request path resolves to
    Resolve(ResolveCommand),

    /// Print a stored page
    Show(ShowCommand),

    /// Update a page if it has not changed since it was read
    Edit(EditCommand),

    /// List stored page keys
    List(ListCommand),

    /// Serve the wiki over HTTP
    Serve(ServeCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
