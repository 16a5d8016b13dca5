//! Build script for folio-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("folio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read, edit and serve a folio wiki")
        .long_about(
            "Command-line tool and development server for a file-backed wiki with \
             optimistic concurrency control",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("FOLIO_DATA_DIR"),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .help("Override the storage root")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("backend")
                .long("backend")
                .help("Override the storage backend (files or sqlite)")
                .value_name("BACKEND")
                .global(true),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Initialize the data directory and storage root")
                .long_about("Create the data directory, storage root and optional configuration"),
            Command::new("resolve")
                .about("Show the storage key a request path resolves to")
                .long_about("Resolve a request path without touching storage"),
            Command::new("show")
                .about("Print a stored page")
                .long_about("Print a page's title, modification token and body"),
            Command::new("edit")
                .about("Update a page if it has not changed since it was read")
                .long_about("Conditionally update a page using the token printed by show"),
            Command::new("list")
                .about("List stored page keys")
                .long_about("List the keys of all stored pages in sorted order"),
            Command::new("serve")
                .about("Serve the wiki over HTTP")
                .long_about("Run a small HTTP server with view, edit and save actions"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a folio configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("folio.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
