//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Create the data directory, storage root and optional config
//! - `resolve`: Show the storage key for a request path
//! - `show`: Print a stored page
//! - `edit`: Conditionally update a page
//! - `list`: List stored page keys
//! - `serve`: Serve the wiki over HTTP
//! - `validate`: Validate configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod edit;
pub mod init;
pub mod list;
pub mod resolve;
pub mod serve;
pub mod show;
pub mod validate;

pub use completions::CompletionsCommand;
pub use edit::EditCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use resolve::ResolveCommand;
pub use serve::ServeCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
