//! Resolve command implementation.
//!
//! Shows which storage key and file a request path maps to, without
//! touching storage.

use crate::error::CliError;
use crate::utils::{load_settings, GlobalOptions};
use clap::Args;
use folio::path::PathResolver;

/// Show the storage key a request path resolves to.
#[derive(Args)]
pub struct ResolveCommand {
    /// Request path, as it would appear in a URL
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ResolveCommand {
    /// Execute the resolve command.
    ///
    /// A path that escapes the storage root fails with exit code 1.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let resolver = PathResolver::new(&settings.root)
            .with_extension(settings.extension.clone())
            .with_default_key(settings.default_page.clone());

        let key = resolver.resolve(&self.path)?;

        if self.json {
            let output = serde_json::json!({
                "key": key.name(),
                "path": key.path().display().to_string(),
            });
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            println!("{json}");
        } else {
            println!("{}\t{}", key.name(), key.path().display());
        }

        Ok(())
    }
}
