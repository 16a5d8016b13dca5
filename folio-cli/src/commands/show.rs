//! Show command implementation.

use crate::error::CliError;
use crate::utils::{format_timestamp, open_wiki, shorten_path, GlobalOptions};
use clap::Args;

/// Print a stored page.
#[derive(Args)]
pub struct ShowCommand {
    /// Request path of the page
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowCommand {
    /// Execute the show command.
    ///
    /// A page that does not exist fails with exit code 1; the JSON form
    /// reports it with `"exists": false` instead.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let wiki = open_wiki(global)?;
        let key = wiki.resolve(&self.path)?;
        let page = wiki.store().load(&key)?;

        if self.json {
            let json = serde_json::to_string_pretty(&page)
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            println!("{json}");
            return Ok(());
        }

        let Some(token) = page.modified_at() else {
            return Err(CliError::SemanticFailure(format!(
                "No page stored at '{}'",
                page.key()
            )));
        };

        println!("Title:    {}", page.title());
        println!("Modified: {} (token {token})", format_timestamp(token));
        if global.verbose {
            println!("Stored:   {}", shorten_path(&wiki.storage_location(&key)));
        }
        println!();
        println!("{}", page.body());

        Ok(())
    }
}
