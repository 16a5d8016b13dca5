//! List command implementation.

use crate::error::CliError;
use crate::utils::{open_wiki, GlobalOptions};
use clap::Args;
use std::io::Write;

/// List stored page keys.
#[derive(Args)]
pub struct ListCommand {
    /// Output as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let wiki = open_wiki(global)?;
        let keys = wiki.list()?;

        let mut stdout = std::io::stdout().lock();
        if self.json {
            let json = serde_json::to_string_pretty(&keys)
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            writeln!(stdout, "{json}")?;
        } else {
            for key in &keys {
                writeln!(stdout, "{key}")?;
            }
        }

        Ok(())
    }
}
