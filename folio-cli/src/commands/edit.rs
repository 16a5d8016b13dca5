//! Edit command implementation.
//!
//! Updates a page only if its modification token still matches the one
//! the caller read, so a script can never silently overwrite someone
//! else's edit.

use crate::error::CliError;
use crate::utils::{open_wiki, GlobalOptions};
use clap::{ArgGroup, Args};
use std::io::Read;
use std::path::PathBuf;

/// Update a page if it has not changed since it was read.
#[derive(Args)]
#[command(group(ArgGroup::new("content").required(true).args(["body", "body_file"])))]
pub struct EditCommand {
    /// Request path of the page
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Token from `show`, or `none` for a page that should not exist yet
    #[arg(long, value_name = "TOKEN")]
    pub expect: String,

    /// New title (defaults to the current title)
    #[arg(long)]
    pub title: Option<String>,

    /// New body
    #[arg(long)]
    pub body: Option<String>,

    /// Read the new body from a file (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub body_file: Option<PathBuf>,
}

impl EditCommand {
    /// Execute the edit command.
    ///
    /// Prints the page's new token. A stale token fails with exit code 1.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let expected = parse_expect(&self.expect)?;
        let body = self.read_body()?;

        let wiki = open_wiki(global)?;
        let key = wiki.resolve(&self.path)?;

        let title = match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => wiki.store().load(&key)?.title().to_string(),
        };

        let page = wiki.store().update(&key, expected, &title, &body)?;
        let token = page
            .modified_at()
            .ok_or_else(|| CliError::SemanticFailure(format!("'{}' was not saved", page.key())))?;

        if !global.quiet {
            eprintln!("Saved '{}'", page.key());
        }
        println!("{token}");

        Ok(())
    }

    fn read_body(&self) -> Result<String, CliError> {
        if let Some(ref body) = self.body {
            return Ok(body.clone());
        }

        match self.body_file.as_deref() {
            Some(path) if path.as_os_str() == "-" => {
                let mut body = String::new();
                std::io::stdin().read_to_string(&mut body)?;
                Ok(body)
            }
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => Err(CliError::InvalidArguments(
                "one of --body or --body-file is required".to_string(),
            )),
        }
    }
}

/// Parse `--expect`: `none` (or empty) for no page, otherwise whole seconds.
fn parse_expect(raw: &str) -> Result<Option<i64>, CliError> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    raw.parse::<i64>().map(Some).map_err(|_| {
        CliError::InvalidArguments(format!(
            "--expect must be a token from `folio show` or `none`, got '{raw}'"
        ))
    })
}
