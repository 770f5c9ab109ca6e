//! JSON output for the table command.

use color_eyre::eyre::Result;
use gh_frontmatter_core::fragment::Fragment;
use serde::Serialize;

/// A rendered table or error fragment with its outcome.
#[derive(Debug, Serialize)]
pub struct TableOutput<'a> {
    pub outcome: &'static str,
    pub fragment: &'a Fragment,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
