//! Frontmatter extraction.
//!
//! Finds the `---`-fenced YAML block at the start of a markdown document and
//! rebuilds the fenced text for error display and markdown fallback.

pub mod parser;
pub mod types;

pub use parser::{extract, strip_fences};
pub use types::{FrontmatterBlock, fence};
