pub mod comrak;
pub mod editor;
pub mod types;

// Re-export primary API
pub use comrak::{apply_yaml_metadata, default_options, markdown_to_html};
pub use editor::MarkdownRenderer;
pub use types::{FrontmatterDisposition, HtmlResult, MarkdownAstError};
