use thiserror::Error;

/// What happened to a document's frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterDisposition {
    /// The document has no leading frontmatter node.
    Absent,
    /// Replaced by a metadata table.
    Rendered,
    /// Replaced by a YAML error banner.
    Failed,
    /// Re-read as ordinary markdown.
    Fallback,
}

impl FrontmatterDisposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Rendered => "rendered",
            Self::Failed => "failed",
            Self::Fallback => "fallback",
        }
    }
}

/// Result of rendering a markdown document to HTML.
#[derive(Debug, Clone)]
pub struct HtmlResult {
    pub html: String,
    pub frontmatter: FrontmatterDisposition,
}

#[derive(Debug, Error)]
pub enum MarkdownAstError {
    #[error("failed to render markdown: {0}")]
    Render(#[source] std::io::Error),

    #[error("rendered HTML is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
