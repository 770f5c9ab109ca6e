use crate::markdown_ast::comrak;
use crate::markdown_ast::types::*;
use crate::render::RenderOptions;

/// High-level API for rendering markdown documents with GitHub-style
/// frontmatter tables.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to HTML
    ///
    /// # Errors
    /// * `Render` - comrak failed to write the HTML
    /// * `Encoding` - the output was not valid UTF-8
    pub fn to_html(&self, input: &str) -> Result<HtmlResult, MarkdownAstError> {
        comrak::markdown_to_html(input, &self.options)
    }
}
