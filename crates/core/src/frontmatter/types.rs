//! Frontmatter types.

/// A `---`-fenced YAML block at the start of a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterBlock {
    /// YAML between the fences, without the fences or the final newline.
    pub raw: String,
    /// The markdown body (everything after the closing fence line).
    pub body: String,
}

impl FrontmatterBlock {
    /// Rebuild the fenced block as it appeared in the document.
    pub fn fenced(&self) -> String {
        fence(&self.raw)
    }
}

/// Wrap raw YAML in `---` fences.
pub fn fence(raw: &str) -> String {
    format!("---\n{raw}\n---")
}
