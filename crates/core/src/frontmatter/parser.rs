//! Frontmatter extraction from markdown documents.

use super::types::FrontmatterBlock;

const FENCE: &str = "---";

/// Split the leading frontmatter block from markdown content.
///
/// The first line must be a `---` fence and a later line must close it:
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
/// Anything else means the document has no frontmatter.
pub fn extract(content: &str) -> Option<FrontmatterBlock> {
    let (first, rest) = split_line(content);
    if !is_fence(first) {
        return None;
    }

    let end_pos = find_closing_delimiter(rest)?;
    let raw = rest[..end_pos].strip_suffix('\n').unwrap_or(&rest[..end_pos]);
    let raw = raw.strip_suffix('\r').unwrap_or(raw);
    let (_, body) = split_line(&rest[end_pos..]);

    Some(FrontmatterBlock { raw: raw.to_string(), body: body.to_string() })
}

/// Strip the fences from a front matter literal produced by a markdown
/// parser (fences and trailing blank lines included).
pub fn strip_fences(literal: &str) -> Option<String> {
    extract(literal).map(|block| block.raw)
}

/// Find the byte offset of the closing `---` line.
fn find_closing_delimiter(content: &str) -> Option<usize> {
    let mut pos = 0;
    while pos < content.len() {
        let (line, rest) = split_line(&content[pos..]);
        if is_fence(line) {
            return Some(pos);
        }
        if rest.is_empty() && line.len() == content.len() - pos {
            break;
        }
        pos = content.len() - rest.len();
    }
    None
}

fn split_line(content: &str) -> (&str, &str) {
    match content.find('\n') {
        Some(i) => (&content[..i], &content[i + 1..]),
        None => (content, ""),
    }
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == FENCE
}
