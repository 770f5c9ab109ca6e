use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};
use comrak::{Arena, Options, format_html, parse_document};
use tracing::debug;

use crate::fragment::to_html;
use crate::frontmatter::{fence, strip_fences};
use crate::markdown_ast::types::*;
use crate::render::{RenderOptions, RenderOutcome, render};

/// Replace the document's leading front matter node.
///
/// Rendered tables and error banners become a raw HTML block in place of
/// the node. A suppressed block is parsed again as markdown, without front
/// matter support, and its blocks are spliced in where the node was.
pub fn apply_yaml_metadata<'a>(
    arena: &'a Arena<AstNode<'a>>,
    root: &'a AstNode<'a>,
    options: &RenderOptions,
    markdown_options: &Options,
) -> FrontmatterDisposition {
    let Some(node) = root.first_child() else {
        return FrontmatterDisposition::Absent;
    };

    let raw = match node.data.borrow().value {
        NodeValue::FrontMatter(ref literal) => strip_fences(literal),
        _ => return FrontmatterDisposition::Absent,
    };
    let Some(raw) = raw else {
        return FrontmatterDisposition::Absent;
    };

    let outcome = render(&raw, options);
    let disposition = match outcome {
        RenderOutcome::Rendered(_) => FrontmatterDisposition::Rendered,
        RenderOutcome::Failed(_) => FrontmatterDisposition::Failed,
        RenderOutcome::Suppressed => FrontmatterDisposition::Fallback,
    };

    match outcome.fragment() {
        Some(fragment) => {
            let mut literal = to_html(fragment);
            literal.push('\n');
            node.data.borrow_mut().value =
                NodeValue::HtmlBlock(NodeHtmlBlock { block_type: 6, literal });
        }
        None => {
            let mut fallback_options = markdown_options.clone();
            fallback_options.extension.front_matter_delimiter = None;

            let fragment = parse_document(arena, &fence(&raw), &fallback_options);
            let children: Vec<_> = fragment.children().collect();
            for child in children {
                child.detach();
                node.insert_before(child);
            }
            node.detach();
        }
    }

    debug!(frontmatter = disposition.as_str(), "applied yaml metadata");
    disposition
}

/// Render a markdown document to HTML, showing its frontmatter as a table.
pub fn markdown_to_html(
    input: &str,
    options: &RenderOptions,
) -> Result<HtmlResult, MarkdownAstError> {
    let arena = Arena::new();
    let markdown_options = default_options();

    // A closing fence on the last line needs its newline to be recognised.
    let source = if input.ends_with('\n') { input.to_string() } else { format!("{input}\n") };
    let root = parse_document(&arena, &source, &markdown_options);

    let frontmatter = apply_yaml_metadata(&arena, root, options, &markdown_options);

    let mut output = Vec::new();
    format_html(root, &markdown_options, &mut output).map_err(MarkdownAstError::Render)?;
    let html = String::from_utf8(output)?;

    Ok(HtmlResult { html, frontmatter })
}

pub fn default_options() -> Options<'static> {
    let mut options = Options::default();
    // Enable GFM extensions for compatibility
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.front_matter_delimiter = Some("---".to_string());

    options.parse.smart = false;

    options.render.hardbreaks = false;
    options.render.github_pre_lang = true;
    // Metadata tables are spliced in as raw HTML blocks.
    options.render.unsafe_ = true;

    options
}
