use color_eyre::eyre::{Result, WrapErr};
use gh_frontmatter_core::config::ResolvedConfig;
use gh_frontmatter_core::markdown_ast::MarkdownRenderer;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run(cfg: &ResolvedConfig, file: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let input = crate::read_input(file)?;
    let renderer = MarkdownRenderer::new(cfg.to_render_options());
    let result = renderer.to_html(&input)?;

    match output {
        Some(path) => {
            fs::write(path, &result.html)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), frontmatter = result.frontmatter.as_str(), "wrote HTML");
        }
        None => print!("{}", result.html),
    }

    Ok(())
}
