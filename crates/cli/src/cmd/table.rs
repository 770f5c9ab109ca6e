use color_eyre::eyre::Result;
use gh_frontmatter_core::config::ResolvedConfig;
use gh_frontmatter_core::fragment::to_html;
use gh_frontmatter_core::frontmatter::extract;
use gh_frontmatter_core::render::render;
use std::path::Path;

use super::output::{TableOutput, print_json};

pub fn run(cfg: &ResolvedConfig, file: Option<&Path>, raw_yaml: bool, json: bool) -> Result<()> {
    let input = crate::read_input(file)?;

    let raw = if raw_yaml {
        input.strip_suffix('\n').unwrap_or(&input).to_string()
    } else {
        match extract(&input) {
            Some(block) => block.raw,
            None => {
                eprintln!("no frontmatter found");
                return Ok(());
            }
        }
    };

    let outcome = render(&raw, &cfg.to_render_options());
    let Some(fragment) = outcome.fragment() else {
        eprintln!("frontmatter would render as plain markdown; no table produced");
        return Ok(());
    };

    if json {
        print_json(&TableOutput { outcome: outcome.kind(), fragment })?;
    } else {
        println!("{}", to_html(fragment));
    }

    Ok(())
}
