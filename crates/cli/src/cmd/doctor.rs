use color_eyre::eyre::Result;
use gh_frontmatter_core::config::{ConfigLoader, ResolvedConfig, default_config_path};
use std::path::Path;

pub fn run(cfg_path: Option<&Path>, overrides: impl FnOnce(&mut ResolvedConfig) -> Result<()>) {
    let loaded = ConfigLoader::load(cfg_path)
        .map_err(Into::into)
        .and_then(|mut rc| overrides(&mut rc).map(|()| rc));

    match loaded {
        Ok(rc) => {
            println!("OK   ghfm doctor");
            println!(
                "path: {}",
                rc.source.as_ref().map_or_else(
                    || format!("{} (not found, using defaults)", default_config_path().display()),
                    |p| p.display().to_string()
                )
            );
            println!("render.allow_array_at_root: {}", rc.render.allow_array_at_root);
            println!("render.allow_primitive_at_root: {}", rc.render.allow_primitive_at_root);
            println!("render.date_zone: {}", rc.render.date_zone);
            println!("parse.version: {}", rc.parse.version);
            println!("parse.unique_keys: {}", rc.parse.unique_keys);
            println!(
                "parse.max_depth: {}",
                rc.parse.max_depth.map_or_else(|| "none".to_string(), |d| d.to_string())
            );
            println!(
                "parse.max_alias_count: {}",
                rc.parse.max_alias_count.map_or_else(|| "none".to_string(), |n| n.to_string())
            );
            println!("logging.level: {}", rc.logging.level);
            if let Some(ref file) = rc.logging.file {
                println!("logging.file: {}", file.display());
            }
        }
        Err(e) => {
            println!("FAIL ghfm doctor");
            println!("{e}");
            if cfg_path.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
