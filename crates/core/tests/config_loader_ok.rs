use chrono::FixedOffset;
use gh_frontmatter_core::config::loader::ConfigLoader;
use gh_frontmatter_core::render::{DateZone, RenderOutcome, render};
use gh_frontmatter_core::yaml::{DEFAULT_MAX_ALIAS_COUNT, DEFAULT_MAX_DEPTH, YamlVersion};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn minimal_file_uses_defaults() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n");

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    assert_eq!(rc.source.as_deref(), Some(cfg_path.as_path()));
    assert!(!rc.render.allow_array_at_root);
    assert!(!rc.render.allow_primitive_at_root);
    assert_eq!(rc.render.date_zone, DateZone::Local);
    assert_eq!(rc.parse.version, YamlVersion::V1_1);
    assert!(!rc.parse.unique_keys);
    assert_eq!(rc.parse.max_depth, Some(DEFAULT_MAX_DEPTH));
    assert_eq!(rc.parse.max_alias_count, Some(DEFAULT_MAX_ALIAS_COUNT));
    assert_eq!(rc.logging.level, "info");
    assert!(rc.logging.file.is_none());
}

#[test]
fn all_sections_are_read() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("gh-frontmatter/config.toml");
    let toml = r#"
version = 1

[render]
allow_array_at_root = true
allow_primitive_at_root = true
date_zone = "+02:00"

[parse]
version = "1.2"
unique_keys = true
max_depth = 16
max_alias_count = 10

[logging]
level = "debug"
file_level = "trace"
file = "/tmp/ghfm.log"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    assert!(rc.render.allow_array_at_root);
    assert!(rc.render.allow_primitive_at_root);
    assert_eq!(rc.render.date_zone, DateZone::Fixed(FixedOffset::east_opt(7200).unwrap()));
    assert_eq!(rc.parse.version, YamlVersion::V1_2);
    assert!(rc.parse.unique_keys);
    assert_eq!(rc.parse.max_depth, Some(16));
    assert_eq!(rc.parse.max_alias_count, Some(10));
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file_level.as_deref(), Some("trace"));
    assert_eq!(rc.logging.file, Some(PathBuf::from("/tmp/ghfm.log")));
}

#[test]
fn resolved_config_drives_the_renderer() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(
        &cfg_path,
        "version = 1\n[render]\nallow_primitive_at_root = true\ndate_zone = \"utc\"\n",
    );

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    let options = rc.to_render_options();
    assert!(options.allow_primitive_at_root);
    assert_eq!(options.date_zone, DateZone::Fixed(FixedOffset::east_opt(0).unwrap()));

    match render("just text", &options) {
        RenderOutcome::Rendered(_) => {}
        other => panic!("expected Rendered, got {other:?}"),
    }
}
