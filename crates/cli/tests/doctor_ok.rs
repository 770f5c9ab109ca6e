use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1

[render]
allow_array_at_root = true
date_zone = "+02:00"

[parse]
version = "1.2"
"#;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ghfm"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   ghfm doctor"))
        .stdout(predicate::str::contains(format!("path: {}", cfg.display())))
        .stdout(predicate::str::contains("render.allow_array_at_root: true"))
        .stdout(predicate::str::contains("render.date_zone: +02:00"))
        .stdout(predicate::str::contains("parse.version: 1.2"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("gh-frontmatter").join("config.toml");
    write_file(&cfg_path, "version = 1\n[parse]\nunique_keys = true\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ghfm"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("parse.unique_keys: true"));
}

#[test]
fn doctor_falls_back_to_defaults_without_a_file() {
    let tmp = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ghfm"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("not found, using defaults"))
        .stdout(predicate::str::contains("parse.version: 1.1"))
        .stdout(predicate::str::contains("parse.max_depth: 512"))
        .stdout(predicate::str::contains("parse.max_alias_count: 100"))
        .stdout(predicate::str::contains("render.date_zone: local"));
}

#[test]
fn doctor_shows_flag_overrides() {
    let tmp = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ghfm"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["doctor", "--yaml-version", "1.2", "--allow-primitive-at-root"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("parse.version: 1.2"))
        .stdout(predicate::str::contains("render.allow_primitive_at_root: true"));
}
