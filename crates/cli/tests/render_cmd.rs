use assert_cmd::Command;
use insta::assert_snapshot;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

fn ghfm(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ghfm"));
    cmd.env("XDG_CONFIG_HOME", config_home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn renders_document_from_stdin() {
    let tmp = tempdir().unwrap();
    let output = ghfm(&tmp)
        .arg("render")
        .write_stdin("---\ntitle: Post\ndraft: no\n---\n\nHello *world*.\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    assert_snapshot!(String::from_utf8(output.stdout).unwrap(), @r#"
<table><thead><tr><th>title</th><th>draft</th></tr></thead><tbody><tr><td><div>Post</div></td><td><div>false</div></td></tr></tbody></table>
<p>Hello <em>world</em>.</p>
"#);
}

#[test]
fn renders_file_to_output_path() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("doc.md");
    let out = tmp.path().join("doc.html");
    fs::write(&input, "---\n- x\n---\n").unwrap();

    ghfm(&tmp)
        .args(["render", input.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<hr />\n"));
    assert!(html.contains("<li>x</li>"));
}

#[test]
fn config_file_settings_apply() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("gh-frontmatter").join("config.toml");
    fs::create_dir_all(cfg.parent().unwrap()).unwrap();
    fs::write(&cfg, "version = 1\n[render]\nallow_array_at_root = true\n").unwrap();

    ghfm(&tmp)
        .arg("render")
        .write_stdin("---\n- x\n---\n")
        .assert()
        .success()
        .stdout("<table><tbody><tr><td><div>x</div></td></tr></tbody></table>\n");
}

#[test]
fn missing_input_file_fails() {
    let tmp = tempdir().unwrap();
    ghfm(&tmp)
        .args(["render", tmp.path().join("absent.md").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn missing_explicit_config_fails() {
    let tmp = tempdir().unwrap();
    ghfm(&tmp)
        .args(["render", "--config", tmp.path().join("nope.toml").to_str().unwrap()])
        .write_stdin("# x\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
