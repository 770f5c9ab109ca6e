use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

/// A command isolated from the user's config and `RUST_LOG`.
fn ghfm(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ghfm"));
    cmd.env("XDG_CONFIG_HOME", config_home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_frontmatter_table_as_html() {
    let tmp = tempdir().unwrap();
    ghfm(&tmp)
        .arg("table")
        .write_stdin("---\ntitle: Hi\n---\n# Body\n")
        .assert()
        .success()
        .stdout(
            "<table><thead><tr><th>title</th></tr></thead>\
             <tbody><tr><td><div>Hi</div></td></tr></tbody></table>\n",
        );
}

#[test]
fn raw_yaml_with_fixed_date_zone() {
    let tmp = tempdir().unwrap();
    ghfm(&tmp)
        .args(["table", "--yaml", "--date-zone", "utc"])
        .write_stdin("when: 2001-12-14\n")
        .assert()
        .success()
        .stdout(
            "<table><thead><tr><th>when</th></tr></thead>\
             <tbody><tr><td><div>2001-12-14 00:00:00 +0000</div></td></tr></tbody></table>\n",
        );
}

#[test]
fn yaml_version_changes_scalar_resolution() {
    let tmp = tempdir().unwrap();
    ghfm(&tmp)
        .args(["table", "--yaml"])
        .write_stdin("a: yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<div>true</div>"));

    ghfm(&tmp)
        .args(["table", "--yaml", "--yaml-version", "1.2"])
        .write_stdin("a: yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<div>yes</div>"));
}

#[test]
fn array_root_is_suppressed_unless_allowed() {
    let tmp = tempdir().unwrap();
    ghfm(&tmp)
        .args(["table", "--yaml"])
        .write_stdin("- a\n- b\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("plain markdown"));

    ghfm(&tmp)
        .args(["table", "--yaml", "--allow-array-at-root"])
        .write_stdin("- a\n- b\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<td><div>a</div></td><td><div>b</div></td>"));
}

#[test]
fn duplicate_keys_fail_with_unique_keys() {
    let tmp = tempdir().unwrap();
    ghfm(&tmp)
        .args(["table", "--yaml"])
        .write_stdin("a: 1\na: 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<th>a</th><th>a</th>"));

    ghfm(&tmp)
        .args(["table", "--yaml", "--unique-keys"])
        .write_stdin("a: 1\na: 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("flash flash-error mb-3"))
        .stdout(predicate::str::contains("Map keys must be unique"));
}

#[test]
fn json_output_is_hast_like() {
    let tmp = tempdir().unwrap();
    let output = ghfm(&tmp)
        .args(["table", "--json"])
        .write_stdin("---\na: b\n---\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["outcome"], "rendered");
    assert_eq!(value["fragment"]["type"], "element");
    assert_eq!(value["fragment"]["tagName"], "table");
    assert_eq!(value["fragment"]["children"][0]["tagName"], "thead");
}

#[test]
fn missing_frontmatter_prints_nothing() {
    let tmp = tempdir().unwrap();
    ghfm(&tmp)
        .arg("table")
        .write_stdin("# Just a heading\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no frontmatter found"));
}
