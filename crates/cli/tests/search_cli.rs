//! End-to-end tests for the search surfaces of the vfind binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Create a vault with two notes plus a config file pointing at it.
fn setup() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let vault = tmp.path().join("vault");

    write(
        &vault.join("a.md"),
        "---\ntags:\n  - work\n  - urgent\n---\nnothing here\n",
    );
    write(&vault.join("b.md"), "urgent deadline approaching\n");

    let cfg_path = tmp.path().join("config.toml");
    write(
        &cfg_path,
        &format!("version = 1\nvault_root = \"{}\"\n", vault.display()),
    );

    (tmp, cfg_path)
}

fn vfind(cfg_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vfind").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd.args(["--config", cfg_path.to_str().unwrap()]);
    cmd
}

#[test]
fn search_matches_tag_and_offers_create() {
    let (_tmp, cfg_path) = setup();

    vfind(&cfg_path)
        .args(["search", "urgent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.md"))
        .stdout(predicate::str::contains("b.md").not())
        .stdout(predicate::str::contains("Create new Note"));
}

#[test]
fn search_quiet_prints_paths_only() {
    let (_tmp, cfg_path) = setup();

    vfind(&cfg_path)
        .args(["search", "urgent", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.md"))
        .stdout(predicate::str::contains("Create new Note").not());
}

#[test]
fn search_json_carries_new_note_uri() {
    let (_tmp, cfg_path) = setup();

    vfind(&cfg_path)
        .args(["search", "urgent", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("obsidian://new?vault=vault&name=urgent"));
}

#[test]
fn quick_query_uses_and_semantics() {
    let (_tmp, cfg_path) = setup();

    vfind(&cfg_path)
        .args(["quick", "work urgent", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.md"))
        .stdout(predicate::str::contains("b.md").not());

    vfind(&cfg_path)
        .args(["quick", "work urgent missing", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn body_toggle_widens_search() {
    let (tmp, cfg_path) = setup();
    let vault = tmp.path().join("vault");
    write(
        &cfg_path,
        &format!(
            "version = 1\nvault_root = \"{}\"\nfilter_by_body = true\n",
            vault.display()
        ),
    );

    vfind(&cfg_path)
        .args(["search", "urgent", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.md"))
        .stdout(predicate::str::contains("b.md"));
}

#[test]
fn index_reports_note_count() {
    let (_tmp, cfg_path) = setup();

    vfind(&cfg_path)
        .arg("index")
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 2 notes"));
}

#[test]
fn index_json_output() {
    let (_tmp, cfg_path) = setup();

    vfind(&cfg_path)
        .args(["index", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"notes\": 2"));
}

#[test]
fn malformed_note_is_skipped_with_warning() {
    let (tmp, cfg_path) = setup();
    write(
        &tmp.path().join("vault/broken.md"),
        "---\ntags: [oops\n---\nurgent\n",
    );

    vfind(&cfg_path)
        .arg("index")
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 2 notes"))
        .stderr(predicate::str::contains("broken.md"));
}

#[test]
fn uri_subcommand_percent_encodes() {
    let (_tmp, cfg_path) = setup();

    vfind(&cfg_path)
        .args(["uri", "my note.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "obsidian://open?vault=vault&file=my%20note.md",
        ));

    vfind(&cfg_path)
        .args(["uri", "--new", "fresh idea"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "obsidian://new?vault=vault&name=fresh%20idea",
        ));
}
