//! Integration tests for the clean command.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn outroute() -> Command {
    Command::cargo_bin("outroute").unwrap()
}

/// Create a workspace with sources and a populated shared build root.
fn create_test_workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    let app = root.join("app");
    fs::create_dir_all(app.join("src")).unwrap();
    fs::write(app.join("build.gradle"), "apply plugin: 'java'").unwrap();
    fs::write(app.join("src/Main.java"), "class Main {}").unwrap();

    populate_build_root(&root.join("build"));

    tmp
}

fn populate_build_root(build_root: &Path) {
    fs::create_dir_all(build_root.join("app/outputs")).unwrap();
    fs::create_dir_all(build_root.join("lib/classes")).unwrap();
    fs::write(build_root.join("app/outputs/app.apk"), "x".repeat(50000)).unwrap();
    fs::write(build_root.join("lib/classes/Lib.class"), "x".repeat(20000)).unwrap();
}

#[test]
fn clean_removes_build_root() {
    let tmp = create_test_workspace();
    let build_root = tmp.path().join("build");

    outroute()
        .args(["--root"])
        .arg(&build_root)
        .args(["clean", "--force"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    assert!(!build_root.exists());
    // Sources remain untouched
    assert!(tmp.path().join("app/src/Main.java").exists());
}

#[test]
fn clean_reports_freed_size() {
    let tmp = create_test_workspace();

    outroute()
        .args(["--root"])
        .arg(tmp.path().join("build"))
        .args(["clean", "--force"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("KiB"));
}

#[test]
fn clean_twice_is_idempotent() {
    let tmp = create_test_workspace();
    let build_root = tmp.path().join("build");

    outroute()
        .args(["--root"])
        .arg(&build_root)
        .args(["clean", "--force"])
        .arg(tmp.path())
        .assert()
        .success();

    outroute()
        .args(["--root"])
        .arg(&build_root)
        .args(["clean", "--force"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to clean"));
}

#[test]
fn clean_missing_root_succeeds() {
    let tmp = TempDir::new().unwrap();

    outroute()
        .args(["--root"])
        .arg(tmp.path().join("never-created"))
        .args(["clean", "--force"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to clean"));
}

#[test]
fn dry_run_preserves_build_root() {
    let tmp = create_test_workspace();
    let build_root = tmp.path().join("build");

    outroute()
        .args(["--root"])
        .arg(&build_root)
        .args(["clean", "--dry-run"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN]"));

    assert!(build_root.join("app/outputs/app.apk").exists());
}

#[test]
fn clean_uses_build_root_from_config() {
    let tmp = create_test_workspace();
    let build_root = tmp.path().join("build");
    let config = tmp.path().join("config.toml");
    fs::write(
        &config,
        format!("[router]\nbuild_root = \"{}\"\n", build_root.display()),
    )
    .unwrap();

    outroute()
        .args(["--config"])
        .arg(&config)
        .args(["clean", "--force"])
        .arg(tmp.path())
        .assert()
        .success();

    assert!(!build_root.exists());
}

#[test]
fn default_offset_cleans_sibling_build_dir() {
    // The default root offset places the shared build directory beside
    // the project root.
    let tmp = TempDir::new().unwrap();
    let project = tmp.path().join("proj");
    fs::create_dir_all(&project).unwrap();
    populate_build_root(&tmp.path().join("build"));

    outroute()
        .args(["clean", "--force"])
        .arg(&project)
        .assert()
        .success();

    assert!(!tmp.path().join("build").exists());
    assert!(project.exists());
}
