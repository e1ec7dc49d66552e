use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn install_root(temp: &TempDir, versions: &[&str]) -> PathBuf {
    let root = temp.path().join("go");
    for version in versions {
        fs::create_dir_all(root.join(format!("go{version}")).join("bin")).unwrap();
    }
    fs::create_dir_all(&root).unwrap();
    root
}

fn vgo(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vgo").unwrap();
    cmd.env("VGO_ROOT", root)
        .env("NO_COLOR", "1")
        .env("PATH", root.join("active/bin"))
        .env_remove("VGO_LOG");
    cmd
}

#[test]
fn test_set_then_missing_version() {
    let temp = TempDir::new().unwrap();
    let root = install_root(&temp, &["1.20", "1.21"]);
    let link = root.join("active");

    vgo(&root)
        .args(["set", "1.21"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active go version: 1.21"));
    assert_eq!(fs::read_link(&link).unwrap(), root.join("go1.21"));

    vgo(&root)
        .args(["set", "1.22"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "unknown go version: 1.22. List of available versions are: 1.20/1.21",
        ));
    assert_eq!(fs::read_link(&link).unwrap(), root.join("go1.21"));
}

#[test]
fn test_set_listed_but_unprefixed_leaves_no_link() {
    let temp = TempDir::new().unwrap();
    let root = install_root(&temp, &["1.21"]);
    fs::create_dir(root.join("1.22")).unwrap();

    vgo(&root).args(["set", "1.21"]).assert().success();

    vgo(&root)
        .args(["set", "1.22"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("go path not found"));
    assert!(fs::symlink_metadata(root.join("active")).is_err());
}

#[test]
fn test_set_warns_when_not_on_path() {
    let temp = TempDir::new().unwrap();
    let root = install_root(&temp, &["1.21"]);

    vgo(&root)
        .env("PATH", "/usr/bin:/bin")
        .args(["set", "1.21"])
        .assert()
        .success()
        .stdout(predicate::str::contains("go path is not set in PATH"))
        .stdout(predicate::str::contains("export PATH=\"${PATH}:${GO_BIN}\""));
}

#[test]
fn test_set_quiet_when_on_path() {
    let temp = TempDir::new().unwrap();
    let root = install_root(&temp, &["1.21"]);

    vgo(&root)
        .args(["set", "1.21"])
        .assert()
        .success()
        .stdout(predicate::str::contains("go path is not set").not());
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();
    let root = install_root(&temp, &["1.20", "1.21"]);
    std::os::unix::fs::symlink(root.join("go1.20"), root.join("active")).unwrap();

    let output = vgo(&root).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["version"], "1.20");
    assert_eq!(rows[0]["active"], true);
    assert_eq!(rows[1]["active"], false);
}

#[test]
fn test_list_missing_root_fails() {
    let temp = TempDir::new().unwrap();

    vgo(&temp.path().join("missing"))
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unable to list versions"));
}

#[test]
fn test_current_reports_active() {
    let temp = TempDir::new().unwrap();
    let root = install_root(&temp, &["1.21"]);

    vgo(&root)
        .arg("current")
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));

    vgo(&root).args(["set", "1.21"]).assert().success();

    vgo(&root)
        .arg("current")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.21"));
}

#[test]
fn test_delete_active_is_refused() {
    let temp = TempDir::new().unwrap();
    let root = install_root(&temp, &["1.20", "1.21"]);
    vgo(&root).args(["set", "1.21"]).assert().success();

    vgo(&root)
        .args(["delete", "1.21", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("delete active version"));
    assert!(root.join("go1.21").exists());

    vgo(&root).args(["delete", "1.20", "--yes"]).assert().success();
    assert!(!root.join("go1.20").exists());
}

#[test]
fn test_completions() {
    let temp = TempDir::new().unwrap();
    let root = install_root(&temp, &[]);

    vgo(&root)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vgo"));
}

#[test]
fn test_current_reports_dangling_link() {
    let temp = TempDir::new().unwrap();
    let root = install_root(&temp, &["1.21"]);
    std::os::unix::fs::symlink(root.join("go1.19"), root.join("active")).unwrap();

    vgo(&root)
        .arg("current")
        .assert()
        .success()
        .stdout(predicate::str::contains("broken symlink"))
        .stdout(predicate::str::contains("go1.19"))
        .stdout(predicate::str::contains("set <version>"));
}

#[test]
fn test_check_healthy_layout() {
    let temp = TempDir::new().unwrap();
    let root = install_root(&temp, &["1.20", "1.21"]);
    vgo(&root).args(["set", "1.21"]).assert().success();

    vgo(&root)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Active version 1.21"))
        .stdout(predicate::str::contains("Found 2 versions: 1.20, 1.21"))
        .stdout(predicate::str::contains("PATH contains"))
        .stdout(predicate::str::contains("Issues detected!").not());
}

#[test]
fn test_check_broken_layout_is_advisory() {
    let temp = TempDir::new().unwrap();
    let root = install_root(&temp, &["1.21"]);
    std::os::unix::fs::symlink(root.join("go1.19"), root.join("active")).unwrap();

    vgo(&root)
        .env("PATH", "/usr/bin:/bin")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("BROKEN symlink pointing to"))
        .stdout(predicate::str::contains("go path is not set in PATH"))
        .stdout(predicate::str::contains("Issues detected!"));
}

#[test]
fn test_check_missing_root_is_advisory() {
    let temp = TempDir::new().unwrap();

    vgo(&temp.path().join("missing"))
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Root directory missing"))
        .stdout(predicate::str::contains("unable to list versions"));
}

#[test]
fn test_delete_unprefixed_entry() {
    let temp = TempDir::new().unwrap();
    let root = install_root(&temp, &[]);
    fs::create_dir(root.join("1.22")).unwrap();

    vgo(&root).args(["delete", "1.22", "--yes"]).assert().success();
    assert!(!root.join("1.22").exists());
}
