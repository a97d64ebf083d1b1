use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn depmodel_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("depmodel").unwrap();
    cmd.env("DEPMODEL_HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_check_properties_valid_and_skipped() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("good.properties"),
        "parent-first-artifacts=g:a,g:b\n",
    )
    .unwrap();
    fs::write(tmp.path().join("plain.properties"), "name=ext\n").unwrap();

    depmodel_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["check-properties", "good.properties", "plain.properties"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok       good.properties"))
        .stdout(predicate::str::contains(
            "skipped  plain.properties (no classification keys)",
        ));
}

#[test]
fn test_check_properties_reports_all_invalid_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.properties"), "excluded-artifacts=bogus\n").unwrap();
    fs::write(
        tmp.path().join("b.properties"),
        "lesser-priority-artifacts=g:a:b:c:d\n",
    )
    .unwrap();

    depmodel_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["check-properties", "a.properties", "b.properties"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid  a.properties"))
        .stdout(predicate::str::contains("invalid  b.properties"))
        .stderr(predicate::str::contains("2 properties file(s) failed validation"));
}

#[test]
fn test_check_properties_requires_files() {
    let tmp = TempDir::new().unwrap();

    depmodel_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["check-properties"])
        .assert()
        .failure();
}
