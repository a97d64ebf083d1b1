use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DESCRIPTOR: &str = r#"
[app]
group = "org.acme"
artifact = "app"
version = "1.0.0"

[[dependencies]]
group = "org.acme"
artifact = "rest"
version = "1.0.0"
runtime-cp = true

[[dependencies]]
group = "org.acme"
artifact = "rest-deployment"
version = "1.0.0"

[[dependencies]]
group = "io.quarkus"
artifact = "quarkus-ide-launcher"
version = "3.0.0"
runtime-cp = true
"#;

#[allow(deprecated)]
fn depmodel_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("depmodel").unwrap();
    cmd.env("DEPMODEL_HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("depmodel.toml"), DESCRIPTOR).unwrap();
    tmp
}

#[test]
fn test_build_prints_json_model() {
    let tmp = project();

    let output = depmodel_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["build"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let deps = value["dependencies"].as_array().unwrap();
    assert_eq!(deps.len(), 2);
    assert!(deps
        .iter()
        .all(|d| d["artifact"] != "quarkus-ide-launcher"));
    assert_eq!(value["app-artifact"]["group"], "org.acme");
}

#[test]
fn test_build_finds_descriptor_in_parent() {
    let tmp = project();
    let nested = tmp.path().join("src").join("main");
    fs::create_dir_all(&nested).unwrap();

    depmodel_cmd(&tmp)
        .current_dir(&nested)
        .args(["build", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rest-deployment\""));
}

#[test]
fn test_build_without_descriptor_fails() {
    let tmp = TempDir::new().unwrap();

    depmodel_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["build"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find depmodel.toml"));
}

#[test]
fn test_build_applies_extension_properties() {
    let tmp = project();
    fs::write(
        tmp.path().join("rest.properties"),
        "excluded-artifacts=org.acme:rest-deployment\nparent-first-artifacts=org.acme:rest\n",
    )
    .unwrap();

    depmodel_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["build", "--compact", "-e", "rest.properties"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rest-deployment").not())
        .stdout(predicate::str::contains(
            "\"parent-first-artifacts\":[\"org.acme:rest::jar\"]",
        ));
}

#[test]
fn test_build_malformed_properties_fails() {
    let tmp = project();
    fs::write(
        tmp.path().join("bad.properties"),
        "parent-first-artifacts=bogus\n",
    )
    .unwrap();

    depmodel_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["build", "-e", "bad.properties"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed artifact coordinate 'bogus'"));
}

#[test]
fn test_build_toml_to_file() {
    let tmp = project();
    let out = tmp.path().join("out").join("model.toml");

    depmodel_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["build", "--format", "toml", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote dependency model"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("rest-deployment"));
    assert!(!content.contains("quarkus-ide-launcher"));
}

#[test]
fn test_build_unknown_format_fails() {
    let tmp = project();

    depmodel_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["build", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format"));
}

#[test]
fn test_build_uses_configured_format() {
    let tmp = project();
    fs::write(
        tmp.path().join("config.toml"),
        "[output]\nformat = \"toml\"\n",
    )
    .unwrap();

    depmodel_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["build"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[[dependencies]]"));
}
