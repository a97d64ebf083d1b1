use std::fs;

use depmodel_ops::ops_check::{check_properties, CheckResult};
use tempfile::TempDir;

#[test]
fn valid_properties() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("ext.properties");
    fs::write(&path, "parent-first-artifacts=g:a,g:b\n").unwrap();
    assert!(matches!(check_properties(&path).unwrap(), CheckResult::Valid));
}

#[test]
fn properties_without_classification() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("ext.properties");
    fs::write(&path, "name=ext\n").unwrap();
    assert!(matches!(
        check_properties(&path).unwrap(),
        CheckResult::NoClassification
    ));
}

#[test]
fn malformed_properties_reported() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("ext.properties");
    fs::write(&path, "excluded-artifacts=g:a,bogus\n").unwrap();
    match check_properties(&path).unwrap() {
        CheckResult::Invalid(message) => assert!(message.contains("bogus")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn unreadable_file_is_error() {
    let tmp = TempDir::new().unwrap();
    assert!(check_properties(&tmp.path().join("missing.properties")).is_err());
}

#[test]
fn whitespace_separated_properties_are_checked() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("ext.properties");
    fs::write(&path, "parent-first-artifacts g1:a1,g2:a2\n").unwrap();
    assert!(matches!(check_properties(&path).unwrap(), CheckResult::Valid));
}
