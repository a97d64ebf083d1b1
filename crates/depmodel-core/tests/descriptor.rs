use depmodel_core::artifact::ArtifactKey;
use depmodel_core::dependency::DependencyScope;
use depmodel_core::descriptor::ModelDescriptor;
use std::io::Write;
use tempfile::NamedTempFile;

const FULL: &str = r#"
[app]
group = "org.acme"
artifact = "app"
version = "1.0.0"

[[dependencies]]
group = "org.acme"
artifact = "lib"
version = "1.0.0"
runtime-cp = true

[[dependencies]]
group = "org.acme"
artifact = "lib-deployment"
version = "1.0.0"
scope = "provided"
optional = true

[classification]
parent-first = ["org.slf4j:slf4j-api"]
excluded = ["org.acme:unwanted::jar"]
local-project = ["org.acme:app"]

[capabilities.rest]
extension = "org.acme:rest-ext"
provides = ["rest", "rest.json"]

[platform]
boms = [{ group = "org.acme", artifact = "bom", type = "pom", version = "1" }]
properties = { "platform.release" = "1" }
"#;

#[test]
fn parse_full_descriptor() {
    let desc = ModelDescriptor::parse(FULL).unwrap();
    let app = desc.app.unwrap();
    assert_eq!(app.artifact_id, "app");
    assert_eq!(app.artifact_type, "jar");

    assert_eq!(desc.dependencies.len(), 2);
    assert!(desc.dependencies[0].runtime_cp);
    assert_eq!(desc.dependencies[0].scope, DependencyScope::Compile);
    assert!(!desc.dependencies[1].runtime_cp);
    assert!(desc.dependencies[1].optional);
    assert_eq!(desc.dependencies[1].scope, DependencyScope::Provided);

    assert_eq!(
        desc.classification.parent_first,
        vec![ArtifactKey::new("org.slf4j", "slf4j-api")]
    );
    assert_eq!(
        desc.classification.excluded,
        vec![ArtifactKey::new("org.acme", "unwanted")]
    );
    assert_eq!(desc.classification.local_project.len(), 1);
    assert!(desc.classification.lesser_priority.is_empty());

    let rest = &desc.capabilities["rest"];
    assert_eq!(rest.extension, "org.acme:rest-ext");
    assert!(rest.provides("rest.json"));

    let platform = desc.platform.unwrap();
    assert_eq!(platform.boms[0].artifact_type, "pom");
    assert_eq!(
        platform.properties.get("platform.release").map(String::as_str),
        Some("1")
    );
}

#[test]
fn parse_empty_descriptor() {
    let desc = ModelDescriptor::parse("").unwrap();
    assert!(desc.app.is_none());
    assert!(desc.dependencies.is_empty());
    assert!(desc.capabilities.is_empty());
    assert!(desc.platform.is_none());
}

#[test]
fn malformed_classification_key_is_descriptor_error() {
    let err = ModelDescriptor::parse("[classification]\nexcluded = [\"bogus\"]\n").unwrap_err();
    assert!(err.to_string().starts_with("Descriptor error"), "got: {err}");
}

#[test]
fn from_path_reads_file() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(FULL.as_bytes()).unwrap();
    tmp.flush().unwrap();
    let desc = ModelDescriptor::from_path(tmp.path()).unwrap();
    assert_eq!(desc.dependencies.len(), 2);
}

#[test]
fn from_path_missing_file_is_error() {
    let path = std::path::Path::new("/nonexistent/depmodel.toml");
    assert!(ModelDescriptor::from_path(path).is_err());
}
