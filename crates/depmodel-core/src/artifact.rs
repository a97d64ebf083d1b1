//! Artifact identity and coordinates.

use std::fmt;
use std::str::FromStr;

use depmodel_util::errors::DepModelError;
use serde::{Deserialize, Serialize};

use crate::DEFAULT_TYPE;

/// Identity of an artifact independent of its version.
///
/// Two dependencies with the same key are the same logical artifact. Keys
/// serialize as their coordinate string (`group:artifact:classifier:type`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArtifactKey {
    pub group_id: String,
    pub artifact_id: String,
    pub classifier: String,
    pub artifact_type: String,
}

impl ArtifactKey {
    /// Key with an empty classifier and the default `jar` type.
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            classifier: String::new(),
            artifact_type: DEFAULT_TYPE.to_string(),
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = classifier.into();
        self
    }

    pub fn with_type(mut self, artifact_type: impl Into<String>) -> Self {
        self.artifact_type = normalize_type(&artifact_type.into());
        self
    }

    /// Parse `group:artifact[:classifier[:type]]`.
    ///
    /// Missing classifier defaults to empty and missing type to `jar`. Any
    /// other segment count, or an empty group or artifact, is rejected.
    pub fn parse(s: &str) -> Result<Self, DepModelError> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(':').collect();
        let malformed = || DepModelError::MalformedCoordinate {
            coordinate: trimmed.to_string(),
            segments: parts.len(),
        };
        if !(2..=4).contains(&parts.len()) || parts[0].is_empty() || parts[1].is_empty() {
            return Err(malformed());
        }
        let mut key = Self::new(parts[0], parts[1]);
        if let Some(classifier) = parts.get(2) {
            key.classifier = classifier.to_string();
        }
        if let Some(artifact_type) = parts.get(3).filter(|t| !t.is_empty()) {
            key.artifact_type = artifact_type.to_string();
        }
        Ok(key)
    }
}

impl FromStr for ArtifactKey {
    type Err = DepModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ArtifactKey {
    type Error = DepModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ArtifactKey> for String {
    fn from(key: ArtifactKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.classifier, self.artifact_type
        )
    }
}

/// Parse a comma-separated list of coordinates into keys.
///
/// Blank entries (e.g. from a trailing comma) are skipped. The first
/// malformed entry aborts the whole list.
pub fn parse_key_list(list: &str) -> Result<Vec<ArtifactKey>, DepModelError> {
    list.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(ArtifactKey::parse)
        .collect()
}

/// A versioned artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(rename = "group")]
    pub group_id: String,
    #[serde(rename = "artifact")]
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub classifier: String,
    #[serde(
        default = "default_type",
        rename = "type",
        deserialize_with = "deserialize_type"
    )]
    pub artifact_type: String,
    pub version: String,
}

fn default_type() -> String {
    DEFAULT_TYPE.to_string()
}

/// An empty type means `jar`, the same as an omitted one.
fn normalize_type(artifact_type: &str) -> String {
    if artifact_type.trim().is_empty() {
        default_type()
    } else {
        artifact_type.to_string()
    }
}

fn deserialize_type<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_type(&raw))
}

impl Artifact {
    /// A `jar` artifact with no classifier.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            classifier: String::new(),
            artifact_type: default_type(),
            version: version.into(),
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = classifier.into();
        self
    }

    pub fn with_type(mut self, artifact_type: impl Into<String>) -> Self {
        self.artifact_type = artifact_type.into();
        self
    }

    pub fn key(&self) -> ArtifactKey {
        ArtifactKey {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            classifier: self.classifier.clone(),
            artifact_type: normalize_type(&self.artifact_type),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.classifier, self.artifact_type, self.version
        )
    }
}
