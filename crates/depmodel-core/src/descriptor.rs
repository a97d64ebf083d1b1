//! The `depmodel.toml` descriptor: builder input written by hand or by a
//! resolver.

use std::collections::BTreeMap;
use std::path::Path;

use depmodel_util::errors::DepModelError;
use serde::{Deserialize, Serialize};

use crate::artifact::{Artifact, ArtifactKey};
use crate::capability::CapabilityContract;
use crate::dependency::ResolvedDependency;
use crate::platform::PlatformImports;

/// Default descriptor file name looked up from the working directory.
pub const DESCRIPTOR_FILE: &str = "depmodel.toml";

/// The parsed representation of a `depmodel.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelDescriptor {
    #[serde(default)]
    pub app: Option<Artifact>,

    #[serde(default)]
    pub dependencies: Vec<ResolvedDependency>,

    #[serde(default)]
    pub classification: Classification,

    #[serde(default)]
    pub capabilities: BTreeMap<String, CapabilityContract>,

    #[serde(default)]
    pub platform: Option<PlatformImports>,
}

/// Classification lists from the `[classification]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Classification {
    #[serde(default)]
    pub parent_first: Vec<ArtifactKey>,
    #[serde(default)]
    pub runner_parent_first: Vec<ArtifactKey>,
    #[serde(default)]
    pub excluded: Vec<ArtifactKey>,
    #[serde(default)]
    pub lesser_priority: Vec<ArtifactKey>,
    #[serde(default)]
    pub local_project: Vec<ArtifactKey>,
}

impl ModelDescriptor {
    /// Load and parse a descriptor from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DepModelError::Descriptor {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse(&content).map_err(Into::into)
    }

    /// Parse a descriptor from TOML text.
    pub fn parse(content: &str) -> Result<Self, DepModelError> {
        toml::from_str(content).map_err(|e| DepModelError::Descriptor {
            message: e.to_string(),
        })
    }
}
