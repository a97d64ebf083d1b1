//! The frozen dependency model.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use depmodel_core::artifact::{Artifact, ArtifactKey};
use depmodel_core::capability::CapabilityContract;
use depmodel_core::dependency::ResolvedDependency;
use depmodel_core::platform::PlatformImports;
use serde::Serialize;

/// An immutable snapshot of an application's dependencies.
///
/// Produced by [`crate::DependencyModelBuilder::build`]. Every container is
/// owned by the model, so later builder mutations never show up here, and
/// the model can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DependencyModel {
    pub(crate) parent_first_artifacts: BTreeSet<ArtifactKey>,
    pub(crate) runner_parent_first_artifacts: BTreeSet<ArtifactKey>,
    pub(crate) lesser_priority_artifacts: BTreeSet<ArtifactKey>,
    pub(crate) local_project_artifacts: BTreeSet<ArtifactKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) app_artifact: Option<Artifact>,
    pub(crate) dependencies: Vec<ResolvedDependency>,
    pub(crate) capability_contracts: BTreeMap<String, CapabilityContract>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) platform_imports: Option<PlatformImports>,
}

impl DependencyModel {
    /// The artifact this model describes, if one was set on the builder.
    pub fn app_artifact(&self) -> Option<&Artifact> {
        self.app_artifact.as_ref()
    }

    /// Every accepted dependency, in insertion order.
    pub fn dependencies(&self) -> &[ResolvedDependency] {
        &self.dependencies
    }

    /// Dependencies on the application runtime classpath.
    pub fn runtime_dependencies(&self) -> Vec<&ResolvedDependency> {
        self.dependencies.iter().filter(|d| d.is_runtime_cp()).collect()
    }

    /// Dependencies only needed on the build/deployment classpath.
    pub fn deployment_dependencies(&self) -> Vec<&ResolvedDependency> {
        self.dependencies.iter().filter(|d| !d.is_runtime_cp()).collect()
    }

    pub fn dependency(&self, key: &ArtifactKey) -> Option<&ResolvedDependency> {
        self.dependencies.iter().find(|d| d.key() == *key)
    }

    pub fn parent_first_artifacts(&self) -> &BTreeSet<ArtifactKey> {
        &self.parent_first_artifacts
    }

    /// Artifacts loaded parent-first by the production runner class loader.
    pub fn runner_parent_first_artifacts(&self) -> &BTreeSet<ArtifactKey> {
        &self.runner_parent_first_artifacts
    }

    pub fn lesser_priority_artifacts(&self) -> &BTreeSet<ArtifactKey> {
        &self.lesser_priority_artifacts
    }

    /// Artifacts built from the local project, reloadable in dev mode.
    pub fn local_project_artifacts(&self) -> &BTreeSet<ArtifactKey> {
        &self.local_project_artifacts
    }

    pub fn is_parent_first(&self, key: &ArtifactKey) -> bool {
        self.parent_first_artifacts.contains(key)
    }

    pub fn is_runner_parent_first(&self, key: &ArtifactKey) -> bool {
        self.runner_parent_first_artifacts.contains(key)
    }

    pub fn is_lesser_priority(&self, key: &ArtifactKey) -> bool {
        self.lesser_priority_artifacts.contains(key)
    }

    pub fn is_local_project(&self, key: &ArtifactKey) -> bool {
        self.local_project_artifacts.contains(key)
    }

    pub fn capability_contracts(&self) -> &BTreeMap<String, CapabilityContract> {
        &self.capability_contracts
    }

    /// The contracts alone, ordered by capability name.
    pub fn extension_capabilities(&self) -> Vec<&CapabilityContract> {
        self.capability_contracts.values().collect()
    }

    pub fn platform_imports(&self) -> Option<&PlatformImports> {
        self.platform_imports.as_ref()
    }

    /// Platform properties, empty when no platform was imported.
    pub fn platform_properties(&self) -> BTreeMap<String, String> {
        self.platform_imports
            .as_ref()
            .map(|p| p.properties.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

impl fmt::Display for DependencyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.app_artifact {
            Some(app) => writeln!(f, "{app}")?,
            None => writeln!(f, "<no root artifact>")?,
        }
        writeln!(
            f,
            "  dependencies: {} ({} runtime, {} deployment)",
            self.dependencies.len(),
            self.runtime_dependencies().len(),
            self.deployment_dependencies().len()
        )?;
        writeln!(
            f,
            "  parent-first: {}, runner-parent-first: {}",
            self.parent_first_artifacts.len(),
            self.runner_parent_first_artifacts.len()
        )?;
        writeln!(
            f,
            "  lesser-priority: {}, local-project: {}",
            self.lesser_priority_artifacts.len(),
            self.local_project_artifacts.len()
        )?;
        write!(f, "  capabilities: {}", self.capability_contracts.len())
    }
}
