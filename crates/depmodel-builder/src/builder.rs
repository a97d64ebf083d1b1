//! Accumulates dependency and classification data into a [`DependencyModel`].

use std::collections::{BTreeMap, HashMap, HashSet};

use depmodel_core::artifact::{parse_key_list, Artifact, ArtifactKey};
use depmodel_core::capability::CapabilityContract;
use depmodel_core::dependency::ResolvedDependency;
use depmodel_core::platform::PlatformImports;
use depmodel_core::properties::{
    EXCLUDED_ARTIFACTS, LESSER_PRIORITY_ARTIFACTS, PARENT_FIRST_ARTIFACTS,
    RUNNER_PARENT_FIRST_ARTIFACTS,
};
use depmodel_util::errors::DepModelError;

use crate::filter;
use crate::model::DependencyModel;

/// Which classification set a property key feeds.
#[derive(Debug, Clone, Copy)]
enum Classification {
    ParentFirst,
    RunnerParentFirst,
    Excluded,
    LesserPriority,
}

const PROPERTY_CLASSIFICATIONS: [(&str, Classification); 4] = [
    (PARENT_FIRST_ARTIFACTS, Classification::ParentFirst),
    (RUNNER_PARENT_FIRST_ARTIFACTS, Classification::RunnerParentFirst),
    (EXCLUDED_ARTIFACTS, Classification::Excluded),
    (LESSER_PRIORITY_ARTIFACTS, Classification::LesserPriority),
];

/// Mutable accumulator for a [`DependencyModel`].
///
/// Dependencies are keyed by [`ArtifactKey`]: adding a dependency whose key is
/// already present replaces the earlier entry in place, so insertion order
/// reflects the first time a key was seen and the value the last time.
/// Excluded artifacts are only consulted when the model is built.
///
/// The builder is not internally synchronized; contributors running in
/// parallel must serialize their calls. [`build`](Self::build) may be called
/// more than once and each call returns an independent snapshot, though a
/// single call at the end of population is the normal pattern.
#[derive(Debug, Clone, Default)]
pub struct DependencyModelBuilder {
    app_artifact: Option<Artifact>,
    dependencies: Vec<ResolvedDependency>,
    /// Position of each key in `dependencies`.
    index: HashMap<ArtifactKey, usize>,
    parent_first_artifacts: HashSet<ArtifactKey>,
    runner_parent_first_artifacts: HashSet<ArtifactKey>,
    excluded_artifacts: HashSet<ArtifactKey>,
    lesser_priority_artifacts: HashSet<ArtifactKey>,
    local_project_artifacts: HashSet<ArtifactKey>,
    platform_imports: Option<PlatformImports>,
    capability_contracts: BTreeMap<String, CapabilityContract>,
}

impl DependencyModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_root_artifact(&mut self, artifact: Artifact) -> &mut Self {
        self.app_artifact = Some(artifact);
        self
    }

    pub fn root_artifact(&self) -> Option<&Artifact> {
        self.app_artifact.as_ref()
    }

    pub fn set_platform_imports(&mut self, imports: PlatformImports) -> &mut Self {
        self.platform_imports = Some(imports);
        self
    }

    /// Replace the capability mapping wholesale.
    pub fn set_capability_contracts(
        &mut self,
        contracts: BTreeMap<String, CapabilityContract>,
    ) -> &mut Self {
        self.capability_contracts = contracts;
        self
    }

    /// Insert a dependency, superseding any earlier one with the same key.
    pub fn add_dependency(&mut self, dep: ResolvedDependency) -> &mut Self {
        let key = dep.key();
        match self.index.get(&key) {
            Some(&pos) => {
                tracing::trace!(
                    "{} supersedes {}",
                    dep.artifact,
                    self.dependencies[pos].artifact
                );
                self.dependencies[pos] = dep;
            }
            None => {
                tracing::trace!("Adding {}", dep.artifact);
                self.index.insert(key, self.dependencies.len());
                self.dependencies.push(dep);
            }
        }
        self
    }

    pub fn add_dependencies<I>(&mut self, deps: I) -> &mut Self
    where
        I: IntoIterator<Item = ResolvedDependency>,
    {
        for dep in deps {
            self.add_dependency(dep);
        }
        self
    }

    /// The dependency currently recorded for `key`, before any filtering.
    pub fn dependency(&self, key: &ArtifactKey) -> Option<&ResolvedDependency> {
        self.index.get(key).map(|&pos| &self.dependencies[pos])
    }

    pub fn add_parent_first_artifact(&mut self, key: ArtifactKey) -> &mut Self {
        self.parent_first_artifacts.insert(key);
        self
    }

    pub fn add_parent_first_artifacts<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = ArtifactKey>,
    {
        self.parent_first_artifacts.extend(keys);
        self
    }

    pub fn add_runner_parent_first_artifact(&mut self, key: ArtifactKey) -> &mut Self {
        self.runner_parent_first_artifacts.insert(key);
        self
    }

    pub fn add_runner_parent_first_artifacts<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = ArtifactKey>,
    {
        self.runner_parent_first_artifacts.extend(keys);
        self
    }

    pub fn add_excluded_artifact(&mut self, key: ArtifactKey) -> &mut Self {
        self.excluded_artifacts.insert(key);
        self
    }

    pub fn add_excluded_artifacts<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = ArtifactKey>,
    {
        self.excluded_artifacts.extend(keys);
        self
    }

    pub fn add_lesser_priority_artifact(&mut self, key: ArtifactKey) -> &mut Self {
        self.lesser_priority_artifacts.insert(key);
        self
    }

    pub fn add_lesser_priority_artifacts<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = ArtifactKey>,
    {
        self.lesser_priority_artifacts.extend(keys);
        self
    }

    pub fn add_local_project_artifact(&mut self, key: ArtifactKey) -> &mut Self {
        self.local_project_artifacts.insert(key);
        self
    }

    pub fn add_local_project_artifacts<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = ArtifactKey>,
    {
        self.local_project_artifacts.extend(keys);
        self
    }

    /// Merge the classification lists an extension declares in its
    /// properties.
    ///
    /// Each recognized key is parsed on its own and merged only if its whole
    /// list parses. A malformed coordinate does not stop the remaining keys
    /// from being merged; the first error encountered is returned.
    pub fn parse_classification_properties(
        &mut self,
        properties: &BTreeMap<String, String>,
        extension: &str,
    ) -> Result<(), DepModelError> {
        let mut first_error = None;
        for (property, classification) in PROPERTY_CLASSIFICATIONS {
            let Some(value) = properties.get(property) else {
                continue;
            };
            match parse_key_list(value) {
                Ok(keys) => self.classify(classification, keys, extension),
                Err(e) => {
                    tracing::debug!("Extension {extension} has an invalid {property}: {e}");
                    first_error.get_or_insert(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn classify(
        &mut self,
        classification: Classification,
        keys: Vec<ArtifactKey>,
        extension: &str,
    ) {
        match classification {
            Classification::ParentFirst => {
                self.add_parent_first_artifacts(keys);
            }
            Classification::RunnerParentFirst => {
                self.add_runner_parent_first_artifacts(keys);
            }
            Classification::Excluded => {
                for key in keys {
                    tracing::debug!("Extension {extension} is excluding {key}");
                    self.excluded_artifacts.insert(key);
                }
            }
            Classification::LesserPriority => {
                for key in keys {
                    tracing::debug!(
                        "Extension {extension} is making {key} a lesser priority artifact"
                    );
                    self.lesser_priority_artifacts.insert(key);
                }
            }
        }
    }

    /// Freeze the accumulated state into a new model.
    ///
    /// Drops the IDE launcher and every excluded artifact, keeping the order
    /// of the rest. The builder is left untouched.
    pub fn build(&self) -> DependencyModel {
        let dependencies =
            filter::filter_dependencies(&self.dependencies, &self.excluded_artifacts);
        let model = DependencyModel {
            parent_first_artifacts: self.parent_first_artifacts.iter().cloned().collect(),
            runner_parent_first_artifacts: self
                .runner_parent_first_artifacts
                .iter()
                .cloned()
                .collect(),
            lesser_priority_artifacts: self.lesser_priority_artifacts.iter().cloned().collect(),
            local_project_artifacts: self.local_project_artifacts.iter().cloned().collect(),
            app_artifact: self.app_artifact.clone(),
            dependencies,
            capability_contracts: self.capability_contracts.clone(),
            platform_imports: self.platform_imports.clone(),
        };
        tracing::debug!(
            "Created dependency model for {}: {} of {} dependencies accepted",
            model
                .app_artifact()
                .map(ToString::to_string)
                .unwrap_or_else(|| "<no root artifact>".to_string()),
            model.len(),
            self.dependencies.len()
        );
        model
    }
}
