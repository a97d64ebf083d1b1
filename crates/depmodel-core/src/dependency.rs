use serde::{Deserialize, Serialize};

use crate::artifact::{Artifact, ArtifactKey};

/// Maven-compatible dependency scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyScope {
    #[default]
    Compile,
    Runtime,
    Provided,
    Test,
}

/// A resolved dependency of the application.
///
/// `runtime_cp` decides which classpath the artifact lands on: `true` for the
/// application runtime, `false` for the build/deployment classpath only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResolvedDependency {
    #[serde(flatten)]
    pub artifact: Artifact,
    #[serde(default)]
    pub scope: DependencyScope,
    #[serde(default)]
    pub runtime_cp: bool,
    #[serde(default)]
    pub optional: bool,
}

impl ResolvedDependency {
    /// A compile-scoped, non-optional dependency.
    pub fn new(artifact: Artifact, runtime_cp: bool) -> Self {
        Self {
            artifact,
            scope: DependencyScope::default(),
            runtime_cp,
            optional: false,
        }
    }

    /// Runtime classpath dependency.
    pub fn runtime(artifact: Artifact) -> Self {
        Self::new(artifact, true)
    }

    /// Build/deployment classpath only.
    pub fn deployment(artifact: Artifact) -> Self {
        Self::new(artifact, false)
    }

    pub fn with_scope(mut self, scope: DependencyScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn key(&self) -> ArtifactKey {
        self.artifact.key()
    }

    pub fn is_runtime_cp(&self) -> bool {
        self.runtime_cp
    }
}

impl std::fmt::Display for ResolvedDependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scope = match self.scope {
            DependencyScope::Compile => "compile",
            DependencyScope::Runtime => "runtime",
            DependencyScope::Provided => "provided",
            DependencyScope::Test => "test",
        };
        if self.optional {
            write!(f, "{} ({scope}, optional)", self.artifact)
        } else {
            write!(f, "{} ({scope})", self.artifact)
        }
    }
}
