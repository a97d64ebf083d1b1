//! Exclusion predicate applied when a model is frozen.

use std::collections::HashSet;

use depmodel_core::artifact::ArtifactKey;
use depmodel_core::dependency::ResolvedDependency;

/// Group of the IDE launcher artifact.
pub const LAUNCHER_GROUP_ID: &str = "io.quarkus";
/// Artifact id of the IDE launcher artifact.
pub const LAUNCHER_ARTIFACT_ID: &str = "quarkus-ide-launcher";

/// The IDE launcher never appears in a built model, whatever its
/// classifier or type.
pub fn is_launcher(key: &ArtifactKey) -> bool {
    key.group_id == LAUNCHER_GROUP_ID && key.artifact_id == LAUNCHER_ARTIFACT_ID
}

/// Whether `dep` survives into the built model.
pub fn is_accepted(dep: &ResolvedDependency, excluded: &HashSet<ArtifactKey>) -> bool {
    let key = dep.key();
    !is_launcher(&key) && !excluded.contains(&key)
}

/// Apply the exclusion predicate, keeping the input order.
pub fn filter_dependencies<'a, I>(
    deps: I,
    excluded: &HashSet<ArtifactKey>,
) -> Vec<ResolvedDependency>
where
    I: IntoIterator<Item = &'a ResolvedDependency>,
{
    deps.into_iter()
        .filter(|dep| {
            let accepted = is_accepted(dep, excluded);
            if !accepted {
                tracing::trace!("Dropping {} from the model", dep.artifact);
            }
            accepted
        })
        .cloned()
        .collect()
}
