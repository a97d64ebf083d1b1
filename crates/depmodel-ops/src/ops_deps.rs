//! Operation: list the dependencies of a built model.

use depmodel_builder::DependencyModel;
use depmodel_core::dependency::ResolvedDependency;

/// Which slice of the accepted dependencies to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepsView {
    #[default]
    All,
    Runtime,
    Deployment,
}

impl std::str::FromStr for DepsView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "runtime" => Ok(Self::Runtime),
            "deployment" => Ok(Self::Deployment),
            other => Err(format!(
                "unknown view '{other}' (expected all, runtime, or deployment)"
            )),
        }
    }
}

/// One line per dependency, in model order.
///
/// With `flags`, each line is followed by the classification markers that
/// apply to it (`parent-first`, `runner-parent-first`, `lesser-priority`,
/// `local-project`).
pub fn list(model: &DependencyModel, view: DepsView, flags: bool) -> String {
    let deps: Vec<&ResolvedDependency> = match view {
        DepsView::All => model.dependencies().iter().collect(),
        DepsView::Runtime => model.runtime_dependencies(),
        DepsView::Deployment => model.deployment_dependencies(),
    };

    let mut output = String::new();
    for dep in deps {
        output.push_str(&dep.to_string());
        if flags {
            let markers = markers(model, dep);
            if !markers.is_empty() {
                output.push_str(&format!(" [{}]", markers.join(", ")));
            }
        }
        output.push('\n');
    }
    output
}

fn markers(model: &DependencyModel, dep: &ResolvedDependency) -> Vec<&'static str> {
    let key = dep.key();
    let mut markers = Vec::new();
    if model.is_parent_first(&key) {
        markers.push("parent-first");
    }
    if model.is_runner_parent_first(&key) {
        markers.push("runner-parent-first");
    }
    if model.is_lesser_priority(&key) {
        markers.push("lesser-priority");
    }
    if model.is_local_project(&key) {
        markers.push("local-project");
    }
    markers
}
