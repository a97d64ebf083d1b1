//! Operation: assemble a dependency model from a descriptor and extension
//! properties, and render it.

use std::path::{Path, PathBuf};

use depmodel_builder::{DependencyModel, DependencyModelBuilder};
use depmodel_core::config::{GlobalConfig, OutputFormat};
use depmodel_core::descriptor::ModelDescriptor;
use depmodel_core::properties::load_properties;
use depmodel_util::errors::DepModelError;

use crate::extension_name;

/// Inputs for [`load_model`].
#[derive(Debug, Default)]
pub struct LoadOptions {
    pub descriptor: PathBuf,
    /// Properties files applied after those from the global config.
    pub extension_properties: Vec<PathBuf>,
}

/// Populate a builder from a parsed descriptor.
pub fn apply_descriptor(builder: &mut DependencyModelBuilder, descriptor: ModelDescriptor) {
    if let Some(app) = descriptor.app {
        builder.set_root_artifact(app);
    }
    if let Some(platform) = descriptor.platform.filter(|p| !p.is_empty()) {
        builder.set_platform_imports(platform);
    }
    let classification = descriptor.classification;
    builder
        .add_dependencies(descriptor.dependencies)
        .add_parent_first_artifacts(classification.parent_first)
        .add_runner_parent_first_artifacts(classification.runner_parent_first)
        .add_excluded_artifacts(classification.excluded)
        .add_lesser_priority_artifacts(classification.lesser_priority)
        .add_local_project_artifacts(classification.local_project)
        .set_capability_contracts(descriptor.capabilities);
}

/// Merge one extension properties file into the builder.
pub fn apply_properties_file(
    builder: &mut DependencyModelBuilder,
    path: &Path,
) -> miette::Result<()> {
    let properties = load_properties(path)?;
    let extension = extension_name(path);
    tracing::info!("Applying extension properties from {}", path.display());
    builder
        .parse_classification_properties(&properties, &extension)
        .map_err(|e| {
            tracing::warn!("Invalid classification in {}: {e}", path.display());
            e.into()
        })
}

/// Build a model from the descriptor plus configured and explicit extension
/// properties. A root artifact is required.
pub fn load_model(
    opts: &LoadOptions,
    config: &GlobalConfig,
) -> miette::Result<DependencyModel> {
    let descriptor = ModelDescriptor::from_path(&opts.descriptor)?;
    tracing::info!(
        "Loaded descriptor {} ({} dependencies)",
        opts.descriptor.display(),
        descriptor.dependencies.len()
    );

    let mut builder = DependencyModelBuilder::new();
    apply_descriptor(&mut builder, descriptor);

    for path in config
        .extensions
        .properties
        .iter()
        .chain(opts.extension_properties.iter())
    {
        apply_properties_file(&mut builder, path)?;
    }

    if builder.root_artifact().is_none() {
        return Err(DepModelError::MissingRootArtifact.into());
    }
    Ok(builder.build())
}

/// Render a model in the requested format.
pub fn render(
    model: &DependencyModel,
    format: OutputFormat,
    pretty: bool,
) -> miette::Result<String> {
    let rendered = match (format, pretty) {
        (OutputFormat::Json, true) => {
            serde_json::to_string_pretty(model).map_err(|e| e.to_string())
        }
        (OutputFormat::Json, false) => serde_json::to_string(model).map_err(|e| e.to_string()),
        (OutputFormat::Toml, true) => toml::to_string_pretty(model).map_err(|e| e.to_string()),
        (OutputFormat::Toml, false) => toml::to_string(model).map_err(|e| e.to_string()),
    };
    rendered.map_err(|message| {
        DepModelError::Generic {
            message: format!("Failed to render model: {message}"),
        }
        .into()
    })
}
