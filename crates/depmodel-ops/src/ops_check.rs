//! Operation: validate extension properties files without building a model.

use std::path::Path;

use depmodel_builder::DependencyModelBuilder;
use depmodel_core::properties::{has_classification_keys, load_properties};

use crate::extension_name;

/// Outcome of checking one properties file.
#[derive(Debug)]
pub enum CheckResult {
    /// All classification lists parsed.
    Valid,
    /// The file has none of the recognized keys.
    NoClassification,
    /// At least one coordinate is malformed.
    Invalid(String),
}

/// Parse the classification lists of `path` into a scratch builder.
///
/// Unreadable files are errors; malformed coordinates are reported in the
/// result so that several files can be checked in one pass.
pub fn check_properties(path: &Path) -> miette::Result<CheckResult> {
    let properties = load_properties(path)?;
    if !has_classification_keys(&properties) {
        return Ok(CheckResult::NoClassification);
    }
    let mut scratch = DependencyModelBuilder::new();
    match scratch.parse_classification_properties(&properties, &extension_name(path)) {
        Ok(()) => Ok(CheckResult::Valid),
        Err(e) => Ok(CheckResult::Invalid(e.to_string())),
    }
}
