//! Command dispatch and handler modules.

mod build;
mod check;
mod deps;

use std::path::PathBuf;

use depmodel_core::descriptor::DESCRIPTOR_FILE;
use depmodel_util::errors::DepModelError;
use depmodel_util::fs::find_ancestor_file;
use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build {
            descriptor,
            extension_properties,
            format,
            output,
            compact,
        } => build::exec(
            descriptor,
            extension_properties,
            format.as_deref(),
            output,
            compact,
        ),
        Command::Deps {
            descriptor,
            extension_properties,
            view,
            flags,
        } => deps::exec(descriptor, extension_properties, &view, flags),
        Command::CheckProperties { files } => check::exec(&files),
    }
}

/// Use the explicit descriptor, or search upward from the working directory.
fn locate_descriptor(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let cwd = std::env::current_dir().map_err(DepModelError::Io)?;
    let found = find_ancestor_file(&cwd, DESCRIPTOR_FILE);
    if let Some(path) = &found {
        tracing::debug!("Using descriptor {}", path.display());
    }
    found.ok_or_else(|| {
        DepModelError::Descriptor {
            message: format!(
                "Could not find {DESCRIPTOR_FILE} in this directory or any parent"
            ),
        }
        .into()
    })
}
