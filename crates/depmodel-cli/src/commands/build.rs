//! Handler for `depmodel build`.

use std::path::PathBuf;

use depmodel_core::config::{GlobalConfig, OutputFormat};
use depmodel_ops::ops_build::{self, LoadOptions};
use depmodel_util::errors::DepModelError;
use depmodel_util::fs::write_with_parents;
use miette::Result;

use super::locate_descriptor;

pub fn exec(
    descriptor: Option<PathBuf>,
    extension_properties: Vec<PathBuf>,
    format: Option<&str>,
    output: Option<PathBuf>,
    compact: bool,
) -> Result<()> {
    let config = GlobalConfig::load()?;
    let opts = LoadOptions {
        descriptor: locate_descriptor(descriptor)?,
        extension_properties,
    };
    let model = ops_build::load_model(&opts, &config)?;

    let format = match format {
        Some(f) => f.parse::<OutputFormat>()?,
        None => config.output.format,
    };
    let pretty = config.output.pretty && !compact;
    let mut rendered = ops_build::render(&model, format, pretty)?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    match output {
        Some(path) => {
            write_with_parents(&path, &rendered).map_err(DepModelError::Io)?;
            eprintln!("Wrote dependency model to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
