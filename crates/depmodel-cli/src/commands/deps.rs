//! Handler for `depmodel deps`.

use std::path::PathBuf;

use depmodel_core::config::GlobalConfig;
use depmodel_ops::ops_build::{self, LoadOptions};
use depmodel_ops::ops_deps::{self, DepsView};
use depmodel_util::errors::DepModelError;
use miette::Result;

use super::locate_descriptor;

pub fn exec(
    descriptor: Option<PathBuf>,
    extension_properties: Vec<PathBuf>,
    view: &str,
    flags: bool,
) -> Result<()> {
    let view: DepsView = view
        .parse()
        .map_err(|message| DepModelError::Generic { message })?;
    let config = GlobalConfig::load()?;
    let opts = LoadOptions {
        descriptor: locate_descriptor(descriptor)?,
        extension_properties,
    };
    let model = ops_build::load_model(&opts, &config)?;

    let listing = ops_deps::list(&model, view, flags);
    if listing.is_empty() {
        println!("No dependencies.");
    } else {
        print!("{listing}");
    }
    Ok(())
}
