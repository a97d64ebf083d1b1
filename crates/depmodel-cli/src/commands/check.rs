//! Handler for `depmodel check-properties`.

use std::path::PathBuf;

use depmodel_ops::ops_check::{self, CheckResult};
use depmodel_util::errors::DepModelError;
use miette::Result;

pub fn exec(files: &[PathBuf]) -> Result<()> {
    let mut failures = 0usize;
    for path in files {
        match ops_check::check_properties(path)? {
            CheckResult::Valid => println!("ok       {}", path.display()),
            CheckResult::NoClassification => {
                println!("skipped  {} (no classification keys)", path.display())
            }
            CheckResult::Invalid(message) => {
                failures += 1;
                println!("invalid  {}: {message}", path.display());
            }
        }
    }

    if failures > 0 {
        return Err(DepModelError::Generic {
            message: format!("{failures} properties file(s) failed validation"),
        }
        .into());
    }
    Ok(())
}
