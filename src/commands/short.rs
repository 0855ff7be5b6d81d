//! `display short` - the absolute minimum about the package list.

use std::path::PathBuf;

use anyhow::Result;

use crate::report;
use crate::store;

/// Options for the short command.
#[derive(Debug, Clone)]
pub struct ShortOptions {
    /// Package list to read.
    pub pkglist: PathBuf,
}

/// Execute the short command.
pub fn execute_short(options: ShortOptions) -> Result<()> {
    let packages = store::load(&options.pkglist)?;
    print!("{}", report::short_report(&packages));
    Ok(())
}
