//! `display full` - all included tools and details, printed to stdout.

use std::path::PathBuf;

use anyhow::Result;

use crate::report;
use crate::store;

/// Options for the full command.
#[derive(Debug, Clone)]
pub struct FullOptions {
    /// Package list to read.
    pub pkglist: PathBuf,
}

/// Execute the full command.
pub fn execute_full(options: FullOptions) -> Result<()> {
    let packages = store::load(&options.pkglist)?;
    print!("{}", report::full_report(&packages));
    Ok(())
}
