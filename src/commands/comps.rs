//! `output comps` - entries for the comps-fXX.xml.in package list block.

use std::path::PathBuf;

use anyhow::Result;

use crate::generate::comps;
use crate::store;

/// Options for the comps command.
#[derive(Debug, Clone)]
pub struct CompsOptions {
    /// Package list to read.
    pub pkglist: PathBuf,
}

/// Execute the comps command.
pub fn execute_comps(options: CompsOptions) -> Result<()> {
    let packages = store::load(&options.pkglist)?;
    for line in comps::packagereq_lines(&packages) {
        println!("{line}");
    }
    Ok(())
}
