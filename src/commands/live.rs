//! `output live` - exclude list for the live-media kickstart file.

use std::path::PathBuf;

use anyhow::Result;

use crate::generate::live;
use crate::store;

/// Options for the live command.
#[derive(Debug, Clone)]
pub struct LiveOptions {
    /// Package list to read.
    pub pkglist: PathBuf,
}

/// Execute the live command.
pub fn execute_live(options: LiveOptions) -> Result<()> {
    let packages = store::load(&options.pkglist)?;
    for line in live::exclude_lines(&packages)? {
        println!("{line}");
    }
    Ok(())
}
