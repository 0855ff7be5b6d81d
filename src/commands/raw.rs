//! `display raw` - re-serialize the package list to stdout.

use std::path::PathBuf;

use anyhow::Result;

use crate::store;

/// Options for the raw command.
#[derive(Debug, Clone)]
pub struct RawOptions {
    /// Package list to read.
    pub pkglist: PathBuf,
}

/// Execute the raw command.
///
/// Output is the serializer's rendering, not a byte copy of the input file:
/// key order and formatting may differ, the record set does not.
pub fn execute_raw(options: RawOptions) -> Result<()> {
    let packages = store::load(&options.pkglist)?;
    print!("{}", serde_yaml::to_string(&packages)?);
    Ok(())
}
