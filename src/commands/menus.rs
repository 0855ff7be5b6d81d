//! `output menus` - regenerate the security menu .desktop files.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::generate::menus;
use crate::store;

/// Options for the menus command.
#[derive(Debug, Clone)]
pub struct MenusOptions {
    /// Package list to read.
    pub pkglist: PathBuf,
    /// Directory holding the .desktop files.
    pub menu_dir: PathBuf,
}

/// Execute the menus command.
pub fn execute_menus(options: MenusOptions) -> Result<()> {
    let packages = store::load(&options.pkglist)?;
    let summary = menus::generate(&options.menu_dir, &packages)?;
    println!(
        "{} {} descriptors written, {} removed",
        style("✓").green(),
        summary.written,
        summary.deleted
    );
    Ok(())
}
