//! `output playbook` - regenerate the install playbook and publish it.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use console::style;

use crate::generate::playbook;
use crate::publish::Publisher;
use crate::store;

/// Options for the playbook command.
#[derive(Debug, Clone)]
pub struct PlaybookOptions {
    /// Package list to read.
    pub pkglist: PathBuf,
    /// Where the playbook gets written, relative to the repository root.
    pub output: PathBuf,
}

/// Execute the playbook command.
///
/// Writes the playbook, then stages, commits and pushes it. A failing
/// repository step aborts the command; the written file is left in place.
pub fn execute_playbook(options: PlaybookOptions, publisher: &mut dyn Publisher) -> Result<()> {
    let packages = store::load(&options.pkglist)?;
    let today = Local::now().date_naive();
    playbook::write(&options.output, &packages, today)?;
    println!(
        "{} Playbook written to {}",
        style("✓").green(),
        options.output.display()
    );

    publisher.stage(&options.output)?;
    publisher.commit(playbook::COMMIT_MESSAGE)?;
    publisher.push()?;
    println!("{} Playbook committed and pushed", style("✓").green());
    Ok(())
}
