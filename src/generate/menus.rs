//! Desktop launcher descriptors for the security menu.
//!
//! This is the only generator with delete side effects, and the only one whose
//! result depends on what is already in the target directory rather than on
//! the package list alone.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::store::Package;

/// Fixed directory the descriptors live in, relative to the working directory.
pub const MENU_DIR: &str = "security-menu";

/// Standard terminal application of the Xfce desktop.
const TERMINAL: &str = "xfce4-terminal";

/// Descriptor file name derived from a package identifier.
pub fn descriptor_name(pkg: &str) -> String {
    format!("security-{pkg}.desktop")
}

/// Render the launcher descriptor for a package.
///
/// Returns `None` unless the record carries both a launch command and a
/// display name. The category is optional and rendered empty when absent.
pub fn render_descriptor(package: &Package) -> Option<String> {
    let name = package.name.as_deref()?;
    let command = package.command.as_deref()?;
    let category = package.category.as_deref().unwrap_or("");
    Some(format!(
        "[Desktop Entry]\n\
         Name={name}\n\
         Exec={TERMINAL} -e \"su -c '{command}; bash'\"\n\
         TryExec={pkg}\n\
         Type=Application\n\
         Categories=System;Security;X-SecurityLab;X-{category};\n",
        pkg = package.pkg,
    ))
}

/// Descriptors to delete, computed from the directory contents in two
/// immutable passes.
///
/// A descriptor survives when its record has a command; exclusion overrides
/// that protection, so an excluded record loses its descriptor even when one
/// was just generated. Records whose descriptor is not on disk never enter the
/// set, so an excluded package without a descriptor is simply untouched.
pub fn delete_set(existing: &BTreeSet<String>, packages: &[Package]) -> BTreeSet<String> {
    let protected: BTreeSet<String> = packages
        .iter()
        .filter(|p| p.command.is_some())
        .map(|p| descriptor_name(&p.pkg))
        .collect();
    let excluded: BTreeSet<String> = packages
        .iter()
        .filter(|p| p.is_excluded())
        .map(|p| descriptor_name(&p.pkg))
        .filter(|n| existing.contains(n))
        .collect();
    existing
        .difference(&protected)
        .cloned()
        .chain(excluded)
        .collect()
}

/// Outcome of one reconciliation run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MenuSummary {
    pub written: usize,
    pub deleted: usize,
}

/// Generate the descriptors into `dir`, then reconcile the directory: every
/// `*.desktop` file that is neither protected nor regenerated gets removed.
pub fn generate(dir: &Path, packages: &[Package]) -> Result<MenuSummary> {
    if !dir.is_dir() {
        return Err(Error::NotFound(dir.to_path_buf()));
    }

    let mut summary = MenuSummary::default();
    for package in packages {
        if let Some(descriptor) = render_descriptor(package) {
            fs::write(dir.join(descriptor_name(&package.pkg)), descriptor)?;
            summary.written += 1;
        }
    }

    let existing = list_descriptors(dir)?;
    for name in delete_set(&existing, packages) {
        debug!(descriptor = %name, "removing stale descriptor");
        fs::remove_file(dir.join(&name))?;
        summary.deleted += 1;
    }
    Ok(summary)
}

/// Every `*.desktop` file currently in the directory.
fn list_descriptors(dir: &Path) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        if let Some(name) = file_name.to_str() {
            if name.ends_with(".desktop") {
                names.insert(name.to_string());
            }
        }
    }
    Ok(names)
}
