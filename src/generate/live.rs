//! Exclusion list for the live-media kickstart file.

use crate::error::{Error, Result};
use crate::store::{self, Package};

/// One `- PKG` line per excluded package, sorted by identifier.
///
/// The exclusion flag is read unconditionally: a record without an `exclude`
/// field is an error, not "not excluded".
pub fn exclude_lines(packages: &[Package]) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for package in store::sorted_by_pkg(packages) {
        let flag = package.exclude.ok_or_else(|| Error::AttributeMissing {
            pkg: package.pkg.clone(),
            field: "exclude",
        })?;
        if flag == 1 {
            lines.push(format!("- {}", package.pkg));
        }
    }
    Ok(lines)
}
