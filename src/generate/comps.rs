//! Entries for the `<packagelist>` block of the comps group definition.

use crate::store::{self, Package};

/// One `<packagereq>` line per package, sorted by identifier.
///
/// The six-space indent matches the nesting depth of the surrounding
/// `comps-fXX.xml.in` file the lines get pasted into.
pub fn packagereq_lines(packages: &[Package]) -> Vec<String> {
    store::sorted_by_pkg(packages)
        .iter()
        .map(|p| format!("      <packagereq type=\"default\">{}</packagereq>", p.pkg))
        .collect()
}
