//! Human-readable summaries of the package list.
//!
//! Rendering is kept separate from the command handlers so the exact output
//! can be asserted without capturing stdout.

use crate::store::{self, Package};

/// Display width the package listing is fitted into.
pub const DISPLAY_WIDTH: usize = 72;

/// Arrange items into columns fitted to `display_width`.
///
/// Columns are filled top to bottom, separated by two spaces, using the
/// smallest number of rows that fits. A single over-long item degrades to one
/// column rather than failing.
pub fn columnize(items: &[String], display_width: usize) -> String {
    if items.is_empty() {
        return String::new();
    }
    for nrows in 1..=items.len() {
        let ncols = items.len().div_ceil(nrows);
        let widths: Vec<usize> = (0..ncols)
            .map(|col| {
                let start = col * nrows;
                let end = usize::min(start + nrows, items.len());
                items[start..end].iter().map(|s| s.len()).max().unwrap_or(0)
            })
            .collect();
        let total = widths.iter().sum::<usize>() + 2 * (ncols - 1);
        if total > display_width && ncols > 1 {
            continue;
        }
        let mut out = String::new();
        for row in 0..nrows {
            let mut line = String::new();
            for (col, &width) in widths.iter().enumerate() {
                let idx = col * nrows + row;
                let Some(item) = items.get(idx) else { break };
                if !line.is_empty() {
                    line.push_str("  ");
                }
                // Only pad when another column follows on this line.
                if (col + 1) * nrows + row < items.len() {
                    line.push_str(&format!("{item:<width$}"));
                } else {
                    line.push_str(item);
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        return out;
    }
    unreachable!("nrows == items.len() always fits")
}

/// Report printed by `display full`: heading, count and the sorted listing.
pub fn full_report(packages: &[Package]) -> String {
    let identifiers: Vec<String> = store::sorted_by_pkg(packages)
        .iter()
        .map(|p| p.pkg.clone())
        .collect();

    let mut out = String::new();
    out.push_str("\nDetails about the packages in the Fedora Security Lab.\n\n");
    out.push_str(&format!(
        "Packages in comps               :  {}\n",
        packages.len()
    ));
    out.push_str("\nPackage listing:\n");
    out.push_str(&columnize(&identifiers, DISPLAY_WIDTH));
    out
}

/// Report printed by `display short`: just the count and a usage hint.
pub fn short_report(packages: &[Package]) -> String {
    let mut out = String::new();
    out.push_str("\nDetails about the packages in the Fedora Security Lab\n\n");
    out.push_str(&format!(
        "Packages in comps               :  {}\n",
        packages.len()
    ));
    out.push_str("\nTo see all available options use -h or --help.\n");
    out
}
