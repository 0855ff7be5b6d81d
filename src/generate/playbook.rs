//! Ansible playbook that installs every package from the list.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::Result;
use crate::store::{self, Package};

/// Fixed path the playbook is written to, relative to the working directory.
pub const PLAYBOOK_PATH: &str = "ansible-playbook/fsl-packages.yml";

/// Commit message used when publishing the regenerated playbook.
pub const COMMIT_MESSAGE: &str = "Update playbook";

/// Render the playbook: fixed header with the generation date, then one list
/// entry per package, sorted by identifier.
pub fn render(packages: &[Package], date: NaiveDate) -> String {
    let mut out = format!(
        "# This playbook installs all Fedora Security Lab packages.\n\
         #\n\
         # This file is licensed under GPLv2, for more details check COPYING.\n\
         #\n\
         # Generated by fsl-maintenance at {date}\n\
         #\n\
         # Usage: ansible-playbook fsl-packages.yml -f 10\n\
         \n\
         ---\n\
         - hosts: fsl_hosts\n\
         \x20 user: root\n\
         \x20 tasks:\n\
         \x20 - name: install all packages from the FSL\n\
         \x20   dnf: pkg={{{{ item }}}}\n\
         \x20        state=present\n\
         \x20   with_items:\n"
    );
    for package in store::sorted_by_pkg(packages) {
        out.push_str(&format!("       - {}\n", package.pkg));
    }
    out
}

/// Write the rendered playbook to `path`, creating the parent directory if it
/// does not exist yet.
pub fn write(path: &Path, packages: &[Package], date: NaiveDate) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render(packages, date))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pkg(id: &str) -> Package {
        Package {
            pkg: id.to_string(),
            name: None,
            category: None,
            command: None,
            exclude: None,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn header_embeds_date_and_keeps_ansible_braces_literal() {
        let out = render(&[pkg("nmap")], date());
        assert!(out.contains("# Generated by fsl-maintenance at 2024-03-01"));
        assert!(out.contains("dnf: pkg={{ item }}"));
        assert!(out.contains("    with_items:\n       - nmap\n"));
    }

    #[test]
    fn entries_are_sorted() {
        let out = render(&[pkg("wireshark"), pkg("aircrack-ng")], date());
        let entries: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with("       - "))
            .collect();
        assert_eq!(entries, vec!["       - aircrack-ng", "       - wireshark"]);
    }

    #[test]
    fn write_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PLAYBOOK_PATH);
        write(&path, &[pkg("nmap")], date()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("       - nmap\n"));
    }
}
