//! Package store loader.
//!
//! The curated package list lives in `pkglist.yaml`, a sequence of mappings.
//! Every command loads it fresh from disk, transforms it in memory and exits;
//! nothing is ever written back to the list.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Fixed name of the package list, resolved against the working directory.
pub const DEFAULT_FILENAME: &str = "pkglist.yaml";

/// One entry in the curated package list.
///
/// Only the identifier is required. Identifier uniqueness is assumed, not
/// enforced; a duplicate produces duplicate or overwriting derived artifacts
/// with no diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Package identifier as known to the distribution.
    pub pkg: String,

    /// Human-readable name, used for desktop menu entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Menu category the package is filed under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Command used to launch the tool from a menu entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// 1 marks the package as excluded from the minimal live media.
    /// Absent is not the same as 0: `output live` treats absence as an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<u8>,
}

impl Package {
    /// Whether the exclusion flag is set to exactly 1.
    pub fn is_excluded(&self) -> bool {
        self.exclude == Some(1)
    }
}

/// Read the YAML package file and return all packages in file order.
pub fn load(path: &Path) -> Result<Vec<Package>> {
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;
    let packages: Vec<Package> = serde_yaml::from_str(&raw)?;
    debug!(count = packages.len(), path = %path.display(), "loaded package list");
    Ok(packages)
}

/// Return the packages sorted lexicographically by identifier.
///
/// All derived artifacts render in this order; file order only matters for
/// round-tripping the raw dump.
pub fn sorted_by_pkg(packages: &[Package]) -> Vec<&Package> {
    let mut sorted: Vec<&Package> = packages.iter().collect();
    sorted.sort_by(|a, b| a.pkg.cmp(&b.pkg));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn pkg(id: &str) -> Package {
        Package {
            pkg: id.to_string(),
            name: None,
            category: None,
            command: None,
            exclude: None,
        }
    }

    #[test]
    fn load_parses_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILENAME);
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            "- pkg: nmap\n  name: Nmap\n  category: Reconnaissance\n  command: nmap\n  exclude: 0\n- pkg: john"
        )
        .unwrap();

        let packages = load(&path).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].pkg, "nmap");
        assert_eq!(packages[0].name.as_deref(), Some("Nmap"));
        assert_eq!(packages[0].exclude, Some(0));
        assert_eq!(packages[1].pkg, "john");
        assert_eq!(packages[1].exclude, None);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn load_malformed_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILENAME);
        fs::write(&path, "- pkg: [unclosed").unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn sorted_by_pkg_is_lexicographic_and_leaves_input_untouched() {
        let packages = vec![pkg("wireshark"), pkg("aircrack-ng"), pkg("nmap")];
        let sorted: Vec<&str> = sorted_by_pkg(&packages)
            .iter()
            .map(|p| p.pkg.as_str())
            .collect();
        assert_eq!(sorted, vec!["aircrack-ng", "nmap", "wireshark"]);
        assert_eq!(packages[0].pkg, "wireshark");
    }

    #[test]
    fn dump_omits_absent_fields_and_round_trips() {
        let packages = vec![
            Package {
                pkg: "nmap".to_string(),
                name: Some("Nmap".to_string()),
                category: None,
                command: None,
                exclude: Some(1),
            },
            pkg("john"),
        ];
        let dump = serde_yaml::to_string(&packages).unwrap();
        assert!(!dump.contains("category"));
        let reparsed: Vec<Package> = serde_yaml::from_str(&dump).unwrap();
        assert_eq!(reparsed, packages);
    }
}
