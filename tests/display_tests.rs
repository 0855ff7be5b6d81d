//! End-to-end tests for the `display` command group.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use fsl::Package;

const PKGLIST: &str = "\
- pkg: wireshark
  name: Wireshark
  category: Sniffers
  command: wireshark
  exclude: 0
- pkg: aircrack-ng
  exclude: 1
- pkg: nmap
  name: Nmap
  command: nmap
  exclude: 0
";

fn workspace(yaml: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("pkglist.yaml"), yaml).unwrap();
    dir
}

fn fsl_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fsl-maintenance").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn full_prints_count_and_every_identifier_once_sorted() {
    let dir = workspace(PKGLIST);
    let assert = fsl_cmd(&dir).args(["display", "full"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(stdout.contains("Packages in comps               :  3"));
    let listing = stdout.split("Package listing:\n").nth(1).unwrap();
    let identifiers: Vec<&str> = listing.split_whitespace().collect();
    assert_eq!(identifiers, vec!["aircrack-ng", "nmap", "wireshark"]);
}

#[test]
fn full_fits_the_listing_into_the_display_width() {
    let yaml: String = (0..60)
        .map(|i| format!("- pkg: tool-{i:02}\n"))
        .collect();
    let dir = workspace(&yaml);
    let assert = fsl_cmd(&dir).args(["display", "full"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let listing = stdout.split("Package listing:\n").nth(1).unwrap();
    assert!(listing.lines().count() < 60, "expected a multi-column layout");
    for line in listing.lines() {
        assert!(line.len() <= 72, "line wider than 72 columns: {line:?}");
    }
}

#[test]
fn raw_round_trips_the_record_set() {
    let dir = workspace(PKGLIST);
    let assert = fsl_cmd(&dir).args(["display", "raw"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let reparsed: Vec<Package> = serde_yaml::from_str(&stdout).unwrap();
    let original: Vec<Package> = serde_yaml::from_str(PKGLIST).unwrap();
    assert_eq!(reparsed, original);
}

#[test]
fn short_prints_count_and_usage_hint() {
    let dir = workspace(PKGLIST);
    fsl_cmd(&dir)
        .args(["display", "short"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Packages in comps               :  3"))
        .stdout(predicate::str::contains("-h or --help"));
}

#[test]
fn missing_package_list_aborts_with_nonzero_exit() {
    let dir = TempDir::new().unwrap();
    fsl_cmd(&dir)
        .args(["display", "full"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn malformed_package_list_is_a_parse_error() {
    let dir = workspace("- pkg: [unclosed");
    fsl_cmd(&dir)
        .args(["display", "short"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed package list"));
}
