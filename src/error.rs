//! Error types shared across the library.
//!
//! Nothing here is ever caught and recovered: every failure propagates up to
//! `main` and aborts the command with a non-zero exit.

use std::path::PathBuf;

use thiserror::Error;

/// Failures a maintenance command can run into.
#[derive(Debug, Error)]
pub enum Error {
    /// The package list (or a target directory) does not exist.
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The package list is not well-formed YAML.
    #[error("malformed package list: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A record lacks a field that the current operation reads unconditionally.
    #[error("package '{pkg}' is missing the '{field}' field")]
    AttributeMissing { pkg: String, field: &'static str },

    /// Staging, committing or pushing the generated playbook failed.
    #[error("repository operation failed: {0}")]
    Repository(#[from] git2::Error),

    /// Any other filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
