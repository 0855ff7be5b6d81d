#![forbid(unsafe_code)]

//! # fsl-maintenance
//!
//! Maintains the Fedora Security Lab package list and everything derived
//! from it: the comps package-group fragment, the Ansible install playbook,
//! the live-media exclude list and the security menu launchers.
//!
//! The package list is the single source of truth. Every command loads it
//! fresh from `pkglist.yaml`, renders one artifact and exits.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let packages = fsl::store::load(Path::new("pkglist.yaml"))?;
//!     for line in fsl::generate::comps::packagereq_lines(&packages) {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod error;
pub mod generate;
pub mod publish;
pub mod report;
pub mod store;

// Re-exports
pub use error::{Error, Result};
pub use publish::{GitPublisher, Publisher};
pub use store::Package;
