//! Derived-artifact generators.
//!
//! Each generator maps the package list to one output format: the comps XML
//! fragment, the Ansible install playbook, the live-media exclusion list and
//! the desktop menu descriptors. None of them share state; every command
//! recomputes its output from scratch.

pub mod comps;
pub mod live;
pub mod menus;
pub mod playbook;
