//! CLI command implementations.
//!
//! Each command loads the package store, transforms it and exits; there is no
//! state shared between invocations. One submodule per command.

pub mod comps;
pub mod full;
pub mod live;
pub mod menus;
pub mod playbook;
pub mod raw;
pub mod short;

pub use comps::{execute_comps, CompsOptions};
pub use full::{execute_full, FullOptions};
pub use live::{execute_live, LiveOptions};
pub use menus::{execute_menus, MenusOptions};
pub use playbook::{execute_playbook, PlaybookOptions};
pub use raw::{execute_raw, RawOptions};
pub use short::{execute_short, ShortOptions};
