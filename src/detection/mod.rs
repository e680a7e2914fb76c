//! Detection implementation submodule.
//!
//! This module contains the pieces the public entry points are built from:
//!
//! - `find_executable` / [`Resolver`]: PATH-based executable lookup
//! - `probe_version` / [`Runner`]: run the executable with each version flag
//! - [`extract_version`]: regex-based version extraction from CLI output

mod parser;
mod path_finder;
mod version;

pub use parser::extract_version;
pub use path_finder::{Resolver, SystemResolver};
pub use version::{Runner, SystemRunner, VERSION_FLAGS};

pub(crate) use path_finder::find_executable;
pub(crate) use version::{probe_version, probe_version_async};
