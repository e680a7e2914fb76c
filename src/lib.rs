//! # requires-version
//!
//! Check that an executable exists on `PATH` and that the version it
//! reports satisfies a comparison.
//!
//! The version is discovered by running the executable with each of
//! `-v`, `--v`, `-version`, `--version`, `-V` and `--V` in turn, and taking
//! the first `major.minor[.patch]` token (optionally `v`-prefixed) found in
//! the output.
//!
//! ## Features
//!
//! - [`exists`] for presence-only checks that never fail
//! - [`satisfies`] / [`satisfies_bits`] for version comparisons
//! - [`Operator`] and the [`LESS`] / [`GREATER`] / [`EQUAL`] bitmask
//! - [`Checker`] for injecting custom [`Resolver`]s and [`Runner`]s
//! - [`Requirement`] and the async [`check_all`] for batch checks
//!
//! ## Example
//!
//! ```rust,no_run
//! use requires_version::{exists, satisfies, satisfies_bits, Operator, EQUAL, GREATER};
//!
//! fn main() -> Result<(), requires_version::VersionError> {
//!     if !exists("git") {
//!         eprintln!("git is not installed");
//!         return Ok(());
//!     }
//!
//!     // Typed operator
//!     if satisfies("git", "2.30.0", Operator::GreaterOrEqual)? {
//!         println!("git is recent enough");
//!     }
//!
//!     // Bitmask operator
//!     let ok = satisfies_bits("node", "18.0.0", GREATER | EQUAL)?;
//!     println!("node >= 18: {ok}");
//!     Ok(())
//! }
//! ```

mod compare;
mod detection;
mod error;
mod operator;
mod options;
mod requirement;
mod requires;

pub use compare::compare_versions;
pub use detection::{extract_version, Resolver, Runner, SystemResolver, SystemRunner, VERSION_FLAGS};
pub use error::{Result, VersionError};
pub use operator::{Operator, EQUAL, GREATER, LESS};
pub use options::ProbeOptions;
pub use requirement::{check_all, Requirement, VersionConstraint};
pub use requires::{exists, installed_version, satisfies, satisfies_bits, Checker};
