//! Dependency checks: existence and version comparison.

use crate::compare::compare_versions;
use crate::detection::{probe_version, Resolver, Runner, SystemResolver, SystemRunner};
use crate::error::{Result, VersionError};
use crate::{Operator, ProbeOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Checks dependencies using a [`Resolver`] and a [`Runner`].
///
/// The default checker looks executables up on `PATH` and runs them as
/// real child processes. Nothing is cached: every call resolves and probes
/// again.
///
/// # Example
///
/// ```rust,no_run
/// use requires_version::{Checker, Operator};
///
/// let checker = Checker::new();
/// if checker.exists("git") {
///     let recent = checker.satisfies("git", "2.30", Operator::GreaterOrEqual)?;
///     println!("git >= 2.30: {recent}");
/// }
/// # Ok::<(), requires_version::VersionError>(())
/// ```
///
/// Injecting collaborators:
///
/// ```rust
/// use requires_version::{Checker, Operator};
/// use std::io;
/// use std::path::{Path, PathBuf};
///
/// let checker = Checker::from_parts(
///     |_: &str| Some(PathBuf::from("/usr/bin/node")),
///     |_: &Path, _: &str| -> io::Result<String> { Ok("v18.14.1".to_string()) },
/// );
/// assert!(checker.satisfies("node", "18.14.1", Operator::Equal).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Checker<R = SystemResolver, X = SystemRunner> {
    resolver: R,
    runner: X,
}

impl Checker {
    /// A checker backed by `PATH` lookup and real child processes.
    pub fn new() -> Self {
        Self::from_parts(SystemResolver::new(), SystemRunner)
    }

    /// A system checker configured from [`ProbeOptions`].
    ///
    /// Synchronous probes ignore `options.timeout`.
    pub fn with_options(options: &ProbeOptions) -> Self {
        let resolver = SystemResolver::new().with_fallback_dirs(options.search_fallback_dirs);
        Self::from_parts(resolver, SystemRunner)
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resolver, X: Runner> Checker<R, X> {
    /// Build a checker from explicit collaborators.
    pub fn from_parts(resolver: R, runner: X) -> Self {
        Self { resolver, runner }
    }

    /// Whether `name` resolves to an executable. Never probes.
    pub fn exists(&self, name: &str) -> bool {
        self.resolver.resolve(name).is_some()
    }

    /// The version `name` reports, without a `v` prefix.
    ///
    /// # Errors
    ///
    /// - [`VersionError::NotFound`] if `name` does not resolve
    /// - [`VersionError::VersionNotFound`] if no version flag yields a version
    pub fn installed_version(&self, name: &str) -> Result<String> {
        let path = self.locate(name)?;
        self.probe(name, &path)
    }

    /// Whether the installed version of `name` satisfies
    /// `installed <operator> version`.
    ///
    /// # Errors
    ///
    /// Everything [`installed_version`](Self::installed_version) returns,
    /// plus [`VersionError::InvalidVersion`] if `version` is not
    /// `major[.minor[.patch]]`.
    pub fn satisfies(&self, name: &str, version: &str, operator: Operator) -> Result<bool> {
        let installed = self.installed_version(name)?;
        compare_versions(&installed, version, operator)
    }

    /// Like [`satisfies`](Self::satisfies), with the operator given as a
    /// bitmask of [`LESS`](crate::LESS), [`GREATER`](crate::GREATER) and
    /// [`EQUAL`](crate::EQUAL).
    ///
    /// The mask is decoded after the dependency has been resolved and
    /// probed, so a missing dependency is reported before a bad mask.
    ///
    /// # Errors
    ///
    /// Everything [`satisfies`](Self::satisfies) returns, plus
    /// [`VersionError::InvalidOperator`] for an undecodable mask.
    pub fn satisfies_bits(&self, name: &str, version: &str, bits: u8) -> Result<bool> {
        let installed = self.installed_version(name)?;
        let operator = Operator::from_bits(bits)?;
        compare_versions(&installed, version, operator)
    }

    fn locate(&self, name: &str) -> Result<PathBuf> {
        self.resolver.resolve(name).ok_or_else(|| {
            debug!(dependency = name, "dependency not found");
            VersionError::NotFound {
                name: name.to_string(),
            }
        })
    }

    fn probe(&self, name: &str, path: &Path) -> Result<String> {
        let version = probe_version(&self.runner, path).ok_or_else(|| {
            VersionError::VersionNotFound {
                name: name.to_string(),
            }
        })?;
        debug!(dependency = name, version = %version, path = %path.display(), "resolved installed version");
        Ok(version)
    }
}

/// Whether `name` resolves to an executable on `PATH`.
///
/// Never probes and never fails; a missing dependency is `false`.
///
/// ```rust
/// assert!(!requires_version::exists("definitely_not_a_real_tool_12345"));
/// ```
pub fn exists(name: &str) -> bool {
    Checker::new().exists(name)
}

/// Whether `name` is on `PATH` and its version satisfies
/// `installed <operator> version`.
///
/// # Errors
///
/// See [`Checker::satisfies`]. Unlike [`exists`], a missing dependency is
/// an error here.
///
/// # Example
///
/// ```rust,no_run
/// use requires_version::{satisfies, Operator};
///
/// if !satisfies("node", "18.0.0", Operator::GreaterOrEqual)? {
///     eprintln!("node 18 or newer is required");
/// }
/// # Ok::<(), requires_version::VersionError>(())
/// ```
pub fn satisfies(name: &str, version: &str, operator: Operator) -> Result<bool> {
    Checker::new().satisfies(name, version, operator)
}

/// [`satisfies`] with a raw operator bitmask.
///
/// ```rust,no_run
/// use requires_version::{satisfies_bits, EQUAL, GREATER};
///
/// let ok = satisfies_bits("git", "2.0.0", GREATER | EQUAL)?;
/// # Ok::<(), requires_version::VersionError>(())
/// ```
pub fn satisfies_bits(name: &str, version: &str, bits: u8) -> Result<bool> {
    Checker::new().satisfies_bits(name, version, bits)
}

/// The version `name` reports, without a `v` prefix.
///
/// # Errors
///
/// See [`Checker::installed_version`].
pub fn installed_version(name: &str) -> Result<String> {
    Checker::new().installed_version(name)
}
