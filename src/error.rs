//! Error type for version checks.
//!
//! Every failure surfaced by this crate is a [`VersionError`]. Existence-only
//! checks never produce one; they collapse "not found" into `false`.

use thiserror::Error;

/// Errors that can occur while checking a dependency's version.
///
/// Each variant carries enough context (the dependency name, the offending
/// operator bits or version text) to produce a descriptive message.
///
/// # Example
///
/// ```rust
/// use requires_version::{satisfies, Operator, VersionError};
///
/// match satisfies("definitely_not_a_real_tool_12345", "1.0.0", Operator::Equal) {
///     Ok(ok) => println!("satisfied: {ok}"),
///     Err(VersionError::NotFound { name }) => eprintln!("{name} is not installed"),
///     Err(e) => eprintln!("version check failed: {e}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VersionError {
    /// The executable could not be resolved on `PATH`.
    ///
    /// Only raised when a version comparison was requested.
    #[error("\"{name}\" not found.")]
    NotFound {
        /// Name that was looked up.
        name: String,
    },

    /// None of the version flags produced output containing a version token.
    #[error("\"{name}\" version not found.")]
    VersionNotFound {
        /// Name of the dependency that was probed.
        name: String,
    },

    /// The operator bitmask does not decode to a comparison.
    #[error("\"{bits}\" is invalid.")]
    InvalidOperator {
        /// The rejected bitmask.
        bits: u8,
    },

    /// A version string is not 1-3 dot-separated non-negative integers.
    #[error("\"{version}\" is not a valid version")]
    InvalidVersion {
        /// The rejected version text.
        version: String,
    },

    /// A textual requirement such as `node >= 18` could not be parsed.
    #[error("invalid requirement \"{input}\": {reason}")]
    InvalidRequirement {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl VersionError {
    /// Name of the dependency this error refers to, if any.
    ///
    /// ```rust
    /// use requires_version::VersionError;
    ///
    /// let err = VersionError::NotFound { name: "git".to_string() };
    /// assert_eq!(err.dependency(), Some("git"));
    /// assert_eq!(VersionError::InvalidOperator { bits: 0 }.dependency(), None);
    /// ```
    pub fn dependency(&self) -> Option<&str> {
        match self {
            Self::NotFound { name } | Self::VersionNotFound { name } => Some(name),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VersionError>;
