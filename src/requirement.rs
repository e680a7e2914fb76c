//! Declarative requirements and concurrent batch checks.

use crate::compare::{compare_versions, parse_loose};
use crate::detection::{find_executable, probe_version_async, Resolver, Runner};
use crate::error::{Result, VersionError};
use crate::{Checker, Operator, ProbeOptions};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Characters that make up a comparison token.
const OPERATOR_CHARS: &[char] = &['<', '>', '='];

/// A version bound: `installed <operator> version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionConstraint {
    /// How the installed version is compared against `version`.
    pub operator: Operator,
    /// Target version, `major[.minor[.patch]]`.
    pub version: String,
}

/// An executable that must be present, optionally within a version bound.
///
/// Requirements can be built directly, parsed from text or deserialized:
///
/// ```rust
/// use requires_version::{Operator, Requirement};
///
/// let git: Requirement = "git".parse().unwrap();
/// assert!(git.version.is_none());
///
/// let node: Requirement = "node >= 18.0.0".parse().unwrap();
/// assert_eq!(node, Requirement::new("node", Operator::GreaterOrEqual, "18.0.0"));
/// assert_eq!(node.to_string(), "node >= 18.0.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requirement {
    /// Executable name or path.
    pub name: String,

    /// Version bound. `None` means presence alone is enough.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionConstraint>,
}

impl Requirement {
    /// Require `name` to be present, in any version.
    pub fn any(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    /// Require `name` with `installed <operator> version`.
    pub fn new(name: impl Into<String>, operator: Operator, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(VersionConstraint {
                operator,
                version: version.into(),
            }),
        }
    }

    /// Check against the system `PATH`, blocking on each probe.
    ///
    /// Without a version bound this is [`exists`](crate::exists) and never
    /// fails. With one it is [`satisfies`](crate::satisfies).
    pub fn check(&self) -> Result<bool> {
        self.check_with(&Checker::new())
    }

    /// Check using an explicit [`Checker`].
    pub fn check_with<R: Resolver, X: Runner>(&self, checker: &Checker<R, X>) -> Result<bool> {
        match &self.version {
            None => Ok(checker.exists(&self.name)),
            Some(bound) => checker.satisfies(&self.name, &bound.version, bound.operator),
        }
    }

    /// Async check using `tokio::process`.
    ///
    /// Same semantics as [`check`](Self::check); `options.timeout` bounds
    /// each probe attempt.
    pub async fn check_async(&self, options: &ProbeOptions) -> Result<bool> {
        let path = find_executable(&self.name, options.search_fallback_dirs);

        let (path, bound) = match (path, &self.version) {
            (path, None) => return Ok(path.is_some()),
            (None, Some(_)) => {
                debug!(dependency = %self.name, "dependency not found");
                return Err(VersionError::NotFound {
                    name: self.name.clone(),
                });
            }
            (Some(path), Some(bound)) => (path, bound),
        };

        let installed = probe_version_async(&path, options).await.ok_or_else(|| {
            VersionError::VersionNotFound {
                name: self.name.clone(),
            }
        })?;
        debug!(dependency = %self.name, version = %installed, "resolved installed version");

        compare_versions(&installed, &bound.version, bound.operator)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            None => write!(f, "{}", self.name),
            Some(bound) => write!(f, "{} {} {}", self.name, bound.operator, bound.version),
        }
    }
}

impl FromStr for Requirement {
    type Err = VersionError;

    /// Parse `name`, `name <op> version` or `name<op>version`, where `<op>`
    /// is one of `>=`, `<=`, `==`, `=`, `>`, `<`.
    fn from_str(input: &str) -> Result<Self> {
        let invalid = |reason: String| VersionError::InvalidRequirement {
            input: input.to_string(),
            reason,
        };

        let trimmed = input.trim();
        let name_end = trimmed
            .find(|c: char| c.is_whitespace() || OPERATOR_CHARS.contains(&c))
            .unwrap_or(trimmed.len());
        let (name, rest) = trimmed.split_at(name_end);
        if name.is_empty() {
            return Err(invalid("missing executable name".to_string()));
        }

        let rest = rest.trim_start();
        if rest.is_empty() {
            return Ok(Self::any(name));
        }

        let op_end = rest
            .find(|c: char| !OPERATOR_CHARS.contains(&c))
            .unwrap_or(rest.len());
        let (op, version) = rest.split_at(op_end);
        if op.is_empty() {
            return Err(invalid(format!("expected an operator before \"{rest}\"")));
        }
        let operator: Operator = op
            .parse()
            .map_err(|_| invalid(format!("unknown operator \"{op}\"")))?;

        let version = version.trim();
        if version.is_empty() {
            return Err(invalid("missing version".to_string()));
        }
        parse_loose(version).map_err(|e| invalid(e.to_string()))?;

        Ok(Self::new(name, operator, version))
    }
}

/// Check many requirements concurrently.
///
/// Requirements are checked in parallel using `futures::future::join_all`;
/// each one still tries its version flags strictly in order. Results are
/// returned in the same order as `requirements`.
///
/// # Example
///
/// ```rust,no_run
/// use requires_version::{check_all, ProbeOptions, Requirement};
/// use std::time::Duration;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let requirements: Vec<Requirement> = ["git >= 2.0", "make", "node >= 18"]
///         .iter()
///         .map(|s| s.parse().unwrap())
///         .collect();
///     let options = ProbeOptions {
///         timeout: Some(Duration::from_secs(2)),
///         ..Default::default()
///     };
///
///     for (req, result) in requirements.iter().zip(check_all(&requirements, options).await) {
///         match result {
///             Ok(true) => println!("{req}: ok"),
///             Ok(false) => println!("{req}: not satisfied"),
///             Err(e) => println!("{req}: {e}"),
///         }
///     }
/// }
/// ```
pub async fn check_all(requirements: &[Requirement], options: ProbeOptions) -> Vec<Result<bool>> {
    let options = &options;
    join_all(requirements.iter().map(|req| req.check_async(options))).await
}
