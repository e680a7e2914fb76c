//! Numeric `major.minor[.patch]` comparison.

use crate::error::{Result, VersionError};
use crate::Operator;
use semver::Version;

/// Parse `1`, `1.2` or `1.2.3` (optionally `v`-prefixed) into a padded
/// [`Version`]. Missing components are zero; components too large for a
/// `u64` saturate at `u64::MAX`.
pub(crate) fn parse_loose(input: &str) -> Result<Version> {
    let invalid = || VersionError::InvalidVersion {
        version: input.to_string(),
    };

    let trimmed = input.trim();
    let bare = trimmed
        .strip_prefix(['v', 'V'])
        .unwrap_or(trimmed)
        .trim_start();

    let mut parts = [0u64; 3];
    let mut count = 0;
    for component in bare.split('.') {
        if count == parts.len()
            || component.is_empty()
            || !component.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        // only overflow can fail here, the component is all ASCII digits
        parts[count] = component.parse().unwrap_or(u64::MAX);
        count += 1;
    }

    Ok(Version::new(parts[0], parts[1], parts[2]))
}

/// Compare an installed version against a target.
///
/// Both sides are compared component by component, numerically, with a
/// missing trailing component treated as `0`, so `1.2` equals `1.2.0`.
///
/// # Example
///
/// ```rust
/// use requires_version::{compare_versions, Operator};
///
/// assert!(compare_versions("18.14.1", "18.0.0", Operator::GreaterOrEqual).unwrap());
/// assert!(compare_versions("1.2", "1.2.0", Operator::Equal).unwrap());
/// assert!(compare_versions("1.10.0", "1.9.0", Operator::Greater).unwrap());
/// ```
pub fn compare_versions(installed: &str, target: &str, operator: Operator) -> Result<bool> {
    let installed = parse_loose(installed)?;
    let target = parse_loose(target)?;
    Ok(operator.matches(installed.cmp(&target)))
}
