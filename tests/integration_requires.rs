//! Integration tests against the real system.
//!
//! These tests only rely on tools every unix system has and on names that
//! certainly do not exist, so they pass regardless of what is installed.

use requires_version::{
    check_all, exists, installed_version, satisfies, satisfies_bits, Checker, Operator,
    ProbeOptions, Requirement, VersionError, EQUAL, GREATER, LESS,
};

const MISSING: &str = "definitely_not_a_real_executable_12345";

#[test]
fn test_missing_dependency_exists_is_false() {
    assert!(!exists(MISSING));
}

#[test]
fn test_missing_dependency_version_check_errors() {
    for op in Operator::all() {
        assert_eq!(
            satisfies(MISSING, "1.0.0", op),
            Err(VersionError::NotFound {
                name: MISSING.to_string()
            })
        );
    }
    assert!(matches!(
        satisfies_bits(MISSING, "1.0.0", EQUAL),
        Err(VersionError::NotFound { .. })
    ));
}

#[test]
fn test_missing_dependency_error_message() {
    let err = installed_version(MISSING).unwrap_err();
    assert_eq!(err.to_string(), format!("\"{MISSING}\" not found."));
    assert_eq!(err.dependency(), Some(MISSING));
}

#[cfg(unix)]
#[test]
fn test_sh_exists() {
    assert!(exists("sh"));
    assert!(Checker::new().exists("sh"));
}

#[cfg(unix)]
#[test]
fn test_exists_accepts_literal_path() {
    assert!(exists("/bin/sh"));
    assert!(!exists("/nonexistent/bin/sh"));
}

#[cfg(unix)]
#[test]
fn test_sh_version_check_is_resilient() {
    // bash reports a version, dash does not; both outcomes are valid
    match satisfies("sh", "0.0.1", Operator::Greater) {
        Ok(result) => assert!(result),
        Err(e) => assert!(matches!(e, VersionError::VersionNotFound { .. }), "{e}"),
    }
}

#[cfg(unix)]
#[test]
fn test_invalid_operator_reported_for_real_tool() {
    // Only meaningful when sh reports a version at all
    if installed_version("sh").is_ok() {
        assert_eq!(
            satisfies_bits("sh", "1.0.0", LESS | GREATER),
            Err(VersionError::InvalidOperator {
                bits: LESS | GREATER
            })
        );
    }
}

#[test]
fn test_existence_is_deterministic() {
    for name in ["sh", "git", MISSING] {
        assert_eq!(exists(name), exists(name), "{name}");
    }
}

#[tokio::test]
async fn test_check_all_mixed_requirements() {
    let bounded = format!("{MISSING} >= 1.0");
    let requirements: Vec<Requirement> = [MISSING, bounded.as_str()]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    let results = check_all(&requirements, ProbeOptions::default()).await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0], Ok(false));
    assert!(matches!(results[1], Err(VersionError::NotFound { .. })));
}

#[cfg(unix)]
#[tokio::test]
async fn test_check_all_sh_presence() {
    let requirements = vec![Requirement::any("sh")];
    let results = check_all(&requirements, ProbeOptions::default()).await;
    assert_eq!(results, vec![Ok(true)]);
}
