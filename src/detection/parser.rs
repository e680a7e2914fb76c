//! Version token extraction from CLI output.

use regex::Regex;
use std::sync::LazyLock;

/// `major.minor[.patch]`, optionally preceded by a literal `v`.
///
/// ASCII digits only; `\d` would also match other Unicode decimal digits.
static VERSION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"v?[0-9]+\.[0-9]+(?:\.[0-9]+)?").expect("Invalid version regex")
});

/// Extract the first version token from arbitrary CLI output.
///
/// The search is unanchored, so tool banners, leading labels and trailing
/// text are ignored. The token is returned without its `v` prefix:
///
/// - `iptables-save v1.8.4 (legacy)` -> `1.8.4`
/// - `man 2.9.1` -> `2.9.1`
/// - `v18.14.1` -> `18.14.1`
/// - `version 1.2` -> `1.2`
///
/// Returns `None` when the text contains no `digits.digits` pattern.
///
/// # Example
///
/// ```rust
/// use requires_version::extract_version;
///
/// assert_eq!(extract_version("git version 2.43.0").as_deref(), Some("2.43.0"));
/// assert_eq!(extract_version("no version here"), None);
/// ```
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_TOKEN
        .find(output)
        .map(|m| normalize(m.as_str()).to_string())
}

fn normalize(token: &str) -> &str {
    let token = token.trim();
    token.strip_prefix(['v', 'V']).unwrap_or(token).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iptables_save_version() {
        let output = "iptables-save v1.8.4 (legacy)";
        assert_eq!(extract_version(output).as_deref(), Some("1.8.4"));
    }

    #[test]
    fn test_parse_man_version() {
        assert_eq!(extract_version("man 2.9.1").as_deref(), Some("2.9.1"));
    }

    #[test]
    fn test_parse_bare_version() {
        assert_eq!(extract_version("9.5.0").as_deref(), Some("9.5.0"));
    }

    #[test]
    fn test_parse_node_version() {
        assert_eq!(extract_version("v18.14.1").as_deref(), Some("18.14.1"));
    }

    #[test]
    fn test_parse_two_component_version() {
        assert_eq!(extract_version("1.2").as_deref(), Some("1.2"));
        assert_eq!(extract_version("version 1.2").as_deref(), Some("1.2"));
    }

    #[test]
    fn test_parse_version_with_trailing_text() {
        let output = "1.2.3 some extra text";
        assert_eq!(extract_version(output).as_deref(), Some("1.2.3"));
    }

    #[test]
    fn test_parse_version_multiline_takes_first() {
        let output = "My Tool\nVersion: 1.0.0\nBuilt with lib 4.5.6";
        assert_eq!(extract_version(output).as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_parse_four_component_version_stops_at_patch() {
        assert_eq!(extract_version("tool 1.2.3.4").as_deref(), Some("1.2.3"));
    }

    #[test]
    fn test_parse_skips_non_ascii_digits() {
        let output = "tool \u{0661}.\u{0662} build, version 1.2.3";
        assert_eq!(extract_version(output).as_deref(), Some("1.2.3"));

        let fullwidth = "\u{FF11}.\u{FF12}.\u{FF13}";
        assert_eq!(extract_version(fullwidth), None);
    }

    #[test]
    fn test_parse_version_no_match() {
        assert_eq!(extract_version("no version here"), None);
        assert_eq!(extract_version("build 42"), None);
        assert_eq!(extract_version(""), None);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("v1.8.4"), "1.8.4");
        assert_eq!(normalize("V2.0"), "2.0");
        assert_eq!(normalize("3.1"), "3.1");
    }
}
