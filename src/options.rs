//! Probe options configuration.
//!
//! This module provides the [`ProbeOptions`] struct for configuring how
//! executables are located and how long async version probes may run.

use std::time::Duration;

/// Configuration options for locating and probing executables.
///
/// # Default Behavior
///
/// By default only `PATH` is searched and probes run until the child
/// exits, which matches the synchronous API exactly.
///
/// # Example
///
/// ```rust
/// use requires_version::ProbeOptions;
/// use std::time::Duration;
///
/// // Bound every async probe attempt to two seconds
/// let opts = ProbeOptions {
///     timeout: Some(Duration::from_secs(2)),
///     ..Default::default()
/// };
///
/// // Also look in /usr/local/bin, /usr/bin, ~/.local/bin and ~/bin
/// let opts = ProbeOptions {
///     search_fallback_dirs: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOptions {
    /// Upper bound for a single async probe attempt.
    ///
    /// An attempt that exceeds it is treated like any other failed attempt
    /// and the next version flag is tried. Synchronous probes never time out.
    ///
    /// Default: `None`
    pub timeout: Option<Duration>,

    /// Search common install directories when `PATH` lookup fails.
    ///
    /// Default: `false`
    pub search_fallback_dirs: bool,
}
