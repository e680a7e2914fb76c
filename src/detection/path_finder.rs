//! PATH-based executable lookup with optional fallback locations.

use std::path::{Path, PathBuf};
use tracing::debug;

/// System fallback paths to check if executable not found in PATH.
const FALLBACK_PATHS: &[&str] = &["/usr/local/bin", "/usr/bin"];

/// Maps an executable name to a filesystem path.
///
/// Returning `None` means "not found". Any `Fn(&str) -> Option<PathBuf>`
/// closure is a resolver, which is convenient in tests:
///
/// ```rust
/// use requires_version::Resolver;
/// use std::path::PathBuf;
///
/// let fixed = |_: &str| Some(PathBuf::from("/usr/bin/node"));
/// assert_eq!(fixed.resolve("node"), Some(PathBuf::from("/usr/bin/node")));
/// ```
pub trait Resolver {
    /// Resolve `name` to an executable path.
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

impl<F> Resolver for F
where
    F: Fn(&str) -> Option<PathBuf>,
{
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self(name)
    }
}

/// Resolver backed by the system `PATH`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemResolver {
    fallback_dirs: bool,
}

impl SystemResolver {
    /// A resolver that only consults `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also search `/usr/local/bin`, `/usr/bin`, `~/.local/bin` and `~/bin`
    /// when `PATH` lookup fails.
    pub fn with_fallback_dirs(mut self, enabled: bool) -> Self {
        self.fallback_dirs = enabled;
        self
    }
}

impl Resolver for SystemResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        find_executable(name, self.fallback_dirs)
    }
}

/// Find an executable by name.
///
/// This function first tries to find the executable using the system PATH
/// via the `which` crate, which also accepts literal paths. If that fails
/// and `fallback_dirs` is set, common install locations are checked.
pub(crate) fn find_executable(name: &str, fallback_dirs: bool) -> Option<PathBuf> {
    match which::which(name) {
        Ok(path) => return Some(path),
        Err(e) => debug!(executable = name, error = %e, "executable not found on PATH"),
    }

    if !fallback_dirs || name.contains(std::path::is_separator) {
        return None;
    }

    let mut candidates: Vec<PathBuf> = FALLBACK_PATHS.iter().map(PathBuf::from).collect();
    if let Some(home) = std::env::var_os("HOME") {
        let home = Path::new(&home);
        candidates.push(home.join(".local/bin"));
        candidates.push(home.join("bin"));
    }

    find_in_dirs(name, candidates)
        .inspect(|path| debug!(executable = name, path = %path.display(), "found in fallback location"))
}

/// Search `dirs` in order with the same executable checks `PATH` lookup uses.
fn find_in_dirs(name: &str, dirs: Vec<PathBuf>) -> Option<PathBuf> {
    let search = std::env::join_paths(dirs).ok()?;
    let cwd = std::env::current_dir().ok()?;
    which::which_in(name, Some(search), cwd).ok()
}
