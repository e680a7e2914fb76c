//! Version probing by running an executable with candidate flags.

use super::parser::extract_version;
use crate::ProbeOptions;
use futures::{future, pin_mut, stream, StreamExt};
use std::io;
use std::path::Path;
use std::process::{Command, Output};
use tracing::{debug, trace};

/// Flags tried, in order, to make an executable report its version.
pub const VERSION_FLAGS: [&str; 6] = ["-v", "--v", "-version", "--version", "-V", "--V"];

/// Runs `<program> <flag>` and returns its captured output.
///
/// Any error is a failed probe attempt; the prober moves on to the next
/// flag. Closures `Fn(&Path, &str) -> io::Result<String>` implement this
/// trait.
pub trait Runner {
    /// Run `program` with a single argument and return its output text.
    fn run(&self, program: &Path, flag: &str) -> io::Result<String>;
}

impl<F> Runner for F
where
    F: Fn(&Path, &str) -> io::Result<String>,
{
    fn run(&self, program: &Path, flag: &str) -> io::Result<String> {
        self(program, flag)
    }
}

/// Runner that spawns a real child process and blocks until it exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, program: &Path, flag: &str) -> io::Result<String> {
        let output = Command::new(program).arg(flag).output()?;
        output_text(output)
    }
}

/// Stdout if non-empty, otherwise stderr (some tools write versions there).
///
/// A non-zero exit status is an error.
fn output_text(output: Output) -> io::Result<String> {
    if !output.status.success() {
        return Err(io::Error::other(format!("exited with {}", output.status)));
    }

    let out = if !output.stdout.is_empty() {
        output.stdout
    } else {
        output.stderr
    };

    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Probe `path` with each of [`VERSION_FLAGS`] until one yields a version.
///
/// Attempts run strictly in order and the first output containing a
/// version token wins. Failed attempts are logged and skipped; `None`
/// means every flag was exhausted.
pub(crate) fn probe_version<X: Runner + ?Sized>(runner: &X, path: &Path) -> Option<String> {
    let found = VERSION_FLAGS
        .iter()
        .filter_map(|flag| attempt(runner, path, flag))
        .find_map(|output| extract_version(&output));

    report(path, found)
}

fn attempt<X: Runner + ?Sized>(runner: &X, path: &Path, flag: &str) -> Option<String> {
    trace!(path = %path.display(), flag, "probing version");
    runner
        .run(path, flag)
        .inspect_err(|e| trace!(flag, error = %e, "probe attempt failed"))
        .ok()
}

fn report(path: &Path, found: Option<String>) -> Option<String> {
    if found.is_none() {
        debug!(path = %path.display(), "no version flag produced a version");
    }
    found
}

/// Async counterpart of [`probe_version`] on `tokio::process`.
///
/// Same lazy shape as the blocking prober: flags are tried one at a time
/// and the stream stops at the first version. Each attempt is bounded by
/// `options.timeout` when set; a timed-out attempt is killed and counts as
/// a failure.
pub(crate) async fn probe_version_async(path: &Path, options: &ProbeOptions) -> Option<String> {
    let versions = stream::iter(VERSION_FLAGS)
        .filter_map(|flag| attempt_async(path, flag, options))
        .filter_map(|output| future::ready(extract_version(&output)));
    pin_mut!(versions);

    report(path, versions.next().await)
}

async fn attempt_async(path: &Path, flag: &str, options: &ProbeOptions) -> Option<String> {
    trace!(path = %path.display(), flag, "probing version");
    run_async(path, flag, options)
        .await
        .inspect_err(|e| trace!(flag, error = %e, "probe attempt failed"))
        .ok()
}

async fn run_async(path: &Path, flag: &str, options: &ProbeOptions) -> io::Result<String> {
    let mut command = tokio::process::Command::new(path);
    command.arg(flag).kill_on_drop(true);

    let output = match options.timeout {
        Some(limit) => tokio::time::timeout(limit, command.output())
            .await
            .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "version probe timed out"))??,
        None => command.output().await?,
    };

    output_text(output)
}
