//! Output helpers for CLI commands.
//!
//! Results go to stdout; logs go to stderr through `tracing`.

use std::io::Write;
use std::path::{Path, PathBuf};

use cryo_common::types::FreezerState;
use serde::Serialize;

/// Machine-readable result of `cryo state --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateReport {
    /// Resolved cgroup directory.
    pub cgroup: PathBuf,
    /// Stable freezer state.
    pub state: FreezerState,
}

impl StateReport {
    /// Creates a report for the given cgroup.
    #[must_use]
    pub fn new(cgroup: &Path, state: FreezerState) -> Self {
        Self {
            cgroup: cgroup.to_path_buf(),
            state,
        }
    }
}

/// Prints one line to stdout.
#[allow(clippy::print_stdout)]
pub fn print_line(line: &str) {
    println!("{line}");
}

/// Prints a value as pretty JSON to stdout.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
