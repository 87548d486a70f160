//! `cryo attach` — Attach a process to a cgroup.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use nix::unistd::Pid;

use super::Context;

/// Arguments for the `attach` command.
#[derive(Args, Debug)]
pub struct AttachArgs {
    /// Cgroup name or absolute path.
    pub cgroup: PathBuf,

    /// Process to attach.
    pub pid: i32,
}

/// Executes the `attach` command.
///
/// Writes the PID through every registered controller, so the process
/// follows the cgroup's current and future freeze state.
///
/// # Errors
///
/// Returns an error if the PID cannot be written to `cgroup.procs`.
pub fn execute(args: AttachArgs, ctx: &Context) -> anyhow::Result<()> {
    let path = ctx.cgroup_path(&args.cgroup);
    ctx.registry
        .apply_all(&path, Pid::from_raw(args.pid))
        .with_context(|| format!("attaching {} to {}", args.pid, path.display()))?;
    tracing::info!(pid = args.pid, path = %path.display(), "process attached");
    Ok(())
}
