//! `cryo stats` — Print controller statistics of a cgroup.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;

use super::Context;
use crate::output;

/// Arguments for the `stats` command.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Cgroup name or absolute path.
    pub cgroup: PathBuf,
}

/// Executes the `stats` command.
///
/// # Errors
///
/// Returns an error if any controller fails to report.
pub fn execute(args: StatsArgs, ctx: &Context) -> anyhow::Result<()> {
    let path = ctx.cgroup_path(&args.cgroup);
    let stats = ctx
        .registry
        .stats(&path)
        .with_context(|| format!("collecting stats of {}", path.display()))?;
    output::print_json(&stats)
}
