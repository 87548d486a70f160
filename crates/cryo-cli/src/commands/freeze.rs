//! `cryo freeze` — Freeze every process in a cgroup.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use cryo_common::types::{FreezerState, Resources};

use super::Context;

/// Arguments for the `freeze` command.
#[derive(Args, Debug)]
pub struct FreezeArgs {
    /// Cgroup name or absolute path.
    pub cgroup: PathBuf,
}

/// Executes the `freeze` command.
///
/// Blocks until the kernel reports the cgroup frozen or the retry budget
/// is spent; on failure the cgroup is left thawed where possible.
///
/// # Errors
///
/// Returns an error if the cgroup cannot be frozen.
pub fn execute(args: FreezeArgs, ctx: &Context) -> anyhow::Result<()> {
    let path = ctx.cgroup_path(&args.cgroup);
    ctx.freezer()?
        .set(&path, &Resources::with_freezer(FreezerState::Frozen))
        .with_context(|| format!("freezing {}", path.display()))?;
    tracing::info!(path = %path.display(), "cgroup frozen");
    Ok(())
}
