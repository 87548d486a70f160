//! `cryo thaw` — Thaw every process in a cgroup.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use cryo_common::types::{FreezerState, Resources};

use super::Context;

/// Arguments for the `thaw` command.
#[derive(Args, Debug)]
pub struct ThawArgs {
    /// Cgroup name or absolute path.
    pub cgroup: PathBuf,
}

/// Executes the `thaw` command.
///
/// # Errors
///
/// Returns an error if `freezer.state` cannot be written.
pub fn execute(args: ThawArgs, ctx: &Context) -> anyhow::Result<()> {
    let path = ctx.cgroup_path(&args.cgroup);
    ctx.freezer()?
        .set(&path, &Resources::with_freezer(FreezerState::Thawed))
        .with_context(|| format!("thawing {}", path.display()))?;
    tracing::info!(path = %path.display(), "cgroup thawed");
    Ok(())
}
