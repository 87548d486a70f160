//! `cryo state` — Print the stable freezer state of a cgroup.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;

use super::Context;
use crate::output;

/// Arguments for the `state` command.
#[derive(Args, Debug)]
pub struct StateArgs {
    /// Cgroup name or absolute path.
    pub cgroup: PathBuf,

    /// Print a JSON object instead of the bare state token.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `state` command.
///
/// Prints `THAWED`, `FROZEN`, or `UNDEFINED` when the kernel exposes no
/// freezer for the cgroup.
///
/// # Errors
///
/// Returns an error if the state file cannot be read or holds an
/// unknown value.
pub fn execute(args: StateArgs, ctx: &Context) -> anyhow::Result<()> {
    let path = ctx.cgroup_path(&args.cgroup);
    let state = ctx
        .freezer()?
        .get_state(&path)
        .with_context(|| format!("reading freezer state of {}", path.display()))?;

    if args.json {
        output::print_json(&output::StateReport::new(&path, state))?;
    } else {
        output::print_line(state.as_str());
    }
    Ok(())
}
