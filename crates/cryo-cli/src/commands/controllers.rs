//! `cryo controllers` — List registered controllers.

use super::Context;
use crate::output;

/// Executes the `controllers` command.
///
/// # Errors
///
/// Never fails; the signature matches the other commands.
#[allow(clippy::unnecessary_wraps)]
pub fn execute(ctx: &Context) -> anyhow::Result<()> {
    for name in ctx.registry.names() {
        output::print_line(name);
    }
    Ok(())
}
