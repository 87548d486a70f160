//! Cgroup controller contract and the freezer subsystem.
//!
//! Every resource subsystem (freezer, cpu, memory, pids, ...) exposes the
//! same [`Controller`] shape so an orchestrator can drive them uniformly
//! through a [`ControllerRegistry`].

pub mod freezer;
pub mod pause;
pub mod registry;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use cryo_common::error::Result;
use cryo_common::types::{FreezerState, Resources, Stats};
use nix::unistd::Pid;

pub use freezer::Freezer;
pub use pause::{Pause, ThreadSleep};
pub use registry::ControllerRegistry;
pub use store::{FsStore, PseudoFileStore};

/// Uniform contract implemented by each cgroup subsystem controller.
///
/// Controllers are stateless: `path` names the cgroup directory for the
/// duration of a call only. Callers must not issue overlapping `set` calls
/// for the same path.
pub trait Controller: Send + Sync {
    /// Identifier used as the registry key.
    fn name(&self) -> &'static str;

    /// Attaches `pid` to the cgroup at `path`.
    ///
    /// # Errors
    ///
    /// Returns the store's write error (missing cgroup, permission).
    fn apply(&self, path: &Path, pid: Pid) -> Result<()>;

    /// Applies the fields of `resources` this subsystem owns.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or cannot be
    /// applied.
    fn set(&self, path: &Path, resources: &Resources) -> Result<()>;

    /// Adds this subsystem's statistics to `stats`.
    ///
    /// # Errors
    ///
    /// Returns an error if statistics files cannot be read.
    fn get_stats(&self, path: &Path, stats: &mut Stats) -> Result<()>;

    /// Reports the freeze state of the cgroup.
    ///
    /// Subsystems without a notion of freezing report
    /// [`FreezerState::Undefined`].
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined.
    fn get_state(&self, _path: &Path) -> Result<FreezerState> {
        Ok(FreezerState::Undefined)
    }
}
