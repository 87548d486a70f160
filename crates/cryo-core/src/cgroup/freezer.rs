//! Freezer subsystem controller.
//!
//! Freezing is asynchronous in the kernel: after `FROZEN` is written,
//! `freezer.state` may read `FREEZING` for as long as new processes keep
//! joining the cgroup (by fork or through `cgroup.procs`). The
//! controller therefore rewrites `FROZEN` and reads back until the kernel
//! converges, periodically thawing for a moment to break the churn. Any
//! failed freeze leaves the cgroup thawed on a best-effort basis, since a
//! cgroup stuck in `FROZEN` or `FREEZING` blocks teardown.

use std::path::Path;

use cryo_common::config::FreezeConfig;
use cryo_common::constants::{
    CGROUP_PROCS_FILE, FREEZER_STATE_FILE, FREEZER_SUBSYSTEM, STATE_FREEZING, STATE_FROZEN,
    STATE_THAWED,
};
use cryo_common::error::{CryoError, Result};
use cryo_common::types::{FreezerState, Resources, Stats};
use nix::unistd::Pid;

use super::{Controller, FsStore, Pause, PseudoFileStore, ThreadSleep};

/// Controller for the cgroup v1 freezer subsystem.
#[derive(Debug, Clone, Default)]
pub struct Freezer<S = FsStore, P = ThreadSleep> {
    store: S,
    pause: P,
    config: FreezeConfig,
}

impl Freezer {
    /// Creates a freezer operating on the mounted cgroup filesystem.
    #[must_use]
    pub const fn new(config: FreezeConfig) -> Self {
        Self::with_parts(FsStore, ThreadSleep, config)
    }
}

impl<S: PseudoFileStore, P: Pause> Freezer<S, P> {
    /// Creates a freezer over an arbitrary store and pause implementation.
    #[must_use]
    pub const fn with_parts(store: S, pause: P, config: FreezeConfig) -> Self {
        Self {
            store,
            pause,
            config,
        }
    }

    fn write_state(&self, path: &Path, state: &str) -> Result<()> {
        self.store.write(path, FREEZER_STATE_FILE, state)
    }

    /// Freezes the cgroup, thawing it again if freezing fails.
    fn freeze(&self, path: &Path) -> Result<()> {
        let result = self.retry_freeze(path);
        if let Err(err) = &result {
            if let Err(thaw_err) = self.write_state(path, STATE_THAWED) {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    thaw_error = %thaw_err,
                    "failed to thaw cgroup after unsuccessful freeze"
                );
            }
        }
        result
    }

    fn retry_freeze(&self, path: &Path) -> Result<()> {
        for attempt in 0..self.config.max_attempts {
            if self.config.thaws_before(attempt) {
                tracing::debug!(attempt, path = %path.display(), "thawing briefly to settle freeze");
                if let Err(e) = self.write_state(path, STATE_THAWED) {
                    tracing::debug!(attempt, error = %e, "interim thaw failed");
                }
                self.pause.pause(self.config.thaw_pause());
            }

            self.write_state(path, STATE_FROZEN)?;

            let state = self.store.read(path, FREEZER_STATE_FILE)?;
            match state.trim() {
                STATE_FREEZING => {}
                STATE_FROZEN => {
                    if attempt > 1 {
                        tracing::debug!(attempts = attempt, "frozen after retries");
                    }
                    return Ok(());
                }
                other => {
                    return Err(CryoError::UnexpectedState {
                        state: other.to_owned(),
                    });
                }
            }
        }
        Err(CryoError::UnableToFreeze {
            attempts: self.config.max_attempts,
        })
    }

    /// Reads the freezer state, waiting out `FREEZING`.
    fn stable_state(&self, path: &Path) -> Result<FreezerState> {
        loop {
            let state = match self.store.read(path, FREEZER_STATE_FILE) {
                Ok(state) => state,
                Err(e) if e.is_absent() => {
                    tracing::debug!(path = %path.display(), "freezer not available");
                    return Ok(FreezerState::Undefined);
                }
                Err(e) => return Err(e),
            };
            match state.trim() {
                STATE_THAWED => return Ok(FreezerState::Thawed),
                STATE_FROZEN => return Ok(FreezerState::Frozen),
                STATE_FREEZING => self.pause.pause(self.config.settle_pause()),
                _ => return Err(CryoError::UnknownState { state }),
            }
        }
    }
}

impl<S: PseudoFileStore, P: Pause> Controller for Freezer<S, P> {
    fn name(&self) -> &'static str {
        FREEZER_SUBSYSTEM
    }

    fn apply(&self, path: &Path, pid: Pid) -> Result<()> {
        self.store.write(path, CGROUP_PROCS_FILE, &pid.to_string())?;
        tracing::debug!(pid = pid.as_raw(), path = %path.display(), "added process to cgroup");
        Ok(())
    }

    fn set(&self, path: &Path, resources: &Resources) -> Result<()> {
        match resources.freezer {
            FreezerState::Undefined => Ok(()),
            FreezerState::Thawed => self.write_state(path, STATE_THAWED),
            FreezerState::Frozen => self.freeze(path),
            invalid @ FreezerState::Freezing => Err(CryoError::InvalidArgument {
                value: invalid.to_string(),
            }),
        }
    }

    fn get_stats(&self, _path: &Path, _stats: &mut Stats) -> Result<()> {
        Ok(())
    }

    fn get_state(&self, path: &Path) -> Result<FreezerState> {
        self.stable_state(path)
    }
}
