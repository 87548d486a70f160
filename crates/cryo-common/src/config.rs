//! Configuration model for the cryo controller and CLI.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FREEZE_ATTEMPTS, DEFAULT_SETTLE_PAUSE_MS, DEFAULT_THAW_EVERY, DEFAULT_THAW_PAUSE_MS,
    FREEZER_ROOT,
};
use crate::error::{CryoError, Result};

/// Root configuration for the cryo CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CryoConfig {
    /// Mount point of the freezer hierarchy; relative cgroup names
    /// resolve under it.
    pub cgroup_root: PathBuf,
    /// Freeze protocol tuning.
    pub freeze: FreezeConfig,
}

impl Default for CryoConfig {
    fn default() -> Self {
        Self {
            cgroup_root: PathBuf::from(FREEZER_ROOT),
            freeze: FreezeConfig::default(),
        }
    }
}

impl CryoConfig {
    /// Loads and validates a JSON configuration file.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds invalid values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CryoError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`CryoError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        self.freeze.validate()
    }

    /// Resolves a cgroup name to its directory.
    ///
    /// Absolute paths are returned as-is.
    #[must_use]
    pub fn cgroup_path(&self, cgroup: &Path) -> PathBuf {
        if cgroup.is_absolute() {
            cgroup.to_path_buf()
        } else {
            self.cgroup_root.join(cgroup)
        }
    }
}

/// Tuning of the freeze retry protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreezeConfig {
    /// Maximum number of write/read-back rounds.
    pub max_attempts: u32,
    /// Period of the corrective thaw interjection.
    pub thaw_every: u32,
    /// Pause after each interjected thaw, in milliseconds.
    pub thaw_pause_ms: u64,
    /// Pause between reads of a `FREEZING` state, in milliseconds.
    pub settle_pause_ms: u64,
}

impl Default for FreezeConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_FREEZE_ATTEMPTS,
            thaw_every: DEFAULT_THAW_EVERY,
            thaw_pause_ms: DEFAULT_THAW_PAUSE_MS,
            settle_pause_ms: DEFAULT_SETTLE_PAUSE_MS,
        }
    }
}

impl FreezeConfig {
    /// Pause after each interjected thaw.
    #[must_use]
    pub const fn thaw_pause(&self) -> Duration {
        Duration::from_millis(self.thaw_pause_ms)
    }

    /// Pause between reads while the cgroup is `FREEZING`.
    #[must_use]
    pub const fn settle_pause(&self) -> Duration {
        Duration::from_millis(self.settle_pause_ms)
    }

    /// Returns `true` if a corrective thaw precedes the given attempt.
    #[must_use]
    pub const fn thaws_before(&self, attempt: u32) -> bool {
        self.thaw_every != 0 && attempt % self.thaw_every == self.thaw_every - 1
    }

    /// Checks the attempt budget and thaw period are non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`CryoError::Config`] if either value is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(CryoError::Config {
                message: "freeze.max_attempts must be at least 1".into(),
            });
        }
        if self.thaw_every == 0 {
            return Err(CryoError::Config {
                message: "freeze.thaw_every must be at least 1".into(),
            });
        }
        Ok(())
    }
}
