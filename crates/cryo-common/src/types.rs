//! Domain primitive types used across the cryo workspace.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{STATE_FREEZING, STATE_FROZEN, STATE_THAWED, STATE_UNDEFINED};
use crate::error::CryoError;

/// Freeze state of a cgroup.
///
/// As an observation, `Freezing` is transient and `Undefined` means no
/// usable freezer information exists. As a request, `Undefined` means
/// "leave as-is" and `Freezing` is not a valid target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FreezerState {
    /// No freezer information, or no change requested.
    #[default]
    Undefined,
    /// All processes in the group are runnable.
    Thawed,
    /// The kernel is still stopping processes in the group.
    Freezing,
    /// All processes in the group are stopped.
    Frozen,
}

impl FreezerState {
    /// Returns the kernel token for this state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => STATE_UNDEFINED,
            Self::Thawed => STATE_THAWED,
            Self::Freezing => STATE_FREEZING,
            Self::Frozen => STATE_FROZEN,
        }
    }
}

impl fmt::Display for FreezerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FreezerState {
    type Err = CryoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            STATE_UNDEFINED | "" => Ok(Self::Undefined),
            STATE_THAWED => Ok(Self::Thawed),
            STATE_FREEZING => Ok(Self::Freezing),
            STATE_FROZEN => Ok(Self::Frozen),
            _ => Err(CryoError::InvalidArgument {
                value: s.to_owned(),
            }),
        }
    }
}

/// Resource configuration handed to every controller's `set`.
///
/// Each controller reads only the fields it owns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    /// Desired freezer state.
    pub freezer: FreezerState,
}

impl Resources {
    /// Creates a resource configuration requesting the given freezer state.
    #[must_use]
    pub const fn with_freezer(freezer: FreezerState) -> Self {
        Self { freezer }
    }
}

/// Statistics accumulator filled by controllers.
///
/// Entries are keyed `"<subsystem>.<key>"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stats {
    entries: BTreeMap<String, u64>,
}

impl Stats {
    /// Records a value for `subsystem.key`, replacing any earlier value.
    pub fn insert(&mut self, subsystem: &str, key: &str, value: u64) {
        let _ = self.entries.insert(format!("{subsystem}.{key}"), value);
    }

    /// Returns the value recorded for `subsystem.key`.
    #[must_use]
    pub fn get(&self, subsystem: &str, key: &str) -> Option<u64> {
        self.entries.get(&format!("{subsystem}.{key}")).copied()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
