//! Unified error types for the cryo workspace.
//!
//! Store I/O failures keep the original `std::io::Error` untouched so callers
//! can inspect the OS error. Every other failure kind has its own variant.

use std::io;
use std::path::PathBuf;

use nix::errno::Errno;
use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CryoError {
    /// An I/O operation on a cgroup pseudo-file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The kernel reported a state other than `FREEZING` or `FROZEN`
    /// while a freeze was in progress.
    #[error("unexpected state {state} while freezing")]
    UnexpectedState {
        /// Trimmed content of the state file.
        state: String,
    },

    /// The state file holds a value outside the known set.
    #[error("unknown freezer.state {state:?}")]
    UnknownState {
        /// Raw content of the state file.
        state: String,
    },

    /// The cgroup never left `FREEZING` within the attempt budget.
    #[error("unable to freeze after {attempts} attempts")]
    UnableToFreeze {
        /// Number of freeze attempts performed.
        attempts: u32,
    },

    /// A desired freezer state that cannot be requested.
    #[error("invalid argument '{value}' to freezer.state")]
    InvalidArgument {
        /// The rejected value.
        value: String,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

impl CryoError {
    /// Returns `true` if this is an I/O error meaning the pseudo-file or its
    /// device is not present (`ENOENT` or `ENODEV`).
    ///
    /// Kernels without the freezer subsystem, or cgroups that were already
    /// removed, fail this way.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Io { source, .. } => {
                source.kind() == io::ErrorKind::NotFound
                    || source.raw_os_error() == Some(Errno::ENODEV as i32)
            }
            _ => false,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CryoError>;
