//! Access to cgroup pseudo-files.
//!
//! Kernel pseudo-files behave like a key-value store keyed by
//! `(cgroup directory, file name)`: no transactions, and other writers may
//! change values at any time.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use cryo_common::error::{CryoError, Result};

/// Read/write access to the pseudo-files of a cgroup directory.
pub trait PseudoFileStore: Send + Sync {
    /// Reads the full content of `file` in the cgroup at `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`CryoError::Io`] if the file cannot be read.
    fn read(&self, dir: &Path, file: &str) -> Result<String>;

    /// Writes `value` to `file` in the cgroup at `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`CryoError::Io`] if the file cannot be written.
    fn write(&self, dir: &Path, file: &str, value: &str) -> Result<()>;
}

/// Store backed by the mounted cgroup filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl PseudoFileStore for FsStore {
    fn read(&self, dir: &Path, file: &str) -> Result<String> {
        let path = dir.join(file);
        let value = fs::read_to_string(&path).map_err(|e| CryoError::Io {
            path: path.clone(),
            source: e,
        })?;
        tracing::trace!(path = %path.display(), value = value.trim(), "read cgroup file");
        Ok(value)
    }

    fn write(&self, dir: &Path, file: &str, value: &str) -> Result<()> {
        let path = dir.join(file);
        // Never create: a missing pseudo-file means a missing cgroup or
        // subsystem, and must surface as ENOENT.
        OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&path)
            .and_then(|mut f| f.write_all(value.as_bytes()))
            .map_err(|e| CryoError::Io {
                path: path.clone(),
                source: e,
            })?;
        tracing::trace!(path = %path.display(), value, "wrote cgroup file");
        Ok(())
    }
}
