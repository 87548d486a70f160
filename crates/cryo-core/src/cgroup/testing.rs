//! Scripted store and recording pause for protocol tests.

use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use cryo_common::error::{CryoError, Result};

use super::{Pause, PseudoFileStore};

/// Canned answer to a read.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    /// File content.
    Value(&'static str),
    /// Read fails with `ENOENT`.
    Missing,
    /// Read fails with `ENODEV`.
    NoDevice,
    /// Read fails with `EACCES`.
    Denied,
}

/// A store access, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Read(String),
    Write(String, String),
}

/// Store answering reads from a script.
///
/// The last reply repeats once the script runs out. Writes of the value in
/// `deny_writes` fail with `EACCES`.
#[derive(Debug, Default)]
pub struct ScriptedStore {
    replies: Mutex<VecDeque<Reply>>,
    last: Mutex<Option<Reply>>,
    deny_writes: Option<&'static str>,
    ops: Mutex<Vec<Op>>,
}

impl ScriptedStore {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn deny_writes(mut self, value: &'static str) -> Self {
        self.deny_writes = Some(value);
        self
    }

    pub fn ops(&self) -> Vec<Op> {
        self.ops.lock().unwrap().clone()
    }

    pub fn reads(&self) -> usize {
        self.ops()
            .iter()
            .filter(|op| matches!(op, Op::Read(_)))
            .count()
    }

    pub fn writes_of(&self, value: &str) -> usize {
        self.ops()
            .iter()
            .filter(|op| matches!(op, Op::Write(_, v) if v == value))
            .count()
    }

    fn next_reply(&self) -> Reply {
        let mut last = self.last.lock().unwrap();
        if let Some(reply) = self.replies.lock().unwrap().pop_front() {
            *last = Some(reply);
        }
        (*last).unwrap_or(Reply::Missing)
    }
}

fn io_failure(dir: &Path, file: &str, source: io::Error) -> CryoError {
    CryoError::Io {
        path: dir.join(file),
        source,
    }
}

impl PseudoFileStore for ScriptedStore {
    fn read(&self, dir: &Path, file: &str) -> Result<String> {
        self.ops.lock().unwrap().push(Op::Read(file.to_owned()));
        match self.next_reply() {
            Reply::Value(v) => Ok(format!("{v}\n")),
            Reply::Missing => Err(io_failure(
                dir,
                file,
                io::Error::from(io::ErrorKind::NotFound),
            )),
            Reply::NoDevice => Err(io_failure(
                dir,
                file,
                io::Error::from_raw_os_error(nix::errno::Errno::ENODEV as i32),
            )),
            Reply::Denied => Err(io_failure(
                dir,
                file,
                io::Error::from(io::ErrorKind::PermissionDenied),
            )),
        }
    }

    fn write(&self, dir: &Path, file: &str, value: &str) -> Result<()> {
        self.ops
            .lock()
            .unwrap()
            .push(Op::Write(file.to_owned(), value.to_owned()));
        if self.deny_writes == Some(value) {
            return Err(io_failure(
                dir,
                file,
                io::Error::from(io::ErrorKind::PermissionDenied),
            ));
        }
        Ok(())
    }
}

/// Pause that records durations instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingPause {
    pauses: Mutex<Vec<Duration>>,
}

impl RecordingPause {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

impl Pause for RecordingPause {
    fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}
