//! Blocking pauses used by the freezer protocols.

use std::time::Duration;

/// Blocks the calling thread for a while.
pub trait Pause: Send + Sync {
    /// Pauses for `duration`.
    fn pause(&self, duration: Duration);
}

/// Pauses with [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
