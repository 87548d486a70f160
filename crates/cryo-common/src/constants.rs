//! Pseudo-file names, state tokens, and freeze protocol defaults.

/// Cgroup v1 freezer hierarchy mount point.
pub const FREEZER_ROOT: &str = "/sys/fs/cgroup/freezer";

/// Registry name of the freezer subsystem.
pub const FREEZER_SUBSYSTEM: &str = "freezer";

/// Per-cgroup freezer state pseudo-file.
pub const FREEZER_STATE_FILE: &str = "freezer.state";

/// Per-cgroup process membership pseudo-file.
pub const CGROUP_PROCS_FILE: &str = "cgroup.procs";

/// Kernel token for a thawed cgroup.
pub const STATE_THAWED: &str = "THAWED";

/// Kernel token for a cgroup that is still being frozen.
pub const STATE_FREEZING: &str = "FREEZING";

/// Kernel token for a frozen cgroup.
pub const STATE_FROZEN: &str = "FROZEN";

/// Label used when no freezer information is available.
pub const STATE_UNDEFINED: &str = "UNDEFINED";

/// Maximum number of write/read-back rounds when freezing.
pub const DEFAULT_FREEZE_ATTEMPTS: u32 = 1000;

/// A corrective thaw is interjected before every attempt whose index
/// modulo this value equals `DEFAULT_THAW_EVERY - 1`.
pub const DEFAULT_THAW_EVERY: u32 = 50;

/// Pause after each interjected thaw, in milliseconds.
pub const DEFAULT_THAW_PAUSE_MS: u64 = 10;

/// Pause between reads while the state reads `FREEZING`, in milliseconds.
pub const DEFAULT_SETTLE_PAUSE_MS: u64 = 1;

/// Binary name for the CLI.
pub const BIN_NAME: &str = "cryo";
