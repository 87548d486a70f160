//! Freezer controller against real files.
//!
//! A temporary directory with `freezer.state` and `cgroup.procs` fixtures
//! stands in for a cgroup v1 freezer directory. Regular files echo back
//! what was written, so a freeze converges on the first attempt.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use cryo_common::config::FreezeConfig;
use cryo_common::error::CryoError;
use cryo_common::types::{FreezerState, Resources, Stats};
use cryo_core::cgroup::{Controller, ControllerRegistry, Freezer};
use nix::unistd::Pid;

// ── Fixtures ─────────────────────────────────────────────────────────

fn cgroup_dir(state: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp cgroup dir");
    fs::write(dir.path().join("freezer.state"), state).expect("state fixture");
    fs::write(dir.path().join("cgroup.procs"), "").expect("procs fixture");
    dir
}

fn read(dir: &Path, file: &str) -> String {
    fs::read_to_string(dir.join(file)).expect("read fixture")
}

fn set(freezer: &Freezer, dir: &Path, state: FreezerState) -> Result<(), CryoError> {
    freezer.set(dir, &Resources::with_freezer(state))
}

// ── Set ──────────────────────────────────────────────────────────────

#[test]
fn freeze_then_thaw_round_trip() {
    let dir = cgroup_dir("THAWED\n");
    let freezer = Freezer::new(FreezeConfig::default());

    set(&freezer, dir.path(), FreezerState::Frozen).unwrap();
    assert_eq!(read(dir.path(), "freezer.state"), "FROZEN");
    assert_eq!(freezer.get_state(dir.path()).unwrap(), FreezerState::Frozen);

    set(&freezer, dir.path(), FreezerState::Thawed).unwrap();
    assert_eq!(read(dir.path(), "freezer.state"), "THAWED");
    assert_eq!(freezer.get_state(dir.path()).unwrap(), FreezerState::Thawed);
}

#[test]
fn undefined_leaves_state_untouched() {
    let dir = cgroup_dir("FROZEN\n");
    let freezer = Freezer::new(FreezeConfig::default());

    set(&freezer, dir.path(), FreezerState::Undefined).unwrap();
    assert_eq!(read(dir.path(), "freezer.state"), "FROZEN\n");
}

#[test]
fn freezing_request_is_rejected_without_writing() {
    let dir = cgroup_dir("THAWED");
    let freezer = Freezer::new(FreezeConfig::default());

    let err = set(&freezer, dir.path(), FreezerState::Freezing).unwrap_err();
    assert!(matches!(err, CryoError::InvalidArgument { .. }));
    assert_eq!(read(dir.path(), "freezer.state"), "THAWED");
}

#[test]
fn freeze_on_missing_cgroup_fails_with_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("gone");
    let freezer = Freezer::new(FreezeConfig::default());

    let err = set(&freezer, &missing, FreezerState::Frozen).unwrap_err();
    assert!(err.is_absent());
    assert!(!missing.exists());
}

// ── GetState ─────────────────────────────────────────────────────────

#[test]
fn state_of_missing_cgroup_is_undefined() {
    let dir = tempfile::tempdir().unwrap();
    let freezer = Freezer::new(FreezeConfig::default());

    assert_eq!(
        freezer.get_state(&dir.path().join("gone")).unwrap(),
        FreezerState::Undefined
    );
}

#[test]
fn state_with_unknown_token_is_error() {
    let dir = cgroup_dir("SLEEPING\n");
    let freezer = Freezer::new(FreezeConfig::default());

    let err = freezer.get_state(dir.path()).unwrap_err();
    assert!(matches!(err, CryoError::UnknownState { .. }));
}

// ── Apply / GetStats ─────────────────────────────────────────────────

#[test]
fn apply_writes_pid() {
    let dir = cgroup_dir("THAWED");
    let freezer = Freezer::new(FreezeConfig::default());

    freezer.apply(dir.path(), Pid::from_raw(4242)).unwrap();
    assert_eq!(read(dir.path(), "cgroup.procs"), "4242");
}

#[test]
fn stats_stay_empty() {
    let dir = cgroup_dir("THAWED");
    let freezer = Freezer::new(FreezeConfig::default());
    let mut stats = Stats::default();

    freezer.get_stats(dir.path(), &mut stats).unwrap();
    assert!(stats.is_empty());
}

// ── Registry ─────────────────────────────────────────────────────────

#[test]
fn registry_drives_filesystem_freezer() {
    let dir = cgroup_dir("THAWED");
    let registry = ControllerRegistry::with_defaults(FreezeConfig::default());

    registry
        .apply_all(dir.path(), Pid::from_raw(99))
        .unwrap();
    registry
        .set_all(dir.path(), &Resources::with_freezer(FreezerState::Frozen))
        .unwrap();

    let freezer = registry.get("freezer").expect("freezer registered");
    assert_eq!(freezer.get_state(dir.path()).unwrap(), FreezerState::Frozen);
    assert_eq!(read(dir.path(), "cgroup.procs"), "99");
    assert!(registry.stats(dir.path()).unwrap().is_empty());
}
