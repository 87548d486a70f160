//! # cryo-core
//!
//! Cgroup freezer controller for container runtimes.
//!
//! This crate provides:
//! - **Controller contract**: the [`cgroup::Controller`] trait every
//!   resource subsystem implements, and an explicitly owned
//!   [`cgroup::ControllerRegistry`] keyed by subsystem name.
//! - **Freezer**: a bounded, self-correcting freeze protocol that survives
//!   membership churn, plus state queries that wait out `FREEZING`.
//! - **Seams**: the [`cgroup::PseudoFileStore`] and [`cgroup::Pause`]
//!   traits, so the protocols run against the kernel or a scripted fake.
//!
//! The controller holds no state between calls; the kernel's
//! `freezer.state` file is the single source of truth.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod cgroup;
