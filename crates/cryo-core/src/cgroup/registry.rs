//! Name-keyed table of subsystem controllers.
//!
//! The registry is constructed and owned by its caller; there is no
//! process-wide instance.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use cryo_common::config::FreezeConfig;
use cryo_common::error::Result;
use cryo_common::types::{Resources, Stats};
use nix::unistd::Pid;

use super::{Controller, Freezer};

/// Controllers keyed by [`Controller::name`], iterated in name order.
#[derive(Default)]
pub struct ControllerRegistry {
    controllers: BTreeMap<&'static str, Box<dyn Controller>>,
}

impl fmt::Debug for ControllerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.controllers.keys()).finish()
    }
}

impl ControllerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the filesystem-backed freezer.
    #[must_use]
    pub fn with_defaults(config: FreezeConfig) -> Self {
        let mut registry = Self::new();
        let _ = registry.register(Box::new(Freezer::new(config)));
        registry
    }

    /// Adds a controller, returning any controller it replaced.
    pub fn register(&mut self, controller: Box<dyn Controller>) -> Option<Box<dyn Controller>> {
        let name = controller.name();
        tracing::debug!(name, "registering controller");
        self.controllers.insert(name, controller)
    }

    /// Looks up a controller by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Controller> {
        self.controllers.get(name).map(Box::as_ref)
    }

    /// Names of all registered controllers.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.controllers.keys().copied()
    }

    /// Number of registered controllers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Returns `true` if no controller is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Attaches `pid` through every controller.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first controller error.
    pub fn apply_all(&self, path: &Path, pid: Pid) -> Result<()> {
        for controller in self.controllers.values() {
            controller.apply(path, pid)?;
        }
        Ok(())
    }

    /// Hands `resources` to every controller.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first controller error.
    pub fn set_all(&self, path: &Path, resources: &Resources) -> Result<()> {
        for controller in self.controllers.values() {
            controller.set(path, resources)?;
        }
        Ok(())
    }

    /// Collects statistics from every controller.
    ///
    /// # Errors
    ///
    /// Returns the first controller error.
    pub fn stats(&self, path: &Path) -> Result<Stats> {
        let mut stats = Stats::default();
        for controller in self.controllers.values() {
            controller.get_stats(path, &mut stats)?;
        }
        Ok(stats)
    }
}
