//! CLI command definitions and dispatch.

pub mod attach;
pub mod controllers;
pub mod freeze;
pub mod state;
pub mod stats;
pub mod thaw;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use cryo_common::config::CryoConfig;
use cryo_common::constants::{BIN_NAME, FREEZER_SUBSYSTEM};
use cryo_core::cgroup::{Controller, ControllerRegistry};

/// Freeze and thaw cgroups, and inspect their freezer state.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Freezer hierarchy mount point; relative cgroup names resolve under it.
    #[arg(long, global = true, env = "CRYO_ROOT")]
    pub root: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(long, global = true, env = "CRYO_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Attach a process to a cgroup.
    Attach(attach::AttachArgs),
    /// Freeze every process in a cgroup.
    Freeze(freeze::FreezeArgs),
    /// Thaw every process in a cgroup.
    Thaw(thaw::ThawArgs),
    /// Print the stable freezer state of a cgroup.
    State(state::StateArgs),
    /// Print controller statistics of a cgroup as JSON.
    Stats(stats::StatsArgs),
    /// List registered controllers.
    Controllers,
}

/// Resolved configuration and controllers shared by all commands.
#[derive(Debug)]
pub struct Context {
    /// Effective configuration.
    pub config: CryoConfig,
    /// Registered subsystem controllers.
    pub registry: ControllerRegistry,
}

impl Context {
    /// Builds the context from CLI flags, a config file, and defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded.
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => CryoConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => CryoConfig::default(),
        };
        if let Some(root) = &cli.root {
            config.cgroup_root.clone_from(root);
        }
        let registry = ControllerRegistry::with_defaults(config.freeze);
        Ok(Self { config, registry })
    }

    /// Resolves a cgroup argument to its directory.
    pub fn cgroup_path(&self, cgroup: &Path) -> PathBuf {
        self.config.cgroup_path(cgroup)
    }

    /// Returns the freezer controller.
    ///
    /// # Errors
    ///
    /// Returns an error if no freezer is registered.
    pub fn freezer(&self) -> anyhow::Result<&dyn Controller> {
        self.registry
            .get(FREEZER_SUBSYSTEM)
            .context("freezer controller is not registered")
    }
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    ensure_supported()?;
    let ctx = Context::from_cli(&cli)?;
    match cli.command {
        Command::Attach(args) => attach::execute(args, &ctx),
        Command::Freeze(args) => freeze::execute(args, &ctx),
        Command::Thaw(args) => thaw::execute(args, &ctx),
        Command::State(args) => state::execute(args, &ctx),
        Command::Stats(args) => stats::execute(args, &ctx),
        Command::Controllers => controllers::execute(&ctx),
    }
}

fn ensure_supported() -> anyhow::Result<()> {
    if cfg!(target_os = "linux") {
        Ok(())
    } else {
        anyhow::bail!("Linux required for cgroup freezer operations")
    }
}
