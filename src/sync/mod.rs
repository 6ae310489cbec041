//! # Reconciliation Driver
//!
//! [`Syncer`] orchestrates the three synchronization operations against a
//! target package:
//!
//! 1. [`Syncer::copy_files`] — whole-file copies from `<base>/files/`.
//! 2. [`Syncer::create_blocks`] — managed blocks from `<base>/blocks/`.
//! 3. [`Syncer::install_dev_dependencies`] — dev-dependency commands.
//!
//! All three follow the same shape: compute the current set, diff against
//! the persisted previous set, apply additions, apply removals, persist the
//! new set (sorted). The base and target directories are supplied
//! explicitly at construction; nothing is discovered by walking relative
//! install locations.
//!
//! Every operation is idempotent. A crash between applying effects and
//! persisting the registry leaves the registry at its last
//! successfully-written state, and the next run repairs the difference.

mod blocks;
mod copy;
mod deps;

use std::path::PathBuf;

use log::info;

use crate::changeset::DependencyChanges;
use crate::config::SyncConfig;
use crate::error::Result;
use crate::exec::{CommandRunner, ShellRunner};
use crate::manifest::Manifest;
use crate::style::StyleRegistry;

/// Subdirectory of the base package holding whole-file copies.
pub const FILES_DIR: &str = "files";

/// Subdirectory of the base package holding block sources.
pub const BLOCKS_DIR: &str = "blocks";

/// Where to read sources from and where to write them to.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Root of the base package (contains `files/`, `blocks/`).
    pub base_dir: PathBuf,
    /// Root of the target package (contains `package.json`).
    pub target_dir: PathBuf,
}

/// What a full synchronization run did.
#[derive(Debug, Clone, Default)]
pub struct SyncSummary {
    /// Relative paths now copied as whole files, sorted.
    pub files: Vec<String>,
    /// Relative paths now carrying managed blocks, sorted.
    pub blocks: Vec<String>,
    /// Dependency changes applied through the package manager.
    pub dependency_changes: DependencyChanges,
}

/// The reconciliation driver.
#[derive(Debug)]
pub struct Syncer {
    config: SyncConfig,
    options: SyncOptions,
    styles: StyleRegistry,
    runner: Box<dyn CommandRunner>,
}

impl Syncer {
    /// Build a driver that runs dependency commands through the platform
    /// shell.
    pub fn new(config: SyncConfig, options: SyncOptions) -> Result<Self> {
        Self::with_runner(config, options, Box::new(ShellRunner))
    }

    /// Build a driver with a custom command runner (tests record commands
    /// instead of spawning a package manager).
    pub fn with_runner(
        config: SyncConfig,
        options: SyncOptions,
        runner: Box<dyn CommandRunner>,
    ) -> Result<Self> {
        let styles = config.style_registry()?;

        // Surface the "no parent package" case at construction, before any
        // operation gets a chance to write.
        Manifest::load(&options.target_dir)?;

        Ok(Self {
            config,
            options,
            styles,
            runner,
        })
    }

    /// The configuration this driver runs with.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Copy whole files from `<base>/files/` into the target, removing
    /// previously-copied files the base no longer ships. Returns the sorted
    /// list of currently-copied paths.
    pub fn copy_files(&self) -> Result<Vec<String>> {
        copy::execute(
            &self.options.base_dir,
            &self.options.target_dir,
            &self.config.files,
        )
    }

    /// Reconcile managed blocks from `<base>/blocks/` into the target,
    /// stripping blocks from files the base no longer manages. Returns the
    /// sorted list of currently-managed paths.
    pub fn create_blocks(&self) -> Result<Vec<String>> {
        blocks::execute(
            &self.options.base_dir,
            &self.options.target_dir,
            &self.config.blocks.src,
            &self.styles,
        )
    }

    /// Bring the target's dev dependencies in line with the configuration,
    /// issuing package-manager commands as needed.
    pub fn install_dev_dependencies(&self) -> Result<DependencyChanges> {
        deps::execute(
            &self.options.target_dir,
            &self.config.dev_dependencies,
            &self.config.package_manager,
            self.runner.as_ref(),
        )
    }

    /// Run all three operations in order.
    pub fn sync(&self) -> Result<SyncSummary> {
        let files = self.copy_files()?;
        info!("synchronized {} whole file(s)", files.len());

        let blocks = self.create_blocks()?;
        info!("reconciled blocks in {} file(s)", blocks.len());

        let dependency_changes = self.install_dev_dependencies()?;
        if dependency_changes.is_empty() {
            info!("dev dependencies already up to date");
        } else {
            info!(
                "dev dependencies: {} added/updated, {} removed",
                dependency_changes.to_add.len(),
                dependency_changes.to_remove.len()
            );
        }

        Ok(SyncSummary {
            files,
            blocks,
            dependency_changes,
        })
    }
}
