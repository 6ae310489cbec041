//! Shared test utilities for integration and E2E tests.
//!
//! Provides a base-package/target-package fixture pair plus command runners
//! that record or fail instead of spawning a real package manager.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then:
//!
//! ```rust,ignore
//! let fixture = TestFixture::new();
//! fixture.write_base_file("file1.txt", "one");
//! let (syncer, commands) = fixture.syncer_with_recorder(fixture.config());
//! syncer.sync().unwrap();
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use assert_fs::TempDir;

use base_sync::config::SyncConfig;
use base_sync::error::{Error, Result};
use base_sync::exec::CommandRunner;
use base_sync::manifest::{ManagedState, Manifest};
use base_sync::sync::{SyncOptions, Syncer};

/// A command runner that records command strings instead of spawning them.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    commands: Arc<Mutex<Vec<String>>>,
}

impl RecordingRunner {
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let runner = Self::default();
        let commands = runner.commands.clone();
        (runner, commands)
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str, _cwd: &Path) -> Result<()> {
        self.commands.lock().unwrap().push(command.to_string());
        Ok(())
    }
}

/// A command runner whose commands always fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingRunner;

impl CommandRunner for FailingRunner {
    fn run(&self, command: &str, _cwd: &Path) -> Result<()> {
        Err(Error::CommandFailed {
            command: command.to_string(),
            code: 1,
        })
    }
}

/// A base package and a target package, both on disk.
pub struct TestFixture {
    pub base: TempDir,
    pub target: TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// A fresh fixture: empty base, target with a minimal `package.json`.
    pub fn new() -> Self {
        let base = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        fs::write(
            target.path().join("package.json"),
            "{\n  \"name\": \"consumer\",\n  \"version\": \"1.0.0\"\n}\n",
        )
        .unwrap();
        Self { base, target }
    }

    /// Default configuration (everything synced, built-in comment styles).
    pub fn config(&self) -> SyncConfig {
        SyncConfig::default()
    }

    /// Default configuration plus a dev-dependency map.
    pub fn config_with_deps(&self, deps: &[(&str, &str)]) -> SyncConfig {
        let mut config = SyncConfig::default();
        config.dev_dependencies = deps
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>();
        config
    }

    pub fn options(&self) -> SyncOptions {
        SyncOptions {
            base_dir: self.base.path().to_path_buf(),
            target_dir: self.target.path().to_path_buf(),
        }
    }

    /// Build a syncer whose dependency commands are recorded, not run.
    pub fn syncer_with_recorder(&self, config: SyncConfig) -> (Syncer, Arc<Mutex<Vec<String>>>) {
        let (runner, commands) = RecordingRunner::new();
        let syncer = Syncer::with_runner(config, self.options(), Box::new(runner)).unwrap();
        (syncer, commands)
    }

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Add a whole-file source under `<base>/files/`.
    pub fn write_base_file(&self, relative: &str, content: &str) {
        Self::write(&self.base.path().join("files"), relative, content);
    }

    /// Add a block source under `<base>/blocks/`.
    pub fn write_block(&self, relative: &str, content: &str) {
        Self::write(&self.base.path().join("blocks"), relative, content);
    }

    /// Add a file to the target package directly.
    pub fn write_target_file(&self, relative: &str, content: &str) {
        Self::write(self.target.path(), relative, content);
    }

    pub fn remove_base_file(&self, relative: &str) {
        fs::remove_file(self.base.path().join("files").join(relative)).unwrap();
    }

    pub fn remove_block(&self, relative: &str) {
        fs::remove_file(self.base.path().join("blocks").join(relative)).unwrap();
    }

    pub fn target_path(&self, relative: &str) -> PathBuf {
        self.target.path().join(relative)
    }

    pub fn read_target(&self, relative: &str) -> String {
        fs::read_to_string(self.target_path(relative)).unwrap()
    }

    /// The persisted `_m0` registry of the target package.
    pub fn state(&self) -> ManagedState {
        Manifest::load(self.target.path())
            .unwrap()
            .state()
            .unwrap()
    }
}
