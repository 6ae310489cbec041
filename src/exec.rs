//! External command execution boundary.
//!
//! Dependency install/uninstall is delegated to the target's package manager
//! through a shell command string. The core only ever sees the
//! [`CommandRunner`] trait; tests substitute a recorder, production uses
//! [`ShellRunner`]. Commands are long-running and are awaited to completion
//! (success or failure) before the registry update they guard is persisted.

use std::path::Path;
use std::process::Command;

use log::info;

use crate::error::{Error, Result};

/// Executes a shell command string in a working directory.
pub trait CommandRunner: std::fmt::Debug + Send + Sync {
    /// Run `command` in `cwd`, blocking until it exits. Non-zero exit is an
    /// error; output streams are inherited from the parent process.
    fn run(&self, command: &str, cwd: &Path) -> Result<()>;
}

/// Runs commands through the platform shell (`sh -c` / `cmd /C`), with
/// stdio inherited so package-manager progress reaches the user directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, cwd: &Path) -> Result<()> {
        info!("running: {}", command);

        let mut shell = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.args(["/C", command]);
            c
        } else {
            let mut c = Command::new("sh");
            c.args(["-c", command]);
            c
        };

        let status = shell
            .current_dir(cwd)
            .status()
            .map_err(|e| Error::CommandSpawn {
                command: command.to_string(),
                source: e,
            })?;

        if !status.success() {
            return Err(Error::CommandFailed {
                command: command.to_string(),
                code: status.code().unwrap_or(-1),
            });
        }

        Ok(())
    }
}
