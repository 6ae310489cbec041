//! Dev-dependency operation.
//!
//! The command strings are a contract other tooling may depend on:
//! `<tool> uninstall --save-dev name …` then
//! `<tool> install --save-dev name@version …`, joined with ` && ` when both
//! are needed, package names in sorted order. The registry write is
//! provisional until the command's exit is observed: on failure the previous
//! registry state stands and the next run retries the same diff.

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;

use crate::changeset::{self, DependencyChanges};
use crate::error::Result;
use crate::exec::CommandRunner;
use crate::manifest::Manifest;

pub(super) fn execute(
    target_dir: &Path,
    configured: &BTreeMap<String, String>,
    package_manager: &str,
    runner: &dyn CommandRunner,
) -> Result<DependencyChanges> {
    let mut manifest = Manifest::load(target_dir)?;
    let mut state = manifest.state()?;

    let changes = changeset::diff_dependencies(&state.dev_dependencies, configured);

    if let Some(command) = build_command(package_manager, &changes) {
        runner.run(&command, target_dir)?;
    } else {
        debug!("dev dependencies unchanged; no command to run");
    }

    // Only reached when the guarded command (if any) succeeded.
    state.dev_dependencies = configured.clone();
    manifest.set_state(&state)?;
    manifest.save()?;

    Ok(changes)
}

/// Assemble the package-manager command line for a dependency diff, or
/// `None` when nothing changed.
fn build_command(package_manager: &str, changes: &DependencyChanges) -> Option<String> {
    let mut parts = Vec::new();

    if !changes.to_remove.is_empty() {
        parts.push(format!(
            "{} uninstall --save-dev {}",
            package_manager,
            changes.to_remove.join(" ")
        ));
    }

    if !changes.to_add.is_empty() {
        let tokens: Vec<String> = changes
            .to_add
            .iter()
            .map(|(name, version)| format!("{}@{}", name, version))
            .collect();
        parts.push(format!(
            "{} install --save-dev {}",
            package_manager,
            tokens.join(" ")
        ));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" && "))
    }
}
