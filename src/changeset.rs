//! # Change-Set Tracking
//!
//! Pure diffs between the previously-persisted managed set and the current
//! one. Comparison is order-insensitive, but every emitted list is sorted:
//! discovery runs in parallel and completes in nondeterministic order, and
//! that order must never leak into persisted state or into decisions about
//! which files to delete.

use std::collections::{BTreeMap, BTreeSet};

/// Additions and removals between two managed path sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Paths present now but not before, sorted.
    pub to_add: Vec<String>,
    /// Paths present before but not now, sorted.
    pub to_remove: Vec<String>,
}

impl ChangeSet {
    /// True when nothing changed.
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Diff two path lists as sets.
pub fn diff(previous: &[String], current: &[String]) -> ChangeSet {
    let previous: BTreeSet<&str> = previous.iter().map(String::as_str).collect();
    let current: BTreeSet<&str> = current.iter().map(String::as_str).collect();

    ChangeSet {
        to_add: current
            .difference(&previous)
            .map(|p| p.to_string())
            .collect(),
        to_remove: previous
            .difference(&current)
            .map(|p| p.to_string())
            .collect(),
    }
}

/// Dependency changes between the last-installed map and the configured one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyChanges {
    /// `(name, version)` pairs to install: new packages and version changes,
    /// sorted by name.
    pub to_add: Vec<(String, String)>,
    /// Package names to uninstall, sorted.
    pub to_remove: Vec<String>,
}

impl DependencyChanges {
    /// True when the installed set already matches the configured one.
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Diff two dependency maps. A package appears in `to_add` when it is new
/// or when its configured version differs from the installed one; it appears
/// in `to_remove` when it is no longer configured at all.
pub fn diff_dependencies(
    previous: &BTreeMap<String, String>,
    current: &BTreeMap<String, String>,
) -> DependencyChanges {
    let to_add = current
        .iter()
        .filter(|(name, version)| previous.get(*name) != Some(*version))
        .map(|(name, version)| (name.clone(), version.clone()))
        .collect();

    let to_remove = previous
        .keys()
        .filter(|name| !current.contains_key(*name))
        .cloned()
        .collect();

    DependencyChanges { to_add, to_remove }
}
