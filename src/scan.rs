//! Source-tree enumeration for the base package's `files/` and `blocks/`
//! directories.
//!
//! `walkdir` enumerates, `glob::Pattern` filters. Dotfiles are included:
//! the whole point of a base package is shipping things like `.gitignore`
//! and `.editorconfig`. Results are relative, `/`-separated, and sorted —
//! enumeration order must never reach the persisted registry.

use std::path::Path;

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Enumerate the files under `root` whose relative paths match `pattern`.
///
/// Returns sorted, `/`-separated relative paths. A missing `root` yields an
/// empty list: a base package without a `files/` (or `blocks/`) tree simply
/// manages nothing of that kind.
pub fn source_paths(root: &Path, pattern: &str) -> Result<Vec<String>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let pattern = Pattern::new(pattern)?;
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    };

    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            let io = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walk error"));
            Error::file_op("scan", root, io)
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .expect("walkdir yields paths under its root");
        let relative = to_unix_path(relative);

        if pattern.matches_with(&relative, options) {
            paths.push(relative);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Render a relative path with `/` separators regardless of platform; the
/// persisted registry and the style map both use the `/` form.
fn to_unix_path(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(&component.as_os_str().to_string_lossy());
    }
    out
}
