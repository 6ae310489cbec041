//! Whole-file copy operation.
//!
//! Distinct destination paths have no ordering dependency, so copies and
//! removals run with rayon parallelism. Failures are collected per path: one
//! bad path does not stop the others, but the operation reports failure if
//! any occurred. The enumeration is sorted before it is persisted or used to
//! compute removals, so parallel completion order never leaks into state.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use log::{debug, warn};
use rayon::prelude::*;

use crate::changeset;
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::scan;

use super::FILES_DIR;

pub(super) fn execute(base_dir: &Path, target_dir: &Path, pattern: &str) -> Result<Vec<String>> {
    let file_root = base_dir.join(FILES_DIR);
    let current = scan::source_paths(&file_root, pattern)?;

    let mut manifest = Manifest::load(target_dir)?;
    let mut state = manifest.state()?;
    let changes = changeset::diff(&state.files, &current);

    let errors: Mutex<Vec<Error>> = Mutex::new(Vec::new());

    current.par_iter().for_each(|relative| {
        if let Err(e) = copy_one(&file_root.join(relative), &target_dir.join(relative)) {
            warn!("{}", e);
            errors.lock().unwrap().push(e);
        }
    });

    changes.to_remove.par_iter().for_each(|relative| {
        debug!("removing no-longer-managed file {}", relative);
        if let Err(e) = remove_one(&target_dir.join(relative)) {
            warn!("{}", e);
            errors.lock().unwrap().push(e);
        }
    });

    let collected = errors.into_inner().unwrap();
    if let Some(first) = collected.into_iter().next() {
        return Err(first);
    }

    state.files = current.clone();
    manifest.set_state(&state)?;
    manifest.save()?;

    Ok(current)
}

fn copy_one(source: &Path, destination: &Path) -> Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::file_op("create directory", parent, e))?;
    }
    fs::copy(source, destination)
        .map(|_| ())
        .map_err(|e| Error::file_op("copy", destination, e))
}

fn remove_one(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        // Already gone; removal is about converging on the target state.
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::file_op("remove", path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn base_with_files(files: &[(&str, &str)]) -> TempDir {
        let base = TempDir::new().unwrap();
        for (relative, content) in files {
            let path = base.path().join(FILES_DIR).join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        base
    }

    fn target() -> TempDir {
        let target = TempDir::new().unwrap();
        fs::write(
            target.path().join("package.json"),
            "{\n  \"name\": \"consumer\"\n}\n",
        )
        .unwrap();
        target
    }

    #[test]
    fn test_copies_files_and_records_them() {
        let base = base_with_files(&[
            ("file1.txt", "one"),
            ("subfolder/file2.txt", "two"),
            ("subfolder/subfolder/file3.txt", "three"),
        ]);
        let dest = target();

        let copied = execute(base.path(), dest.path(), "**/*").unwrap();

        assert_eq!(
            copied,
            vec![
                "file1.txt",
                "subfolder/file2.txt",
                "subfolder/subfolder/file3.txt"
            ]
        );
        assert!(dest.path().join("file1.txt").exists());
        assert!(dest.path().join("subfolder/subfolder/file3.txt").exists());

        let manifest = Manifest::load(dest.path()).unwrap();
        assert_eq!(manifest.state().unwrap().files, copied);
    }

    #[test]
    fn test_removes_files_no_longer_shipped() {
        let base = base_with_files(&[("keep.txt", "k"), ("drop.txt", "d")]);
        let dest = target();
        // A file the target owns; never managed, never touched.
        fs::write(dest.path().join("own.txt"), "mine").unwrap();

        execute(base.path(), dest.path(), "**/*").unwrap();
        assert!(dest.path().join("drop.txt").exists());

        fs::remove_file(base.path().join(FILES_DIR).join("drop.txt")).unwrap();
        let copied = execute(base.path(), dest.path(), "**/*").unwrap();

        assert_eq!(copied, vec!["keep.txt"]);
        assert!(!dest.path().join("drop.txt").exists());
        assert!(dest.path().join("keep.txt").exists());
        assert!(dest.path().join("own.txt").exists());
    }

    #[test]
    fn test_missing_files_dir_clears_managed_set() {
        let base = TempDir::new().unwrap();
        let dest = target();
        let copied = execute(base.path(), dest.path(), "**/*").unwrap();
        assert!(copied.is_empty());
    }

    #[test]
    fn test_glob_limits_what_is_copied() {
        let base = base_with_files(&[("a.js", "a"), ("b.txt", "b")]);
        let dest = target();

        let copied = execute(base.path(), dest.path(), "**/*.js").unwrap();
        assert_eq!(copied, vec!["a.js"]);
        assert!(!dest.path().join("b.txt").exists());
    }
}
