//! Managed-block operation: plan, strip removals, reconcile destinations,
//! persist.
//!
//! Planning resolves the comment style of every destination *and* every
//! pending removal up front, so an unmapped extension aborts the run before
//! any file is touched. After that, per-file reconciliation is sequential
//! internally (read, compute, write) while distinct files run in parallel.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, warn};
use rayon::prelude::*;

use crate::block::{self, render_block};
use crate::changeset;
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::newline::NewlineStyle;
use crate::scan;
use crate::style::{CommentStyle, StyleRegistry};

use super::BLOCKS_DIR;

/// Filename prefix stripped when mapping a block source to its destination.
///
/// npm refuses to publish certain dotfiles, so a base package ships
/// `_m0_.gitignore` and the target receives `.gitignore`. The prefix is part
/// of the wire format.
pub const SOURCE_PREFIX: &str = "_m0_";

struct ApplyPlan<'s> {
    source: PathBuf,
    destination: PathBuf,
    style: &'s CommentStyle,
}

struct StripPlan<'s> {
    destination: PathBuf,
    style: &'s CommentStyle,
}

pub(super) fn execute(
    base_dir: &Path,
    target_dir: &Path,
    pattern: &str,
    styles: &StyleRegistry,
) -> Result<Vec<String>> {
    let block_root = base_dir.join(BLOCKS_DIR);
    let sources = scan::source_paths(&block_root, pattern)?;

    let destinations: Vec<String> = sources
        .iter()
        .map(|relative| relative.replacen(SOURCE_PREFIX, "", 1))
        .collect();

    let mut seen = BTreeSet::new();
    for destination in &destinations {
        if !seen.insert(destination.as_str()) {
            return Err(Error::Config {
                message: format!(
                    "two block sources map to the same destination '{}'",
                    destination
                ),
                hint: Some(format!(
                    "rename one of them; the '{}' prefix is stripped when mapping",
                    SOURCE_PREFIX
                )),
            });
        }
    }

    let mut manifest = Manifest::load(target_dir)?;
    let mut state = manifest.state()?;
    let removals = changeset::diff(&state.blocks, &destinations).to_remove;

    // Resolve every style before touching any file: an unmapped extension
    // must abort the run, not skip the file.
    let strip_plans: Vec<StripPlan> = removals
        .iter()
        .map(|relative| {
            Ok(StripPlan {
                destination: target_dir.join(relative),
                style: styles.resolve(Path::new(relative))?,
            })
        })
        .collect::<Result<_>>()?;

    let apply_plans: Vec<ApplyPlan> = sources
        .iter()
        .zip(&destinations)
        .map(|(source, destination)| {
            Ok(ApplyPlan {
                source: block_root.join(source),
                destination: target_dir.join(destination),
                style: styles.resolve(Path::new(destination))?,
            })
        })
        .collect::<Result<_>>()?;

    let errors: Mutex<Vec<Error>> = Mutex::new(Vec::new());

    strip_plans.par_iter().for_each(|plan| {
        if let Err(e) = strip_file(&plan.destination, plan.style) {
            warn!("{}", e);
            errors.lock().unwrap().push(e);
        }
    });

    apply_plans.par_iter().for_each(|plan| {
        if let Err(e) = reconcile_file(&plan.source, &plan.destination, plan.style) {
            warn!("{}", e);
            errors.lock().unwrap().push(e);
        }
    });

    let collected = errors.into_inner().unwrap();
    if let Some(first) = collected.into_iter().next() {
        return Err(first);
    }

    let mut persisted = destinations;
    persisted.sort();
    state.blocks = persisted.clone();
    manifest.set_state(&state)?;
    manifest.save()?;

    Ok(persisted)
}

/// Reconcile one destination file against one block source.
fn reconcile_file(source: &Path, destination: &Path, style: &CommentStyle) -> Result<()> {
    let raw_source =
        fs::read_to_string(source).map_err(|e| Error::file_op("read", source, e))?;

    let existing = match fs::read_to_string(destination) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(Error::file_op("read", destination, e)),
    };

    let newline = NewlineStyle::resolve(&existing, &raw_source);
    let source_text = raw_source.replace(block::NEWLINE_TOKEN, newline.as_str());

    let rendered: Vec<String> = block::block_bodies(&source_text, style)
        .iter()
        .map(|body| render_block(body, style, newline))
        .collect();

    let updated = block::apply_blocks(&existing, style, &rendered, newline);

    if updated != existing || !destination.exists() {
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::file_op("create directory", parent, e))?;
        }
        fs::write(destination, updated).map_err(|e| Error::file_op("write", destination, e))?;
    } else {
        debug!("{} already up to date", destination.display());
    }

    Ok(())
}

/// Remove all managed blocks from a file that left management.
fn strip_file(destination: &Path, style: &CommentStyle) -> Result<()> {
    let existing = match fs::read_to_string(destination) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                "{} no longer exists; nothing to strip",
                destination.display()
            );
            return Ok(());
        }
        Err(e) => return Err(Error::file_op("read", destination, e)),
    };

    if !style.matcher().is_match(&existing) {
        debug!("{} carries no managed blocks", destination.display());
        return Ok(());
    }

    let stripped = block::strip_blocks(&existing, style);
    fs::write(destination, stripped).map_err(|e| Error::file_op("write", destination, e))
}
