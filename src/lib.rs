//! # Base Synchronization Library
//!
//! This library provides the core functionality for synchronizing shared
//! configuration artifacts from a "base" package into the packages that
//! depend on it. It is designed to be used by the `base-sync` command-line
//! tool but can also be driven programmatically.
//!
//! ## Quick Example
//!
//! ```
//! use base_sync::block::{apply_blocks, render_block};
//! use base_sync::newline::NewlineStyle;
//! use base_sync::style::CommentStyle;
//!
//! let style = CommentStyle::new("#! m0").unwrap();
//!
//! // A host file the user owns, with no managed blocks yet.
//! let host = "build/\n";
//!
//! // Render the base package's block source and adopt the file.
//! let rendered = render_block("node_modules", &style, NewlineStyle::Lf);
//! let adopted = apply_blocks(host, &style, &[rendered], NewlineStyle::Lf);
//!
//! assert!(adopted.starts_with("#! m0-start\n"));
//! assert!(adopted.ends_with("build/\n"));
//!
//! // Running the same reconciliation again changes nothing.
//! let rendered = render_block("node_modules", &style, NewlineStyle::Lf);
//! let again = apply_blocks(&adopted, &style, &[rendered], NewlineStyle::Lf);
//! assert_eq!(adopted, again);
//! ```
//!
//! ## Core Concepts
//!
//! - **Comment styles (`style`)**: derive the literal open/close marker
//!   lines for a file type from a delimiter template, and map extensions to
//!   styles.
//! - **Managed blocks (`block`)**: locate, synthesize, and reconcile
//!   delimiter-bounded regions of generated text inside host files, leaving
//!   every other byte alone.
//! - **Change sets (`changeset`)**: diff the previously-persisted managed
//!   set against the current one to drive cleanup of orphaned files, blocks
//!   and dependencies.
//! - **The registry (`manifest`)**: the `_m0` key of the target package's
//!   `package.json`, recording what is currently managed.
//! - **The driver (`sync`)**: orchestrates whole-file copies, block
//!   reconciliation and dev-dependency commands against an explicit pair of
//!   base/target directories.
//!
//! Every operation is idempotent: running a synchronization twice with the
//! same inputs produces byte-identical results the second time, which is
//! also the system's crash-recovery story.

pub mod block;
pub mod changeset;
pub mod config;
pub mod defaults;
pub mod error;
pub mod exec;
pub mod manifest;
pub mod newline;
pub mod output;
pub mod scan;
pub mod style;
pub mod sync;

#[cfg(test)]
mod block_proptest;
