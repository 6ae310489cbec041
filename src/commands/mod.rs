//! # CLI Command Implementations
//!
//! Each subcommand of the `base-sync` command-line tool lives in its own
//! file: an `Args` struct derived with `clap`, plus an `execute` function
//! that calls into the `base_sync` library to do the actual work.

pub mod completions;
pub mod sync;
