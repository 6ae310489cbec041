//! Sync command implementation
//!
//! Runs the full synchronization pipeline against a target package:
//! 1. Copy whole files from `<base>/files/`
//! 2. Reconcile managed blocks from `<base>/blocks/`
//! 3. Install/uninstall dev dependencies through the package manager

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use base_sync::config;
use base_sync::output::{emoji, OutputConfig};
use base_sync::sync::{SyncOptions, Syncer};

/// Arguments for the sync command
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Base package directory (contains files/, blocks/ and the config)
    #[arg(short, long, value_name = "PATH", env = "BASE_SYNC_BASE", default_value = ".")]
    pub base: PathBuf,

    /// Target package directory (contains package.json)
    #[arg(short, long, value_name = "PATH", env = "BASE_SYNC_TARGET")]
    pub target: PathBuf,

    /// Path to config file (defaults to <base>/.base-sync.yaml)
    #[arg(short, long, value_name = "PATH", env = "BASE_SYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the sync command
pub fn execute(args: SyncArgs, output: &OutputConfig) -> Result<()> {
    use std::time::Instant;

    let start_time = Instant::now();

    let config_path = args
        .config
        .unwrap_or_else(|| args.base.join(config::CONFIG_FILE));

    if !args.quiet {
        println!("{} Base Sync", emoji(output, "🔄", "[SYNC]"));
        println!();
    }

    if !args.quiet && args.verbose {
        println!("  config: {}", config_path.display());
        println!("  base:   {}", args.base.display());
        println!("  target: {}", args.target.display());
        println!();
    }

    let config = config::from_file(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    let syncer = Syncer::new(
        config,
        SyncOptions {
            base_dir: args.base.clone(),
            target_dir: args.target.clone(),
        },
    )
    .context("failed to initialize synchronization")?;

    let summary = syncer.sync().context("synchronization failed")?;

    if !args.quiet {
        println!(
            "{} {} file(s) copied",
            emoji(output, "📄", "[FILES]"),
            summary.files.len()
        );
        println!(
            "{} {} file(s) carrying managed blocks",
            emoji(output, "🧩", "[BLOCKS]"),
            summary.blocks.len()
        );
        if summary.dependency_changes.is_empty() {
            println!(
                "{} dev dependencies up to date",
                emoji(output, "📦", "[DEPS]")
            );
        } else {
            println!(
                "{} dev dependencies: {} added/updated, {} removed",
                emoji(output, "📦", "[DEPS]"),
                summary.dependency_changes.to_add.len(),
                summary.dependency_changes.to_remove.len()
            );
        }

        if args.verbose {
            for path in &summary.files {
                println!("    copied {}", path);
            }
            for path in &summary.blocks {
                println!("    blocks {}", path);
            }
        }

        println!();
        println!(
            "{} Done in {:.2}s",
            emoji(output, "✅", "[OK]"),
            start_time.elapsed().as_secs_f64()
        );
    }

    Ok(())
}
