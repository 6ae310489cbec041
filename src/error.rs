//! # Error Handling
//!
//! Centralized error handling for `base-sync`, built on `thiserror`. Every
//! variant renders with the `base-sync:` namespace prefix so callers can tell
//! this system's failures apart from underlying library failures.
//!
//! The taxonomy follows the three failure classes of the system:
//!
//! - Configuration errors (`Config`, `MissingManifest`, `UnknownExtension`)
//!   are fatal and surfaced before any write happens.
//! - Per-path I/O errors (`FileOperation`) are collected per operation; one
//!   failing path does not stop the others, but the operation reports failure
//!   if any occurred.
//! - External command errors (`CommandSpawn`, `CommandFailed`) guard the
//!   dependency registry: it is only persisted once the command is known to
//!   have succeeded.
//!
//! There are no automatic retries anywhere; the system relies on idempotent
//! re-invocation instead.

use thiserror::Error;

/// Main error type for base-sync operations
#[derive(Error, Debug)]
pub enum Error {
    /// The synchronization configuration is invalid.
    ///
    /// This covers bad `.base-sync.yaml` content as well as impossible
    /// block layouts such as two sources mapping to the same destination.
    #[error("base-sync: configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Config {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The target package has no manifest to attach managed state to.
    #[error("base-sync: no package manifest found at {path}")]
    MissingManifest { path: String },

    /// No comment style is registered for a block file's extension.
    ///
    /// Raised during planning, before any file is touched: silently treating
    /// an unmapped file as block-free would orphan its managed content.
    #[error("base-sync: no comment style registered for '{key}' (needed by {path})")]
    UnknownExtension { key: String, path: String },

    /// A single filesystem operation on a specific path failed.
    #[error("base-sync: {operation} failed for '{path}': {source}")]
    FileOperation {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The package-manager command could not be spawned at all.
    #[error("base-sync: failed to spawn '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The package-manager command ran but exited non-zero.
    #[error("base-sync: command '{command}' exited with status {code}")]
    CommandFailed { command: String, code: i32 },

    /// The target manifest exists but could not be parsed as a JSON object.
    #[error("base-sync: failed to parse manifest '{path}': {source}")]
    ManifestParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("base-sync: YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("base-sync: JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("base-sync: regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("base-sync: glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// An I/O error without a more specific home, wrapped from `std::io::Error`.
    #[error("base-sync: I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a `Config` error without a hint.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            hint: None,
        }
    }

    /// Wrap an I/O error with the operation name and the path it hit.
    pub fn file_op(operation: &str, path: &std::path::Path, source: std::io::Error) -> Self {
        Error::FileOperation {
            operation: operation.to_string(),
            path: path.display().to_string(),
            source,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
