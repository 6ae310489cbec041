//! # Target Manifest & Managed-File Registry
//!
//! The record of what base-sync currently manages lives inside the target
//! package's `package.json`, under the reserved `_m0` key:
//!
//! ```json
//! {
//!   "name": "consumer",
//!   "_m0": {
//!     "files": ["file1.txt", "subfolder/file2.txt"],
//!     "blocks": [".gitignore", "subfolder/block2.js"],
//!     "devDependencies": { "a": "0.0.0" }
//!   }
//! }
//! ```
//!
//! The manifest is read at the start of an operation and written back after
//! the operation's effects have been applied. It must round-trip through the
//! same JSON object the rest of the manifest lives in without reordering
//! unrelated fields, which is why `serde_json` runs with `preserve_order`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// The manifest file name of the target package.
pub const MANIFEST_FILE: &str = "package.json";

/// The reserved manifest key holding the managed-file registry.
pub const STATE_KEY: &str = "_m0";

/// The persisted registry: the last-run snapshot of everything base-sync
/// manages in the target package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedState {
    /// Relative paths last copied as whole files, sorted.
    #[serde(default)]
    pub files: Vec<String>,

    /// Relative paths last holding managed blocks, sorted.
    #[serde(default)]
    pub blocks: Vec<String>,

    /// Dev dependencies last installed, name to exact version.
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

/// The target package's `package.json`, loaded as an order-preserving JSON
/// object.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    document: Map<String, Value>,
}

impl Manifest {
    /// Load the manifest from a target package directory.
    ///
    /// A missing file is the "no parent package" configuration error: there
    /// is nothing to attach managed state to, so the run aborts before any
    /// write.
    pub fn load(target_dir: &Path) -> Result<Self> {
        let path = target_dir.join(MANIFEST_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::MissingManifest {
                    path: path.display().to_string(),
                })
            }
            Err(e) => return Err(Error::file_op("read", &path, e)),
        };

        let value: Value = serde_json::from_str(&raw).map_err(|e| Error::ManifestParse {
            path: path.display().to_string(),
            source: e,
        })?;
        let document = match value {
            Value::Object(map) => map,
            _ => {
                return Err(Error::Config {
                    message: format!("manifest '{}' is not a JSON object", path.display()),
                    hint: None,
                })
            }
        };

        Ok(Self { path, document })
    }

    /// The manifest's location on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The registry stored under `_m0`, or the empty state when the target
    /// has never been synchronized.
    pub fn state(&self) -> Result<ManagedState> {
        match self.document.get(STATE_KEY) {
            Some(value) => Ok(serde_json::from_value(value.clone())?),
            None => Ok(ManagedState::default()),
        }
    }

    /// Replace the registry under `_m0`, leaving every other field alone.
    pub fn set_state(&mut self, state: &ManagedState) -> Result<()> {
        self.document
            .insert(STATE_KEY.to_string(), serde_json::to_value(state)?);
        Ok(())
    }

    /// Write the manifest back, preserving the order of unrelated fields.
    pub fn save(&self) -> Result<()> {
        let mut rendered = serde_json::to_string_pretty(&Value::Object(self.document.clone()))?;
        rendered.push('\n');
        fs::write(&self.path, rendered).map_err(|e| Error::file_op("write", &self.path, e))
    }
}
