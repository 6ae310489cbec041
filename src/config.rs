//! # Configuration Schema and Parsing
//!
//! The base package describes what it synchronizes in a `.base-sync.yaml`
//! file at its root:
//!
//! ```yaml
//! files: "**/*"
//! blocks:
//!   src: "**/*"
//!   comment_styles:
//!     "#": "#! m0"
//!     "/**/": "/*! m0 */"
//!   comment_style_map:
//!     ".gitignore": "#"
//!     ".js": "/**/"
//! devDependencies:
//!   eslint: "8.57.0"
//! package_manager: npm
//! ```
//!
//! All fields are optional. Omitted comment tables fall back to the built-in
//! defaults in [`crate::defaults`]; a table that *is* given replaces the
//! defaults wholesale, so extension lookups stay exact and predictable.
//! Structural validation (placeholder presence, dangling style references)
//! happens when the style registry is built from the parsed config.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{Error, Result};
use crate::style::StyleRegistry;

/// The configuration file name expected at the base package root.
pub const CONFIG_FILE: &str = ".base-sync.yaml";

/// Block-synchronization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlocksConfig {
    /// Glob over `<base>/blocks/` selecting block source files.
    #[serde(default = "defaults::blocks_glob")]
    pub src: String,

    /// Style identifier to delimiter template (template contains `m0`).
    #[serde(default = "defaults::comment_styles")]
    pub comment_styles: BTreeMap<String, String>,

    /// `.ext` (or extensionless basename) to style identifier.
    #[serde(default = "defaults::comment_style_map")]
    pub comment_style_map: BTreeMap<String, String>,
}

impl Default for BlocksConfig {
    fn default() -> Self {
        Self {
            src: defaults::blocks_glob(),
            comment_styles: defaults::comment_styles(),
            comment_style_map: defaults::comment_style_map(),
        }
    }
}

/// The full synchronization configuration of a base package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Glob over `<base>/files/` selecting whole-file copies.
    #[serde(default = "defaults::files_glob")]
    pub files: String,

    /// Managed-block configuration.
    #[serde(default)]
    pub blocks: BlocksConfig,

    /// Dev dependencies the target package must carry, name to exact
    /// version string. Versions are opaque to base-sync; the package
    /// manager interprets them.
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,

    /// The package-manager binary used for install/uninstall commands.
    #[serde(default = "defaults::package_manager")]
    pub package_manager: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            files: defaults::files_glob(),
            blocks: BlocksConfig::default(),
            dev_dependencies: BTreeMap::new(),
            package_manager: defaults::package_manager(),
        }
    }
}

impl SyncConfig {
    /// Build the compiled style registry for this configuration.
    ///
    /// Surfaces dangling style references and malformed templates as
    /// configuration errors before any file is touched.
    pub fn style_registry(&self) -> Result<StyleRegistry> {
        StyleRegistry::new(&self.blocks.comment_styles, &self.blocks.comment_style_map)
    }
}

/// Parse a configuration from YAML text.
pub fn parse(yaml: &str) -> Result<SyncConfig> {
    let config: SyncConfig = serde_yaml::from_str(yaml)?;
    Ok(config)
}

/// Load a configuration from a file path.
pub fn from_file(path: &Path) -> Result<SyncConfig> {
    let raw = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::Config {
                message: format!("configuration file not found: {}", path.display()),
                hint: Some(format!("create {} in the base package root", CONFIG_FILE)),
            }
        } else {
            Error::file_op("read", path, e)
        }
    })?;
    parse(&raw)
}
