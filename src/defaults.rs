//! Default values for base-sync configuration.
//!
//! This module provides centralized default values used across the config
//! schema and commands, ensuring consistency and avoiding duplication.

use std::collections::BTreeMap;

/// Default glob for whole-file copies: everything under `<base>/files/`.
pub fn files_glob() -> String {
    "**/*".to_string()
}

/// Default glob for block sources: everything under `<base>/blocks/`.
pub fn blocks_glob() -> String {
    "**/*".to_string()
}

/// Default package manager used for dev-dependency commands.
pub fn package_manager() -> String {
    "npm".to_string()
}

/// Built-in comment styles, keyed by style identifier.
///
/// Templates carry the `m0` placeholder; see [`crate::style`] for the
/// marker derivation rules.
pub fn comment_styles() -> BTreeMap<String, String> {
    let mut styles = BTreeMap::new();
    styles.insert("#".to_string(), "#! m0".to_string());
    styles.insert("//".to_string(), "//! m0".to_string());
    styles.insert("/**/".to_string(), "/*! m0 */".to_string());
    styles.insert("<!-->".to_string(), "<!--! m0 -->".to_string());
    styles
}

/// Built-in extension-to-style map covering the file types a JavaScript
/// base package commonly ships.
pub fn comment_style_map() -> BTreeMap<String, String> {
    let entries = [
        (".gitignore", "#"),
        (".npmignore", "#"),
        (".npmrc", "#"),
        (".editorconfig", "#"),
        (".sh", "#"),
        (".yml", "#"),
        (".yaml", "#"),
        (".js", "/**/"),
        (".jsx", "/**/"),
        (".ts", "/**/"),
        (".tsx", "/**/"),
        (".css", "/**/"),
        (".md", "<!-->"),
        (".html", "<!-->"),
    ];
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
