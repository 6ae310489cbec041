//! # Comment-Style Registry
//!
//! Managed blocks are bounded by comment lines whose exact text is derived
//! from a per-syntax *template* containing the placeholder token `m0`:
//!
//! - opening marker:  template with `m0` replaced by `m0-start`
//! - closing marker:  template with `m0` replaced by `m0-end`
//! - warning line:    template with `m0` replaced by a fixed warning sentence
//!
//! For the `#` style (`#! m0`) that yields the literal lines `#! m0-start`
//! and `#! m0-end`; for the `/**/` style (`/*! m0 */`) it yields
//! `/*! m0-start */` and `/*! m0-end */`. These strings are load-bearing:
//! files already under management are recognized solely by re-deriving them,
//! so the substitution rule must never change.
//!
//! The registry maps a file's extension (or its basename when it has no
//! extension, e.g. `.gitignore` or `Makefile`) to a style. Lookups for
//! unmapped keys fail with [`Error::UnknownExtension`] rather than silently
//! treating the file as block-free.

use std::collections::BTreeMap;
use std::path::Path;

use regex::Regex;

use crate::error::{Error, Result};

/// The placeholder token substituted when deriving markers from a template.
pub const PLACEHOLDER: &str = "m0";

/// The warning sentence rendered into every managed block's second line.
pub const WARNING_TEXT: &str =
    "GENERATED by base-sync; edit the base package source instead";

/// A reserved noncharacter that can never legitimately appear in source
/// text. Block spans are defined as marker-bounded runs that do not contain
/// it, which is what lets the compiled pattern cross newlines while staying
/// non-greedy.
pub const RESERVED_SENTINEL: char = '\u{FDD1}';

/// A comment style: the delimiter template plus everything derived from it.
///
/// All derivations happen at construction so invalid templates surface as
/// configuration errors before any file is read.
#[derive(Debug, Clone)]
pub struct CommentStyle {
    template: String,
    open: String,
    close: String,
    warning: String,
    matcher: Regex,
}

impl CommentStyle {
    /// Build a style from a delimiter template.
    ///
    /// The template must contain the `m0` placeholder exactly once per
    /// marker derivation; markers are substituted on the first occurrence,
    /// which keeps the open and close markers distinct by construction.
    pub fn new(template: &str) -> Result<Self> {
        if !template.contains(PLACEHOLDER) {
            return Err(Error::Config {
                message: format!(
                    "comment style '{}' does not contain the '{}' placeholder",
                    template, PLACEHOLDER
                ),
                hint: Some(format!("use a template like '#! {}'", PLACEHOLDER)),
            });
        }

        let open = template.replacen(PLACEHOLDER, &format!("{PLACEHOLDER}-start"), 1);
        let close = template.replacen(PLACEHOLDER, &format!("{PLACEHOLDER}-end"), 1);
        let warning = template.replacen(PLACEHOLDER, WARNING_TEXT, 1);

        // Delimiter text is literal; escape it before compiling the search
        // pattern. `[^\x{FDD1}]` crosses newlines, `*?` keeps the match to
        // the nearest closing marker.
        let matcher = Regex::new(&format!(
            "{}[^\\x{{FDD1}}]*?{}",
            regex::escape(&open),
            regex::escape(&close)
        ))?;

        Ok(Self {
            template: template.to_string(),
            open,
            close,
            warning,
            matcher,
        })
    }

    /// The raw delimiter template this style was built from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The opening marker line.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The closing marker line.
    pub fn close(&self) -> &str {
        &self.close
    }

    /// The generated warning line placed directly after the opening marker.
    pub fn warning_line(&self) -> &str {
        &self.warning
    }

    /// The compiled non-greedy search pattern over both markers.
    ///
    /// Used as a cheap "does this file carry blocks at all" gate; span
    /// pairing for replacement is done by the lexical scan in
    /// [`crate::block::find_spans`].
    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }
}

/// Maps file extensions (or extensionless basenames) to comment styles.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: BTreeMap<String, CommentStyle>,
}

impl StyleRegistry {
    /// Build a registry from a style table and an extension map.
    ///
    /// `styles` maps style identifiers to delimiter templates;
    /// `extension_map` maps `.ext`/basename keys to style identifiers.
    /// Dangling identifiers are configuration errors.
    pub fn new(
        styles: &BTreeMap<String, String>,
        extension_map: &BTreeMap<String, String>,
    ) -> Result<Self> {
        let mut compiled: BTreeMap<String, CommentStyle> = BTreeMap::new();

        for (key, style_id) in extension_map {
            let template = styles.get(style_id).ok_or_else(|| Error::Config {
                message: format!(
                    "comment style map entry '{}' references undefined style '{}'",
                    key, style_id
                ),
                hint: Some("define it under blocks.comment_styles".to_string()),
            })?;
            compiled.insert(key.clone(), CommentStyle::new(template)?);
        }

        Ok(Self { styles: compiled })
    }

    /// The lookup key for a path: `.ext` when the file has an extension,
    /// otherwise the basename (dotfiles like `.gitignore` have no extension
    /// and fall through to their full name).
    pub fn style_key(path: &Path) -> String {
        match path.extension() {
            Some(ext) => format!(".{}", ext.to_string_lossy()),
            None => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    /// Resolve the comment style for a target path.
    pub fn resolve(&self, path: &Path) -> Result<&CommentStyle> {
        let key = Self::style_key(path);
        self.styles.get(&key).ok_or_else(|| Error::UnknownExtension {
            key,
            path: path.display().to_string(),
        })
    }
}
