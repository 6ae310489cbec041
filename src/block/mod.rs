//! # Managed Blocks
//!
//! The core of base-sync: locating, synthesizing, and reconciling
//! delimiter-bounded regions of generated text inside otherwise hand-edited
//! host files. The three stages mirror the data flow of a reconciliation
//! pass:
//!
//! 1. [`extract`] finds the spans of existing managed blocks in a host file.
//! 2. [`render`] produces the exact replacement text for each block.
//! 3. [`reconcile`] merges the two: positional replacement when the shapes
//!    line up, insertion at the top of the file for newly-adopted files, and
//!    stripping when a file leaves management.
//!
//! Everything in this module operates on raw text. Host-file syntax is never
//! parsed; blocks are recognized purely by their literal marker lines.

pub mod extract;
pub mod reconcile;
pub mod render;

pub use extract::{find_spans, Span};
pub use reconcile::{apply_blocks, strip_blocks};
pub use render::{render_block, NEWLINE_TOKEN};

use crate::style::CommentStyle;

/// Split a block source file into the bodies of the blocks it defines.
///
/// A source normally holds a single bare body (its trailing line terminator,
/// if any, is file formatting rather than content). A source may instead
/// delimit several bodies with the destination's own markers; each span's
/// inner text becomes a body, in file order, and text between the marker
/// pairs is discarded. Warning lines never come from sources; the renderer
/// regenerates them on every run.
pub fn block_bodies(source: &str, style: &CommentStyle) -> Vec<String> {
    let spans = find_spans(source, style.open(), style.close());

    if spans.is_empty() {
        return vec![trim_one_trailing_newline(source).to_string()];
    }

    spans
        .iter()
        .map(|span| {
            let inner = &source[span.start + style.open().len()..span.end - style.close().len()];
            trim_one_leading_newline(trim_one_trailing_newline(inner)).to_string()
        })
        .collect()
}

fn trim_one_trailing_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

fn trim_one_leading_newline(text: &str) -> &str {
    text.strip_prefix("\r\n")
        .or_else(|| text.strip_prefix('\n'))
        .unwrap_or(text)
}
