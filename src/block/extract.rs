//! Block extraction: locating existing managed-block spans in a host file.
//!
//! The scan is a two-phase lexical pass over literal marker text: find the
//! next opening marker, then pair it with the nearest following closing
//! marker. That gives shortest-match semantics by construction, so adjacent
//! blocks are matched individually instead of one span swallowing everything
//! between the first open and the last close.
//!
//! A candidate span whose text contains the reserved sentinel (U+FDD1, a
//! Unicode noncharacter that cannot legitimately appear in source text) is
//! rejected and the scan resumes after that opening marker. This matches the
//! `open [^\x{FDD1}]*? close` pattern the markers compile to, without relying
//! on a pattern engine for the pairing itself.

use crate::style::RESERVED_SENTINEL;

/// A byte range in a host file covering one managed block, from the first
/// byte of the opening marker through the last byte of the closing marker.
/// The line terminator after the closing marker belongs to the host file,
/// not to the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the opening marker.
    pub start: usize,
    /// Byte offset one past the closing marker.
    pub end: usize,
}

impl Span {
    /// The span's text within `text`.
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

/// Locate every managed-block span in `text`, in file order.
///
/// Returns an empty vector for block-free files; that is the common case for
/// newly-adopted files, not an error. Spans never overlap: scanning resumes
/// after each closing marker.
pub fn find_spans(text: &str, open: &str, close: &str) -> Vec<Span> {
    debug_assert_ne!(open, close, "open and close markers must be distinct");

    let mut spans = Vec::new();
    let mut at = 0;

    while let Some(rel) = text[at..].find(open) {
        let open_at = at + rel;
        let body_from = open_at + open.len();

        let Some(close_rel) = text[body_from..].find(close) else {
            // Unterminated marker; nothing after it can match either.
            break;
        };
        let end = body_from + close_rel + close.len();

        if text[open_at..end].contains(RESERVED_SENTINEL) {
            // Any longer candidate from this opening marker would still
            // contain the sentinel, so this opening marker can never match.
            at = body_from;
            continue;
        }

        spans.push(Span {
            start: open_at,
            end,
        });
        at = end;
    }

    spans
}
