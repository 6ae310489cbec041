//! Per-file reconciliation: merging rendered blocks into a host file while
//! preserving every other byte.
//!
//! The decision per file is a small state machine over the number of
//! existing spans `n` and rendered blocks `k`:
//!
//! - `n == 0` — insert the concatenation of all rendered blocks at the very
//!   start of the file; existing content follows after one newline.
//! - `n == k` — replace each span positionally (span i gets block i). This
//!   is the steady state; repeated runs are byte-identical.
//! - `n != k` — replace the first span with the full concatenation and leave
//!   the later spans behind. The historical fallback, kept as documented
//!   behavior and pinned by a regression test below.
//! - `k == 0` — the file left management: every span is replaced with the
//!   empty string, leaving surrounding text (and its now-bare newlines)
//!   intact.
//!
//! Rendered blocks carry a trailing line terminator. When splicing into an
//! existing span the terminator is trimmed, because the host file already
//! owns the newline after the closing marker; keeping it would grow the file
//! by one line on every run.

use crate::newline::NewlineStyle;
use crate::style::CommentStyle;

use super::extract::find_spans;

/// Apply `rendered` blocks to `text`, returning the reconciled content.
///
/// `rendered` entries must come from [`super::render_block`] with the same
/// `newline` style. An empty `rendered` slice strips all blocks.
pub fn apply_blocks(
    text: &str,
    style: &CommentStyle,
    rendered: &[String],
    newline: NewlineStyle,
) -> String {
    if rendered.is_empty() {
        return strip_blocks(text, style);
    }

    let spans = find_spans(text, style.open(), style.close());
    let nl = newline.as_str();

    if spans.is_empty() {
        let mut out = String::with_capacity(
            rendered.iter().map(String::len).sum::<usize>() + nl.len() + text.len(),
        );
        for block in rendered {
            out.push_str(block);
        }
        out.push_str(nl);
        out.push_str(text);
        return out;
    }

    if spans.len() == rendered.len() {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for (span, block) in spans.iter().zip(rendered) {
            out.push_str(&text[last..span.start]);
            out.push_str(trim_terminator(block, nl));
            last = span.end;
        }
        out.push_str(&text[last..]);
        return out;
    }

    // Count mismatch: the first span receives the full concatenation; any
    // further spans are left in place.
    let concatenation: String = rendered.concat();
    let first = spans[0];
    let mut out = String::with_capacity(text.len() + concatenation.len());
    out.push_str(&text[..first.start]);
    out.push_str(trim_terminator(&concatenation, nl));
    out.push_str(&text[first.end..]);
    out
}

/// Remove every managed block from `text`, deleting delimiters, warning
/// header, and content while leaving all surrounding bytes untouched.
pub fn strip_blocks(text: &str, style: &CommentStyle) -> String {
    let spans = find_spans(text, style.open(), style.close());
    if spans.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in &spans {
        out.push_str(&text[last..span.start]);
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

fn trim_terminator<'b>(block: &'b str, nl: &str) -> &'b str {
    block.strip_suffix(nl).unwrap_or(block)
}
