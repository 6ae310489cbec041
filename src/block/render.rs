//! Block synthesis: producing the exact replacement text for a managed block.
//!
//! Rendering is pure. The same function serves single-block and multi-block
//! files; newline-style decisions are made by the caller and passed in.

use crate::newline::NewlineStyle;
use crate::style::CommentStyle;

/// Placeholder substituted with the resolved newline style before insertion.
///
/// Aggregate sources (several physical files concatenated into one logical
/// block) carry this token instead of committing to a line-ending style at
/// aggregation time.
pub const NEWLINE_TOKEN: &str = "{newLine}";

/// Render one managed block: opening marker, generated warning line, the
/// body verbatim, closing marker, and a final line terminator, all joined by
/// the file's newline style.
///
/// The trailing terminator is what produces the blank line after a block
/// when it is inserted into a file; when an existing span is replaced, the
/// reconciler trims it because the host file already owns the terminator
/// after the closing marker.
pub fn render_block(body: &str, style: &CommentStyle, newline: NewlineStyle) -> String {
    let nl = newline.as_str();
    let body = body.replace(NEWLINE_TOKEN, nl);

    let mut out = String::with_capacity(
        style.open().len() + style.warning_line().len() + body.len() + style.close().len() + 8,
    );
    out.push_str(style.open());
    out.push_str(nl);
    out.push_str(style.warning_line());
    out.push_str(nl);
    out.push_str(&body);
    out.push_str(nl);
    out.push_str(style.close());
    out.push_str(nl);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::WARNING_TEXT;

    fn hash_style() -> CommentStyle {
        CommentStyle::new("#! m0").unwrap()
    }

    fn c_style() -> CommentStyle {
        CommentStyle::new("/*! m0 */").unwrap()
    }

    #[test]
    fn test_render_shape_lf() {
        let rendered = render_block("node_modules", &hash_style(), NewlineStyle::Lf);
        assert_eq!(
            rendered,
            format!("#! m0-start\n#! {}\nnode_modules\n#! m0-end\n", WARNING_TEXT)
        );
    }

    #[test]
    fn test_render_shape_crlf() {
        let rendered = render_block("node_modules", &hash_style(), NewlineStyle::CrLf);
        assert_eq!(
            rendered,
            format!(
                "#! m0-start\r\n#! {}\r\nnode_modules\r\n#! m0-end\r\n",
                WARNING_TEXT
            )
        );
        assert!(!rendered.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn test_warning_line_uses_style_framing() {
        let rendered = render_block("x", &c_style(), NewlineStyle::Lf);
        assert!(rendered.contains(&format!("/*! {} */", WARNING_TEXT)));
    }

    #[test]
    fn test_body_is_verbatim() {
        let body = "line one\n\n    indented\nline three";
        let rendered = render_block(body, &hash_style(), NewlineStyle::Lf);
        assert!(rendered.contains(body));
    }

    #[test]
    fn test_newline_token_substitution() {
        let body = "a{newLine}b{newLine}c";
        let lf = render_block(body, &hash_style(), NewlineStyle::Lf);
        assert!(lf.contains("a\nb\nc"));

        let crlf = render_block(body, &hash_style(), NewlineStyle::CrLf);
        assert!(crlf.contains("a\r\nb\r\nc"));
        assert!(!crlf.contains(NEWLINE_TOKEN));
    }

    #[test]
    fn test_empty_body_still_framed() {
        let rendered = render_block("", &hash_style(), NewlineStyle::Lf);
        assert_eq!(
            rendered,
            format!("#! m0-start\n#! {}\n\n#! m0-end\n", WARNING_TEXT)
        );
    }

    #[test]
    fn test_render_is_pure() {
        let a = render_block("same", &hash_style(), NewlineStyle::Lf);
        let b = render_block("same", &hash_style(), NewlineStyle::Lf);
        assert_eq!(a, b);
    }
}
