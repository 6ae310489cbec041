//! Property-based tests for block reconciliation.
//!
//! These tests use proptest to generate random host content and block
//! bodies and verify the invariants that hold for all inputs: idempotence,
//! content preservation, and removal completeness.

#[cfg(test)]
mod proptest_tests {
    use crate::block::{apply_blocks, render_block, strip_blocks};
    use crate::newline::NewlineStyle;
    use crate::style::CommentStyle;
    use proptest::prelude::*;

    fn style() -> CommentStyle {
        CommentStyle::new("#! m0").unwrap()
    }

    /// Host content that carries no markers and no reserved sentinel, so it
    /// can never be mistaken for a managed block.
    fn host_content() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .,;#!/*\\-\n]{0,200}".prop_filter("no marker text", |s| !s.contains("m0-"))
    }

    /// Block bodies: printable lines, no markers, no sentinel.
    fn body() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 _.\\-\n]{0,80}".prop_filter("no marker text", |s| !s.contains("m0-"))
    }

    proptest! {
        /// Property: reconciling twice equals reconciling once.
        #[test]
        fn reconcile_is_idempotent(host in host_content(), body in body()) {
            let style = style();
            let newline = NewlineStyle::resolve(&host, "");
            let rendered = vec![render_block(&body, &style, newline)];

            let once = apply_blocks(&host, &style, &rendered, newline);
            let newline_again = NewlineStyle::resolve(&once, "");
            let rendered_again = vec![render_block(&body, &style, newline_again)];
            let twice = apply_blocks(&once, &style, &rendered_again, newline_again);

            prop_assert_eq!(once, twice);
        }

        /// Property: adopting a block-free file never loses a byte of the
        /// original content.
        #[test]
        fn insertion_preserves_content(host in host_content(), body in body()) {
            let style = style();
            let newline = NewlineStyle::resolve(&host, "");
            let rendered = render_block(&body, &style, newline);

            let result = apply_blocks(&host, &style, &[rendered.clone()], newline);
            let expected = format!("{}{}{}", rendered, newline.as_str(), host);
            prop_assert_eq!(result, expected);
        }

        /// Property: stripping after adoption returns exactly the bytes the
        /// insertion appended the original content as.
        #[test]
        fn strip_undoes_insertion(host in host_content(), body in body()) {
            let style = style();
            let newline = NewlineStyle::resolve(&host, "");
            let rendered = vec![render_block(&body, &style, newline)];

            let adopted = apply_blocks(&host, &style, &rendered, newline);
            let stripped = strip_blocks(&adopted, &style);

            // Insertion contributed the rendered block plus one separator
            // newline; stripping removes the marker-bounded span and leaves
            // the two bare terminators behind.
            let expected = format!("{}{}{}", newline.as_str(), newline.as_str(), host);
            prop_assert_eq!(stripped, expected);
        }

        /// Property: strip on a block-free file is the identity.
        #[test]
        fn strip_without_blocks_is_identity(host in host_content()) {
            let style = style();
            prop_assert_eq!(strip_blocks(&host, &style), host);
        }

        /// Property: rendering is deterministic.
        #[test]
        fn render_is_deterministic(body in body()) {
            let style = style();
            let a = render_block(&body, &style, NewlineStyle::Lf);
            let b = render_block(&body, &style, NewlineStyle::Lf);
            prop_assert_eq!(a, b);
        }
    }
}
