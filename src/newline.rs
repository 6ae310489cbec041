//! Newline-style detection for generated block text.
//!
//! Every byte this system inserts into a host file must use that file's own
//! line-ending style. The style is detected from existing content, falling
//! back to the block source, falling back to the platform native ending.
//! Existing bytes are never rewritten, so mixed-style files stay mixed.

/// The line-ending style of a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewlineStyle {
    /// Unix-style `\n`
    Lf,
    /// Windows-style `\r\n`
    CrLf,
}

impl NewlineStyle {
    /// The literal line terminator for this style.
    pub fn as_str(self) -> &'static str {
        match self {
            NewlineStyle::Lf => "\n",
            NewlineStyle::CrLf => "\r\n",
        }
    }

    /// Detect the dominant newline style of `text`.
    ///
    /// CRLF wins only when it outnumbers bare LF occurrences; returns `None`
    /// for text with no line terminators at all, so callers can continue down
    /// the fallback chain.
    pub fn detect(text: &str) -> Option<NewlineStyle> {
        let crlf = text.matches("\r\n").count();
        let lf = text.matches('\n').count() - crlf;

        if crlf == 0 && lf == 0 {
            return None;
        }
        if crlf > lf {
            Some(NewlineStyle::CrLf)
        } else {
            Some(NewlineStyle::Lf)
        }
    }

    /// The platform-native style, the last resort of the fallback chain.
    pub fn native() -> NewlineStyle {
        if cfg!(windows) {
            NewlineStyle::CrLf
        } else {
            NewlineStyle::Lf
        }
    }

    /// Resolve the style for a reconciliation pass: existing target content
    /// first, then the block source, then the platform default.
    pub fn resolve(existing: &str, source: &str) -> NewlineStyle {
        NewlineStyle::detect(existing)
            .or_else(|| NewlineStyle::detect(source))
            .unwrap_or_else(NewlineStyle::native)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_lf() {
        assert_eq!(NewlineStyle::detect("a\nb\nc\n"), Some(NewlineStyle::Lf));
    }

    #[test]
    fn test_detect_crlf() {
        assert_eq!(
            NewlineStyle::detect("a\r\nb\r\nc\r\n"),
            Some(NewlineStyle::CrLf)
        );
    }

    #[test]
    fn test_detect_none_for_single_line() {
        assert_eq!(NewlineStyle::detect("no terminator here"), None);
        assert_eq!(NewlineStyle::detect(""), None);
    }

    #[test]
    fn test_detect_mixed_majority_wins() {
        assert_eq!(
            NewlineStyle::detect("a\r\nb\r\nc\n"),
            Some(NewlineStyle::CrLf)
        );
        assert_eq!(
            NewlineStyle::detect("a\r\nb\nc\n"),
            Some(NewlineStyle::Lf)
        );
    }

    #[test]
    fn test_detect_tie_prefers_lf() {
        assert_eq!(NewlineStyle::detect("a\r\nb\n"), Some(NewlineStyle::Lf));
    }

    #[test]
    fn test_resolve_chain() {
        assert_eq!(
            NewlineStyle::resolve("existing\r\n", "source\n"),
            NewlineStyle::CrLf
        );
        assert_eq!(
            NewlineStyle::resolve("no newline", "source\r\n"),
            NewlineStyle::CrLf
        );
        assert_eq!(
            NewlineStyle::resolve("", ""),
            NewlineStyle::native()
        );
    }
}
