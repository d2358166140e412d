//! ANSI escape sequence stripping.

use super::escape::{Token, Tokens};
use std::borrow::Cow;

/// Strip ANSI escape sequences from a string.
///
/// Returns `Cow::Borrowed` when no escape sequences are present (zero allocation).
/// Newlines and every other visible character are preserved, so line counts
/// and character offsets of the result match the visible text.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&0x1B) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for token in Tokens::new(s) {
        if let Token::Text(run) = token {
            result.push_str(run);
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_ansi_borrows() {
        assert!(matches!(strip_ansi("hello"), Cow::Borrowed(_)));
        assert_eq!(strip_ansi("hello"), "hello");
    }

    #[test]
    fn test_csi_color() {
        assert_eq!(strip_ansi("\x1b[31mred\x1b[0m"), "red");
        assert_eq!(strip_ansi("\x1b[38;2;255;0;0mred\x1b[0m"), "red");
    }

    #[test]
    fn test_osc_with_st_terminator() {
        assert_eq!(strip_ansi("\x1b]0;window title\x1b\\text"), "text");
    }

    #[test]
    fn test_newlines_preserved() {
        assert_eq!(strip_ansi("\x1b[1ma\nb\x1b[0m\nc"), "a\nb\nc");
    }

    #[test]
    fn test_unicode_outside_ansi() {
        assert_eq!(strip_ansi("\x1b[31m你好\x1b[0m"), "你好");
    }

    #[test]
    fn test_bare_esc_at_end() {
        assert_eq!(strip_ansi("text\x1b"), "text");
    }
}
