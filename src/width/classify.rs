//! Width classification for code points, grapheme clusters and strings.

use super::table::WIDE_RANGES;
use crate::ansi::strip_ansi;
use std::cmp::Ordering;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Display width class of a code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidthCategory {
    /// Occupies one terminal column.
    #[default]
    Narrow,
    /// Occupies two terminal columns (East Asian Wide or Fullwidth).
    Wide,
}

impl WidthCategory {
    /// Number of terminal columns this category occupies.
    #[inline]
    pub const fn columns(self) -> usize {
        match self {
            Self::Narrow => 1,
            Self::Wide => 2,
        }
    }
}

/// Classify a code point by its East Asian Width.
///
/// Binary search over the static range table. Anything not covered by a wide
/// range is narrow, including values outside the Unicode scalar domain.
pub fn classify(code_point: u32) -> WidthCategory {
    let found = WIDE_RANGES.binary_search_by(|&(first, last)| {
        if last < code_point {
            Ordering::Less
        } else if first > code_point {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });

    if found.is_ok() {
        WidthCategory::Wide
    } else {
        WidthCategory::Narrow
    }
}

/// Whether `value` is the code point of a fullwidth (two column) character.
///
/// Accepts any number so that width summation over loosely typed input never
/// fails: fractional, infinite, NaN and negative values are simply not
/// fullwidth, and the classifier is not consulted for them.
///
/// # Example
///
/// ```
/// use live_region::width::is_fullwidth;
///
/// assert!(is_fullwidth(f64::from(0x3042))); // あ
/// assert!(!is_fullwidth(f64::from(0x41))); // A
/// assert!(!is_fullwidth(1.5));
/// ```
pub fn is_fullwidth(value: f64) -> bool {
    if !value.is_finite() || value.fract().abs() > 0.0 {
        return false;
    }
    if value < 0.0 || value > f64::from(u32::MAX) {
        return false;
    }

    // Integral and in range, so the cast is exact.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let code_point = value as u32;
    classify(code_point) == WidthCategory::Wide
}

/// Whether `c` occupies two terminal columns.
#[inline]
pub fn is_fullwidth_char(c: char) -> bool {
    classify(u32::from(c)) == WidthCategory::Wide
}

/// Columns occupied by a single character.
///
/// Control characters and zero-width marks (combining accents, joiners)
/// take no space; everything else is narrow or wide per [`classify`].
#[inline]
pub fn char_columns(c: char) -> usize {
    if c.is_control() || c.width() == Some(0) {
        return 0;
    }
    classify(u32::from(c)).columns()
}

/// Columns occupied by a grapheme cluster.
///
/// The base character decides, except that emoji presentation (VS16) and
/// ZWJ sequences always render two columns wide.
pub fn grapheme_columns(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    let base = char_columns(first);
    if base == 0 {
        return 0;
    }
    if chars.any(|c| c == '\u{FE0F}' || c == '\u{200D}') {
        return 2;
    }
    base
}

/// Visual width of `text` in terminal columns, ignoring escape sequences.
pub fn string_width(text: &str) -> usize {
    strip_ansi(text).graphemes(true).map(grapheme_columns).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ascii_is_narrow() {
        assert_eq!(classify(0x41), WidthCategory::Narrow);
        assert_eq!(classify(0x20), WidthCategory::Narrow);
    }

    #[test]
    fn test_classify_cjk_is_wide() {
        assert_eq!(classify(0x3042), WidthCategory::Wide); // あ
        assert_eq!(classify(0x65E5), WidthCategory::Wide); // 日
        assert_eq!(classify(0xAC00), WidthCategory::Wide); // 가
    }

    #[test]
    fn test_classify_fullwidth_forms() {
        assert_eq!(classify(0x3000), WidthCategory::Wide);
        assert_eq!(classify(0xFF21), WidthCategory::Wide); // Ａ
        assert_eq!(classify(0xFF61), WidthCategory::Narrow); // halfwidth ｡
    }

    #[test]
    fn test_classify_range_edges() {
        assert_eq!(classify(0x10FF), WidthCategory::Narrow);
        assert_eq!(classify(0x1100), WidthCategory::Wide);
        assert_eq!(classify(0x115F), WidthCategory::Wide);
        assert_eq!(classify(0x1160), WidthCategory::Narrow);
        assert_eq!(classify(0x3FFFD), WidthCategory::Wide);
    }

    #[test]
    fn test_classify_out_of_domain_is_narrow() {
        assert_eq!(classify(0x11_0000), WidthCategory::Narrow);
        assert_eq!(classify(u32::MAX), WidthCategory::Narrow);
    }

    #[test]
    fn test_is_fullwidth() {
        assert!(is_fullwidth(f64::from(0x3042)));
        assert!(!is_fullwidth(f64::from(0x0041)));
    }

    #[test]
    fn test_is_fullwidth_rejects_non_integers() {
        assert!(!is_fullwidth(1.5));
        assert!(!is_fullwidth(12354.5));
        assert!(!is_fullwidth(f64::NAN));
        assert!(!is_fullwidth(f64::INFINITY));
        assert!(!is_fullwidth(-1.0));
    }

    #[test]
    fn test_is_fullwidth_char() {
        assert!(is_fullwidth_char('日'));
        assert!(!is_fullwidth_char('a'));
    }

    #[test]
    fn test_char_columns() {
        assert_eq!(char_columns('a'), 1);
        assert_eq!(char_columns('日'), 2);
        assert_eq!(char_columns('\u{0301}'), 0);
        assert_eq!(char_columns('\t'), 0);
    }

    #[test]
    fn test_grapheme_columns() {
        assert_eq!(grapheme_columns("e\u{0301}"), 1);
        assert_eq!(grapheme_columns("\u{2764}\u{FE0F}"), 2);
        assert_eq!(grapheme_columns(""), 0);
    }

    #[test]
    fn test_string_width_ignores_escapes() {
        assert_eq!(string_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(string_width("日本語"), 6);
        assert_eq!(string_width("a日b"), 4);
    }
}
