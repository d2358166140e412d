//! Width module: How many terminal columns a piece of text occupies.
//!
//! This module contains:
//! - [`classify`]: East Asian Width lookup for a single code point
//! - [`is_fullwidth`]: Permissive predicate over loosely typed input
//! - [`grapheme_columns`] / [`string_width`]: Column counts used by wrapping
//!
//! East Asian "Wide" and "Fullwidth" characters (CJK ideographs, kana,
//! Hangul, fullwidth forms, most emoji) occupy two columns in a monospaced
//! terminal; everything else occupies one.

mod classify;
mod table;

pub use classify::{
    char_columns, classify, grapheme_columns, is_fullwidth, is_fullwidth_char, string_width,
    WidthCategory,
};
