//! Column wrapping for ANSI-styled text.
//!
//! Provides two wrapping modes, selected by [`WrapOptions::WORD_WRAP`]:
//! - **Column-break**: every row is cut exactly at the column boundary
//! - **Word-break**: rows break at spaces; over-long words are cut only
//!   with [`WrapOptions::HARD`]
//!
//! Both modes:
//! - keep explicit newlines as row breaks
//! - measure wide characters as 2 columns
//! - never split a grapheme cluster or an escape sequence
//! - close active styling before an inserted break and reopen it after

use super::escape::{SgrState, Token, Tokens};
use crate::width::grapheme_columns;
use bitflags::bitflags;
use unicode_segmentation::UnicodeSegmentation;

bitflags! {
    /// Flags controlling [`wrap_ansi`].
    ///
    /// # Example
    /// ```
    /// use live_region::ansi::WrapOptions;
    /// let options = WrapOptions::HARD | WrapOptions::WORD_WRAP;
    /// assert!(options.contains(WrapOptions::HARD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WrapOptions: u8 {
        /// Strip leading and trailing spaces from every produced row.
        const TRIM = 0b0000_0001;
        /// Cut words wider than a row at the column boundary.
        const HARD = 0b0000_0010;
        /// Prefer breaking at spaces over breaking at the column boundary.
        const WORD_WRAP = 0b0000_0100;
    }
}

impl std::fmt::Debug for WrapOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Wrap styled text to `columns` terminal columns.
///
/// Returns the input unchanged when `columns` is 0.
///
/// # Example
///
/// ```
/// use live_region::ansi::{wrap_ansi, WrapOptions};
///
/// assert_eq!(wrap_ansi("abcdef", 4, WrapOptions::HARD), "abcd\nef");
/// assert_eq!(wrap_ansi("日本語", 4, WrapOptions::HARD), "日本\n語");
/// ```
pub fn wrap_ansi(text: &str, columns: usize, options: WrapOptions) -> String {
    if columns == 0 {
        return text.to_owned();
    }

    let mut out = String::with_capacity(text.len() + text.len() / columns + 8);
    let mut style = SgrState::default();

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }

        let units = units(line);
        let rows = if options.contains(WrapOptions::WORD_WRAP) {
            break_words(&units, columns, options.contains(WrapOptions::HARD))
        } else {
            break_columns(&units, columns)
        };

        for (row_index, row) in rows.iter().enumerate() {
            let trimmed;
            let row: &[Unit<'_>] = if options.contains(WrapOptions::TRIM) {
                trimmed = trim_row(row);
                &trimmed
            } else {
                row
            };

            if row_index > 0 {
                style.close_into(&mut out);
                out.push('\n');
                style.open_into(&mut out);
            }

            for unit in row {
                match *unit {
                    Unit::Escape(seq) => {
                        out.push_str(seq);
                        style.apply(seq);
                    }
                    Unit::Grapheme { text, .. } => out.push_str(text),
                }
            }
        }
    }

    out
}

/// Smallest layout piece: an escape sequence or one grapheme cluster.
#[derive(Debug, Clone, Copy)]
enum Unit<'a> {
    Escape(&'a str),
    Grapheme { text: &'a str, columns: usize },
}

impl Unit<'_> {
    const fn columns(&self) -> usize {
        match self {
            Self::Escape(_) => 0,
            Self::Grapheme { columns, .. } => *columns,
        }
    }

    fn is_space(&self) -> bool {
        matches!(self, Self::Grapheme { text: " ", .. })
    }

    const fn is_escape(&self) -> bool {
        matches!(self, Self::Escape(_))
    }
}

fn units(line: &str) -> Vec<Unit<'_>> {
    let mut units = Vec::with_capacity(line.len());
    for token in Tokens::new(line) {
        match token {
            Token::Escape(seq) => units.push(Unit::Escape(seq)),
            Token::Text(run) => units.extend(run.graphemes(true).map(|g| Unit::Grapheme {
                text: g,
                columns: grapheme_columns(g),
            })),
        }
    }
    units
}

/// Accumulates units into rows no wider than `columns`.
struct RowBuilder<'a> {
    columns: usize,
    rows: Vec<Vec<Unit<'a>>>,
    current: Vec<Unit<'a>>,
    width: usize,
}

impl<'a> RowBuilder<'a> {
    const fn new(columns: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            current: Vec::new(),
            width: 0,
        }
    }

    const fn fits(&self, columns: usize) -> bool {
        self.width + columns <= self.columns
    }

    /// Start a new row. Escapes at the tail of the current row move along,
    /// so styling switched on right before a break starts the next row.
    fn break_row(&mut self) {
        let keep = self
            .current
            .iter()
            .rposition(|unit| !unit.is_escape())
            .map_or(0, |i| i + 1);
        let carried = self.current.split_off(keep);
        self.rows.push(std::mem::replace(&mut self.current, carried));
        self.width = 0;
    }

    fn push(&mut self, unit: Unit<'a>) {
        self.width += unit.columns();
        self.current.push(unit);
    }

    /// Push, breaking first if the unit would overflow a non-empty row.
    fn push_breaking(&mut self, unit: Unit<'a>) {
        let columns = unit.columns();
        if columns > 0 && self.width > 0 && !self.fits(columns) {
            self.break_row();
        }
        self.push(unit);
    }

    fn finish(mut self) -> Vec<Vec<Unit<'a>>> {
        self.rows.push(self.current);
        self.rows
    }
}

fn break_columns<'a>(units: &[Unit<'a>], columns: usize) -> Vec<Vec<Unit<'a>>> {
    let mut builder = RowBuilder::new(columns);
    for unit in units {
        builder.push_breaking(*unit);
    }
    builder.finish()
}

fn break_words<'a>(units: &[Unit<'a>], columns: usize, hard: bool) -> Vec<Vec<Unit<'a>>> {
    let mut builder = RowBuilder::new(columns);

    for chunk in chunks(units) {
        let is_space = chunk.iter().any(Unit::is_space);
        let width: usize = chunk.iter().map(Unit::columns).sum();

        // Over-long words under HARD fill the current row before being cut.
        let cut = is_space || (hard && width > columns);
        if !cut && builder.width > 0 && !builder.fits(width) {
            builder.break_row();
        }

        if cut {
            for unit in chunk {
                builder.push_breaking(*unit);
            }
        } else {
            for unit in chunk {
                builder.push(*unit);
            }
        }
    }

    builder.finish()
}

/// Split units into alternating runs of words and spaces.
/// Escapes join whichever run is open.
fn chunks<'u, 'a>(units: &'u [Unit<'a>]) -> Vec<&'u [Unit<'a>]> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut kind: Option<bool> = None;

    for (i, unit) in units.iter().enumerate() {
        if unit.is_escape() {
            continue;
        }
        let space = unit.is_space();
        match kind {
            Some(open) if open != space => {
                chunks.push(&units[start..i]);
                start = i;
                kind = Some(space);
            }
            Some(_) => {}
            None => kind = Some(space),
        }
    }

    if start < units.len() {
        chunks.push(&units[start..]);
    }
    chunks
}

/// Drop spaces before the first and after the last visible grapheme.
fn trim_row<'a>(row: &[Unit<'a>]) -> Vec<Unit<'a>> {
    let visible = |unit: &Unit<'_>| !unit.is_escape() && !unit.is_space();
    let bounds = row
        .iter()
        .position(visible)
        .zip(row.iter().rposition(visible));

    row.iter()
        .enumerate()
        .filter(|(i, unit)| {
            !unit.is_space() || bounds.is_some_and(|(first, last)| (first..=last).contains(i))
        })
        .map(|(_, unit)| *unit)
        .collect()
}
