//! Escape sequence tokenizer and SGR state tracking.
//!
//! Recognised sequences:
//! - CSI sequences: `ESC [` ... final byte (0x40-0x7E)
//! - OSC sequences: `ESC ]` ... BEL (0x07) or ST (ESC \)
//! - DCS/PM/APC sequences: `ESC P`/`ESC ^`/`ESC _` ... ST
//! - Two-character sequences: `ESC` + single char

const ESC: u8 = 0x1B;

/// SGR sequence that resets every text attribute.
pub const SGR_RESET: &str = "\x1b[0m";

/// A lexical piece of styled text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A complete (or unterminated, trailing) escape sequence.
    Escape(&'a str),
    /// A run of visible text containing no ESC byte.
    Text(&'a str),
}

/// Iterator over the [`Token`]s of a string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    /// Tokenize `src`.
    pub const fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.src.as_bytes();
        let start = self.pos;
        if start >= bytes.len() {
            return None;
        }

        // ESC is a single ASCII byte, so every split point below lands on a
        // UTF-8 boundary: escape bodies that are not ASCII are skipped whole.
        if bytes[start] == ESC {
            self.pos = skip_escape_sequence(bytes, start);
            while !self.src.is_char_boundary(self.pos) {
                self.pos += 1;
            }
            Some(Token::Escape(&self.src[start..self.pos]))
        } else {
            let end = bytes[start..]
                .iter()
                .position(|&b| b == ESC)
                .map_or(bytes.len(), |offset| start + offset);
            self.pos = end;
            Some(Token::Text(&self.src[start..end]))
        }
    }
}

/// Skip an escape sequence starting at `pos` (which points to ESC byte).
/// Returns the byte index after the complete sequence.
fn skip_escape_sequence(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    if next >= bytes.len() {
        return bytes.len();
    }

    match bytes[next] {
        b'[' => skip_csi(bytes, next + 1),
        b']' | b'P' | b'^' | b'_' => skip_string_terminated(bytes, next + 1),
        _ => next + 1,
    }
}

/// Skip a CSI sequence. `pos` is the byte after `[`.
fn skip_csi(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() {
        let b = bytes[i];
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            // Invalid byte: the sequence ends before it.
            return i;
        }
        i += 1;
    }
    bytes.len()
}

/// Skip a string-terminated sequence (OSC, DCS, PM, APC).
/// `pos` is the byte after the type indicator.
fn skip_string_terminated(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if i + 1 < bytes.len() && bytes[i + 1] == b'\\' => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Whether `seq` is a Select Graphic Rendition (styling) sequence.
#[inline]
pub fn is_sgr(seq: &str) -> bool {
    seq.starts_with("\x1b[") && seq.ends_with('m')
}

/// Attribute slots an SGR parameter can set or unset.
const BOLD: usize = 0;
const DIM: usize = 1;
const ITALIC: usize = 2;
const UNDERLINE: usize = 3;
const BLINK: usize = 4;
const INVERSE: usize = 5;
const HIDDEN: usize = 6;
const STRIKE: usize = 7;
const OVERLINE: usize = 8;
const FOREGROUND: usize = 9;
const BACKGROUND: usize = 10;
const UNDERLINE_COLOR: usize = 11;
const SLOTS: usize = 12;

/// Effect of one SGR parameter group.
enum Effect {
    /// Parameter 0: drop everything.
    Reset,
    /// Set a slot to this group.
    Set(usize),
    /// Clear these slots.
    Unset(&'static [usize]),
    /// Unknown parameter, kept as-is.
    Other,
}

fn effect(code: u16) -> Effect {
    match code {
        0 => Effect::Reset,
        1 => Effect::Set(BOLD),
        2 => Effect::Set(DIM),
        3 => Effect::Set(ITALIC),
        4 | 21 => Effect::Set(UNDERLINE),
        5 | 6 => Effect::Set(BLINK),
        7 => Effect::Set(INVERSE),
        8 => Effect::Set(HIDDEN),
        9 => Effect::Set(STRIKE),
        22 => Effect::Unset(&[BOLD, DIM]),
        23 => Effect::Unset(&[ITALIC]),
        24 => Effect::Unset(&[UNDERLINE]),
        25 => Effect::Unset(&[BLINK]),
        27 => Effect::Unset(&[INVERSE]),
        28 => Effect::Unset(&[HIDDEN]),
        29 => Effect::Unset(&[STRIKE]),
        30..=38 | 90..=97 => Effect::Set(FOREGROUND),
        39 => Effect::Unset(&[FOREGROUND]),
        40..=48 | 100..=107 => Effect::Set(BACKGROUND),
        49 => Effect::Unset(&[BACKGROUND]),
        53 => Effect::Set(OVERLINE),
        55 => Effect::Unset(&[OVERLINE]),
        58 => Effect::Set(UNDERLINE_COLOR),
        59 => Effect::Unset(&[UNDERLINE_COLOR]),
        _ => Effect::Other,
    }
}

/// Byte ranges of the `;`-separated fields of `params`.
fn field_spans(params: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    for (i, b) in params.bytes().enumerate() {
        if b == b';' {
            spans.push((start, i));
            start = i + 1;
        }
    }
    spans.push((start, params.len()));
    spans
}

/// Styling that is in effect at some point of a styled string.
///
/// Each SGR parameter replaces whatever earlier parameter set the same
/// attribute, so the state stays bounded however many sequences are fed and
/// can be re-established cheaply at the start of a new row or slice.
#[derive(Debug, Clone, Default)]
pub struct SgrState<'a> {
    /// Parameter group currently setting each attribute, e.g. `"38;5;196"`.
    slots: [Option<&'a str>; SLOTS],
    /// Parameters with no known attribute, deduplicated.
    other: Vec<&'a str>,
}

impl<'a> SgrState<'a> {
    /// Feed an escape sequence. Non-SGR sequences are ignored.
    pub fn apply(&mut self, seq: &'a str) {
        if !is_sgr(seq) {
            return;
        }
        let params = &seq[2..seq.len() - 1];
        let spans = field_spans(params);

        let mut index = 0;
        while index < spans.len() {
            let (start, end) = spans[index];
            let field = &params[start..end];
            let head = field.split(':').next().unwrap_or_default();
            let code = if head.is_empty() { Some(0) } else { head.parse::<u16>().ok() };

            // Extended colours take their arguments from the following fields.
            let mut last = index;
            if matches!(code, Some(38 | 48 | 58)) && !field.contains(':') {
                let kind = spans.get(index + 1).map(|&(s, e)| &params[s..e]);
                last = match kind {
                    Some("5") => index + 2,
                    Some("2") => index + 4,
                    _ => index,
                }
                .min(spans.len() - 1);
            }
            let group = &params[start..spans[last].1];

            match code.map_or(Effect::Other, effect) {
                Effect::Reset => self.reset(),
                Effect::Set(slot) => self.slots[slot] = Some(group),
                Effect::Unset(slots) => {
                    for &slot in slots {
                        self.slots[slot] = None;
                    }
                }
                Effect::Other => {
                    if !self.other.contains(&group) {
                        self.other.push(group);
                    }
                }
            }
            index = last + 1;
        }
    }

    fn reset(&mut self) {
        self.slots = [None; SLOTS];
        self.other.clear();
    }

    /// Whether any styling is in effect.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.slots.iter().any(Option::is_some) || !self.other.is_empty()
    }

    /// Append the sequences that re-establish this state.
    pub fn open_into(&self, out: &mut String) {
        for group in self.slots.iter().flatten().chain(&self.other) {
            out.push_str("\x1b[");
            out.push_str(group);
            out.push('m');
        }
    }

    /// Append a reset if any styling is in effect.
    pub fn close_into(&self, out: &mut String) {
        if self.is_active() {
            out.push_str(SGR_RESET);
        }
    }
}
