//! Style-preserving slicing of ANSI-styled text.

use super::escape::{SgrState, Token, Tokens};

/// Slice styled text by visible character offsets.
///
/// Offsets count the characters of the stripped text (see
/// [`strip_ansi`](super::strip_ansi)), so an offset measured on the stripped
/// text cuts the original at the equivalent position. The slice starts with
/// the styling in effect at `from`, keeps any escape sequences inside the
/// range, and ends with a reset when styling is still open at `to`.
///
/// # Example
///
/// ```
/// use live_region::ansi::slice_ansi;
///
/// let styled = "\x1b[31mred text\x1b[0m";
/// assert_eq!(slice_ansi(styled, 4, None), "\x1b[31mtext\x1b[0m");
/// assert_eq!(slice_ansi(styled, 0, Some(3)), "\x1b[31mred\x1b[0m");
/// ```
pub fn slice_ansi(text: &str, from: usize, to: Option<usize>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut style = SgrState::default();
    let mut position = 0;
    let mut opened = false;

    'tokens: for token in Tokens::new(text) {
        match token {
            Token::Escape(seq) => {
                if to.is_some_and(|end| position >= end) {
                    break;
                }
                if position >= from {
                    open_once(&mut out, &style, &mut opened);
                    out.push_str(seq);
                }
                style.apply(seq);
            }
            Token::Text(run) => {
                for ch in run.chars() {
                    if to.is_some_and(|end| position >= end) {
                        break 'tokens;
                    }
                    if position >= from {
                        open_once(&mut out, &style, &mut opened);
                        out.push(ch);
                    }
                    position += 1;
                }
            }
        }
    }

    if opened {
        style.close_into(&mut out);
    }
    out
}

/// Emit the inherited styling before the first piece of the slice.
fn open_once(out: &mut String, style: &SgrState<'_>, opened: &mut bool) {
    if !*opened {
        style.open_into(out);
        *opened = true;
    }
}
