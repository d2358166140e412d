//! Fitting output to the visible height of the terminal.

use crate::ansi::{slice_ansi, strip_ansi};
use std::borrow::Cow;

/// Keep only the last `rows` newline-separated lines of `text`.
///
/// Text that already fits is returned as is. Otherwise the oldest lines are
/// dropped: the cut offset is measured on the stripped text and applied to
/// the styled original, so styling active at the cut carries over.
///
/// # Example
///
/// ```
/// use live_region::session::fit_to_height;
///
/// assert_eq!(fit_to_height("1\n2\n3\n4\n5", 3), "3\n4\n5");
/// assert_eq!(fit_to_height("1\n2", 3), "1\n2");
/// ```
pub fn fit_to_height(text: &str, rows: usize) -> Cow<'_, str> {
    let line_count = text.split('\n').count();
    if line_count <= rows {
        return Cow::Borrowed(text);
    }

    let to_remove = line_count - rows;
    let dropped = text.split('\n').take(to_remove).collect::<Vec<_>>().join("\n");
    // +1 skips the newline that ends the last dropped line.
    let offset = strip_ansi(&dropped).chars().count() + 1;

    Cow::Owned(slice_ansi(text, offset, None))
}
