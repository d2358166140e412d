//! Output streams with a (possibly unknown) terminal size.

use std::io::{self, IsTerminal, Stderr, Stdout, Write};

/// Columns assumed when the stream cannot report its width.
pub const DEFAULT_COLUMNS: u16 = 80;

/// Rows assumed when the stream cannot report its height.
pub const DEFAULT_ROWS: u16 = 24;

/// A writable stream attached to something with terminal dimensions.
///
/// Writes are synchronous and appear in call order. Dimensions are queried
/// on every use, never cached, so resizes are picked up by the next render.
pub trait TerminalStream: Write {
    /// Current width in columns, `None` when unknown.
    fn columns(&self) -> Option<u16>;

    /// Current height in rows, `None` when unknown.
    fn rows(&self) -> Option<u16>;

    /// Width in columns, falling back to [`DEFAULT_COLUMNS`].
    ///
    /// A reported width of 0 counts as unknown.
    fn width(&self) -> u16 {
        self.columns().filter(|&c| c > 0).unwrap_or(DEFAULT_COLUMNS)
    }

    /// Height in rows, falling back to [`DEFAULT_ROWS`].
    ///
    /// A reported height of 0 counts as unknown.
    fn height(&self) -> u16 {
        self.rows().filter(|&r| r > 0).unwrap_or(DEFAULT_ROWS)
    }
}

/// Size of the controlling terminal, if `handle` is one.
fn tty_size(handle: &impl IsTerminal) -> Option<(u16, u16)> {
    if handle.is_terminal() {
        crossterm::terminal::size().ok()
    } else {
        None
    }
}

impl TerminalStream for Stdout {
    fn columns(&self) -> Option<u16> {
        tty_size(self).map(|(columns, _)| columns)
    }

    fn rows(&self) -> Option<u16> {
        tty_size(self).map(|(_, rows)| rows)
    }
}

impl TerminalStream for Stderr {
    fn columns(&self) -> Option<u16> {
        tty_size(self).map(|(columns, _)| columns)
    }

    fn rows(&self) -> Option<u16> {
        tty_size(self).map(|(_, rows)| rows)
    }
}

impl<T: TerminalStream + ?Sized> TerminalStream for &mut T {
    fn columns(&self) -> Option<u16> {
        (**self).columns()
    }

    fn rows(&self) -> Option<u16> {
        (**self).rows()
    }
}

/// Any writer with caller-controlled dimensions.
///
/// Useful when output goes to a pipe or a log while still being laid out for
/// a known viewport, and for driving a session in tests.
///
/// # Example
///
/// ```
/// use live_region::terminal::{FixedTerminal, TerminalStream};
///
/// let mut term = FixedTerminal::new(Vec::new(), 40, 10);
/// assert_eq!(term.width(), 40);
/// term.resize(Some(100), None);
/// assert_eq!(term.width(), 100);
/// assert_eq!(term.height(), 24);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedTerminal<W> {
    inner: W,
    columns: Option<u16>,
    rows: Option<u16>,
}

impl<W: Write> FixedTerminal<W> {
    /// Wrap `inner` with a fixed size.
    pub const fn new(inner: W, columns: u16, rows: u16) -> Self {
        Self {
            inner,
            columns: Some(columns),
            rows: Some(rows),
        }
    }

    /// Wrap `inner` with unknown dimensions (defaults apply).
    pub const fn with_unknown_size(inner: W) -> Self {
        Self {
            inner,
            columns: None,
            rows: None,
        }
    }

    /// Change the reported dimensions.
    pub fn resize(&mut self, columns: Option<u16>, rows: Option<u16>) {
        self.columns = columns;
        self.rows = rows;
    }

    /// Get a reference to the wrapped writer.
    pub const fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Get a mutable reference to the wrapped writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for FixedTerminal<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> TerminalStream for FixedTerminal<W> {
    fn columns(&self) -> Option<u16> {
        self.columns
    }

    fn rows(&self) -> Option<u16> {
        self.rows
    }
}
