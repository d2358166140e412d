//! `OutputBuffer`: Single-write output buffer for ANSI sequences.

use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Pre-allocated buffer for building a redraw chunk.
///
/// Erase sequences, cursor commands and content are accumulated here, then
/// flushed with a single `write_all()` so the terminal never shows a frame
/// that is half erased.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical status block (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Hide cursor.
    pub fn cursor_hide(&mut self) -> io::Result<()> {
        queue!(self.data, Hide)
    }

    /// Show cursor.
    pub fn cursor_show(&mut self) -> io::Result<()> {
        queue!(self.data, Show)
    }

    /// Erase the `rows` rows above the cursor.
    ///
    /// The cursor is expected on the empty row that follows previously
    /// written, newline-terminated output. That row is cleared, then each of
    /// the `rows` rows above it, leaving the cursor at column 0 of the
    /// topmost one. Nothing is emitted for zero rows.
    pub fn erase_lines(&mut self, rows: usize) -> io::Result<()> {
        if rows == 0 {
            return Ok(());
        }

        queue!(self.data, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        for _ in 0..rows {
            queue!(self.data, MoveUp(1), Clear(ClearType::CurrentLine))?;
        }
        queue!(self.data, MoveToColumn(0))
    }

    /// Flush to a writer in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the erase sequence for `rows` rows as a string.
///
/// # Errors
///
/// Returns an error if a command fails to encode.
///
/// # Example
///
/// ```
/// use live_region::terminal::erase_lines;
///
/// assert_eq!(erase_lines(0)?, "");
/// assert_eq!(erase_lines(1)?, "\x1b[1G\x1b[2K\x1b[1A\x1b[2K\x1b[1G");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn erase_lines(rows: usize) -> io::Result<String> {
    let mut buffer = OutputBuffer::with_capacity(8 + rows * 8);
    buffer.erase_lines(rows)?;
    String::from_utf8(buffer.data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erase_zero_rows_is_empty() {
        let mut buffer = OutputBuffer::new();
        buffer.erase_lines(0).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_erase_clears_each_row() {
        let erase = erase_lines(3).unwrap();
        assert_eq!(erase.matches("\x1b[2K").count(), 4);
        assert_eq!(erase.matches("\x1b[1A").count(), 3);
        assert!(erase.ends_with("\x1b[1G"));
    }

    #[test]
    fn test_cursor_commands() {
        let mut buffer = OutputBuffer::new();
        buffer.cursor_hide().unwrap();
        buffer.cursor_show().unwrap();
        assert_eq!(buffer.as_bytes(), b"\x1b[?25l\x1b[?25h");
    }

    #[test]
    fn test_flush_single_write() {
        let mut buffer = OutputBuffer::new();
        buffer.write_str("abc");
        buffer.erase_lines(1).unwrap();

        let mut sink = Vec::new();
        buffer.flush_to(&mut sink).unwrap();
        assert_eq!(sink, buffer.as_bytes());
        assert!(sink.starts_with(b"abc"));
    }

    #[test]
    fn test_clear_reuses_buffer() {
        let mut buffer = OutputBuffer::new();
        buffer.write_str("frame");
        assert_eq!(buffer.len(), 5);
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
