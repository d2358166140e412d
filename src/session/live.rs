//! `LiveSession`: In-place redraw of a multi-line block.

use super::fit::fit_to_height;
use super::options::SessionOptions;
use crate::ansi::{wrap_ansi, WrapOptions};
use crate::terminal::{OutputBuffer, TerminalStream};
use std::io;
use tracing::{debug, trace};

/// A live-updating region at the bottom of a terminal stream.
///
/// Each [`render`](Self::render) replaces what the previous one drew: the
/// old rows are erased and the new content written in the same chunk, so the
/// terminal never scrolls and never shows a blank frame. A frame identical
/// to the one on screen (same text, same terminal width) is not written at
/// all, which makes it cheap to render from a tight loop.
///
/// A session owns its stream and its bookkeeping exclusively; driving one
/// session from several places at once would desynchronise the erase counts
/// from what the terminal shows. Dropping a session that still has the
/// cursor hidden shows it again.
///
/// # Example
///
/// ```
/// use live_region::session::LiveSession;
/// use live_region::terminal::FixedTerminal;
///
/// let mut session = LiveSession::new(FixedTerminal::new(Vec::new(), 80, 24));
/// session.render(["downloading", "42%"])?;
/// session.render(["downloading", "43%"])?.done()?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LiveSession<S: TerminalStream> {
    /// Output stream.
    stream: S,
    /// Configuration.
    options: SessionOptions,
    /// Height-fitted text of the frame on screen, before wrapping.
    previous_output: String,
    /// Terminal width the frame on screen was wrapped to.
    previous_width: Option<u16>,
    /// Rows the frame on screen occupies after wrapping.
    previous_line_count: usize,
    /// Whether this session hid the cursor and has not restored it yet.
    cursor_hidden: bool,
    /// Pre-allocated redraw chunk.
    output: OutputBuffer,
}

/// Create a session on `stream` with the given options.
pub fn create_session<S: TerminalStream>(stream: S, options: SessionOptions) -> LiveSession<S> {
    LiveSession::with_options(stream, options)
}

impl<S: TerminalStream> LiveSession<S> {
    /// Create a session with default options (cursor hidden while active).
    pub fn new(stream: S) -> Self {
        Self::with_options(stream, SessionOptions::default())
    }

    /// Create a session with custom options.
    pub fn with_options(stream: S, options: SessionOptions) -> Self {
        Self {
            stream,
            options,
            previous_output: String::new(),
            previous_width: None,
            previous_line_count: 0,
            cursor_hidden: false,
            output: OutputBuffer::new(),
        }
    }

    /// Replace the region with `parts` joined by single spaces.
    ///
    /// The text is cut to the terminal height (keeping the newest lines) and
    /// hard-wrapped to the terminal width. Nothing is written when the result
    /// matches the frame on screen at the same width. Returns the session so
    /// calls can be chained.
    ///
    /// # Errors
    ///
    /// Returns the stream's error if the write fails; the session then still
    /// describes the previous frame.
    pub fn render<I, T>(&mut self, parts: I) -> io::Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut text = String::new();
        for (index, part) in parts.into_iter().enumerate() {
            if index > 0 {
                text.push(' ');
            }
            text.push_str(part.as_ref());
        }
        text.push('\n');

        let fitted = fit_to_height(&text, usize::from(self.stream.height()));
        let width = self.stream.width();

        if fitted == self.previous_output.as_str() && self.previous_width == Some(width) {
            trace!(width, "frame unchanged, skipping redraw");
            return Ok(self);
        }

        let wrapped = wrap_ansi(&fitted, usize::from(width), WrapOptions::HARD);

        self.output.clear();
        let hide_cursor = !self.options.show_cursor && !self.cursor_hidden;
        if hide_cursor {
            self.output.cursor_hide()?;
        }
        self.output.erase_lines(self.previous_line_count)?;
        self.output.write_str(&wrapped);
        self.output.flush_to(&mut self.stream)?;

        let line_count = count_rows(&wrapped);
        debug!(
            erased = self.previous_line_count,
            written = line_count,
            width,
            "redrew live region"
        );

        self.cursor_hidden |= hide_cursor;
        self.previous_output = fitted.into_owned();
        self.previous_width = Some(width);
        self.previous_line_count = line_count;

        Ok(self)
    }

    /// Erase the region and forget it.
    ///
    /// Cursor visibility is left alone: a cleared session may render again.
    pub fn clear(&mut self) -> io::Result<()> {
        if self.previous_line_count > 0 {
            self.output.clear();
            self.output.erase_lines(self.previous_line_count)?;
            self.output.flush_to(&mut self.stream)?;
        }
        debug!(erased = self.previous_line_count, "cleared live region");
        self.reset();
        Ok(())
    }

    /// End the live update, leaving the last frame on screen.
    ///
    /// Following output starts below the frame, and the cursor is shown again
    /// if this session hid it. The session can be reused afterwards.
    pub fn done(&mut self) -> io::Result<()> {
        self.reset();
        if self.cursor_hidden {
            self.output.clear();
            self.output.cursor_show()?;
            self.output.flush_to(&mut self.stream)?;
            self.cursor_hidden = false;
        }
        debug!("live region done");
        Ok(())
    }

    /// Forget the frame on screen.
    fn reset(&mut self) {
        self.previous_output.clear();
        self.previous_width = None;
        self.previous_line_count = 0;
    }

    /// Height-fitted text of the frame on screen, empty when idle.
    pub fn previous_output(&self) -> &str {
        &self.previous_output
    }

    /// Number of rows the frame on screen occupies.
    pub const fn line_count(&self) -> usize {
        self.previous_line_count
    }

    /// Whether a frame is on screen.
    pub const fn is_active(&self) -> bool {
        self.previous_line_count > 0
    }

    /// Whether this session currently has the cursor hidden.
    pub const fn cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    /// Get the session configuration.
    pub const fn options(&self) -> SessionOptions {
        self.options
    }

    /// Get a reference to the output stream.
    pub const fn stream(&self) -> &S {
        &self.stream
    }

    /// Get a mutable reference to the output stream.
    ///
    /// Writing through it puts the terminal out of step with the session;
    /// call [`clear`](Self::clear) first.
    pub fn stream_mut(&mut self) -> &mut S {
        &mut self.stream
    }
}

impl<S: TerminalStream> Drop for LiveSession<S> {
    fn drop(&mut self) {
        // Restore the cursor if `done()` was never reached.
        if self.cursor_hidden {
            self.output.clear();
            let _ = self
                .output
                .cursor_show()
                .and_then(|()| self.output.flush_to(&mut self.stream));
        }
    }
}

impl<S: TerminalStream> std::fmt::Debug for LiveSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveSession")
            .field("options", &self.options)
            .field("previous_width", &self.previous_width)
            .field("line_count", &self.previous_line_count)
            .field("cursor_hidden", &self.cursor_hidden)
            .finish_non_exhaustive()
    }
}

/// Rows occupied by newline-terminated output.
fn count_rows(output: &str) -> usize {
    output.bytes().filter(|&b| b == b'\n').count()
}
