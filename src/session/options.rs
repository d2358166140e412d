//! Session configuration.

/// Configuration for a [`LiveSession`](super::LiveSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    /// Leave the cursor visible while rendering.
    ///
    /// When `false` (the default) the cursor is hidden with the first redraw
    /// and shown again by [`LiveSession::done`](super::LiveSession::done).
    pub show_cursor: bool,
}

impl SessionOptions {
    /// Options with every field at its default.
    pub const fn new() -> Self {
        Self { show_cursor: false }
    }

    /// Set whether the cursor stays visible while rendering.
    #[must_use]
    pub const fn with_show_cursor(mut self, show_cursor: bool) -> Self {
        self.show_cursor = show_cursor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hides_cursor() {
        assert!(!SessionOptions::default().show_cursor);
        assert_eq!(SessionOptions::new(), SessionOptions::default());
    }

    #[test]
    fn test_builder() {
        assert!(SessionOptions::new().with_show_cursor(true).show_cursor);
    }
}
