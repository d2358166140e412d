//! Terminal module: Where rendered output goes.
//!
//! This module contains:
//! - [`TerminalStream`]: A writer that knows (or doesn't) its terminal size
//! - [`FixedTerminal`]: Any writer with caller-controlled dimensions
//! - [`OutputBuffer`]: Single-write accumulation of erase, cursor and content

mod output;
mod stream;

pub use output::{erase_lines, OutputBuffer};
pub use stream::{FixedTerminal, TerminalStream, DEFAULT_COLUMNS, DEFAULT_ROWS};
