//! # Live Region
//!
//! Flicker-free in-place updates of multi-line terminal output.
//!
//! A live region is a block of (possibly styled) text at the bottom of a
//! terminal stream that is redrawn in place: every render erases the rows the
//! previous one wrote and writes the new content in a single chunk. Spinners,
//! progress bars and status panels update without scrolling the terminal.
//!
//! ## Core Concepts
//!
//! - **Skip unchanged frames**: identical text at an identical width is never
//!   written, so rendering every tick of a loop is cheap
//! - **Height fitting**: only the newest lines that fit on screen are kept
//! - **Hard wrapping**: rows are cut at the terminal width, with wide (CJK)
//!   characters measured as two columns and escape sequences kept intact
//! - **One write per frame**: erase + content leave in a single `write_all`
//!
//! ## Example
//!
//! ```rust,no_run
//! use live_region::session;
//!
//! for percent in 0..=100 {
//!     session::stdout().render(["downloading", &format!("{percent}%")])?;
//! }
//! session::stdout().done()?;
//! # Ok::<(), std::io::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod ansi;
pub mod session;
pub mod terminal;
pub mod width;

// Re-exports for convenience
pub use ansi::{slice_ansi, strip_ansi, wrap_ansi, WrapOptions};
pub use session::{create_session, fit_to_height, LiveSession, SessionOptions};
pub use terminal::{FixedTerminal, TerminalStream};
pub use width::{classify, is_fullwidth, string_width, WidthCategory};
