//! Session module: The live-updating region itself.
//!
//! A [`LiveSession`] turns repeated `render` calls on one stream into
//! in-place redraws:
//!
//! ```text
//! render(parts) ──▶ join ──▶ fit_to_height ──▶ unchanged? ──yes──▶ (no I/O)
//!                                                  │
//!                                                  no
//!                                                  ▼
//!                       erase previous rows + wrap_ansi(text) ──▶ one write
//! ```
//!
//! - [`fit_to_height`]: Keep the newest lines that fit on screen
//! - [`SessionOptions`]: Cursor handling
//! - [`stdout()`] / [`stderr()`]: Ready-made sessions for the standard streams

mod fit;
mod global;
mod live;
mod options;

pub use fit::fit_to_height;
pub use global::{stderr, stdout};
pub use live::{create_session, LiveSession};
pub use options::SessionOptions;
