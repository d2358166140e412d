//! ANSI module: Style-aware text utilities.
//!
//! Every function here treats escape sequences as zero-width and never cuts
//! through one:
//! - [`strip_ansi`]: Remove all escape sequences
//! - [`slice_ansi`]: Cut at a visible character offset, keeping styling
//! - [`wrap_ansi`]: Reflow to a column count, see [`WrapOptions`]
//!
//! The [`Tokens`] iterator underneath splits text into escape sequences and
//! visible runs.

mod escape;
mod slice;
mod strip;
mod wrap;

pub use escape::{is_sgr, SgrState, Token, Tokens, SGR_RESET};
pub use slice::slice_ansi;
pub use strip::strip_ansi;
pub use wrap::{wrap_ansi, WrapOptions};
