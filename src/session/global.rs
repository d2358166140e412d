//! Process-wide default sessions for stdout and stderr.

use super::live::LiveSession;
use super::options::SessionOptions;
use std::io::{self, Stderr, Stdout};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

static STDOUT: LazyLock<Mutex<LiveSession<Stdout>>> =
    LazyLock::new(|| Mutex::new(LiveSession::with_options(io::stdout(), SessionOptions::new())));

static STDERR: LazyLock<Mutex<LiveSession<Stderr>>> =
    LazyLock::new(|| Mutex::new(LiveSession::with_options(io::stderr(), SessionOptions::new())));

/// The default session on standard output.
///
/// Hides the cursor while active and restores it on `done()`. Hold the guard
/// only for the duration of a call; output written to stdout elsewhere while
/// a frame is on screen ends up inside the region.
///
/// # Example
///
/// ```no_run
/// live_region::session::stdout().render(["working..."])?;
/// live_region::session::stdout().done()?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn stdout() -> MutexGuard<'static, LiveSession<Stdout>> {
    STDOUT.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The default session on standard error, independent of [`stdout()`].
pub fn stderr() -> MutexGuard<'static, LiveSession<Stderr>> {
    STDERR.lock().unwrap_or_else(PoisonError::into_inner)
}
