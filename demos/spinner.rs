//! Spinner demo: One-line status redrawn in place on stdout.
//!
//! Run with `RUST_LOG=live_region=debug` to see redraw events on stderr.

use live_region::session;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("Live Region Spinner");
    println!("===================");

    for tick in 0..80 {
        // Rendered every tick, but the text only changes every fourth one.
        let frame = FRAMES[(tick / 4) % FRAMES.len()];
        let step = tick / 4;
        session::stdout().render([
            format!("\x1b[36m{frame}\x1b[0m"),
            format!("resolving dependencies ({step}/20)"),
        ])?;
        thread::sleep(Duration::from_millis(20));
    }

    session::stdout().render(["\x1b[32m✔\x1b[0m dependencies resolved"])?;
    session::stdout().done()?;
    println!("Next output continues below the final frame.");
    Ok(())
}
