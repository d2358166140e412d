//! Downloads demo: Multi-line progress panel with log lines scrolling above it.
//!
//! The panel is cleared before each log line and redrawn after it, so the log
//! scrolls normally while the panel stays pinned below.

use live_region::session::{create_session, SessionOptions};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const FILES: [(&str, u32); 4] = [
    ("linux-6.9.tar.xz", 140),
    ("rustc-1.80.0-src.tar.gz", 260),
    ("ubuntu-24.04-live-server-amd64.iso", 2600),
    ("日本語ドキュメント.pdf", 12),
];

fn bar(percent: u32, width: usize) -> String {
    let filled = width * percent as usize / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn panel(progress: &[u32]) -> String {
    FILES
        .iter()
        .zip(progress)
        .map(|((name, size), &percent)| {
            let color = if percent == 100 { 32 } else { 33 };
            format!(
                "\x1b[{color}m{}\x1b[0m {percent:>3}% {name} ({size} MB)",
                bar(percent, 20)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut session = create_session(io::stdout(), SessionOptions::default());
    let mut progress = [0u32; FILES.len()];
    let speeds = [3, 2, 1, 7];

    while progress.iter().any(|&p| p < 100) {
        for (index, speed) in speeds.iter().enumerate() {
            let before = progress[index];
            progress[index] = (before + speed).min(100);

            if before < 100 && progress[index] == 100 {
                session.clear()?;
                writeln!(session.stream_mut(), "finished {}", FILES[index].0)?;
            }
        }

        session.render([panel(&progress)])?;
        thread::sleep(Duration::from_millis(50));
    }

    session.done()?;
    Ok(())
}
