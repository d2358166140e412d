//! Screen-level tests: session output fed through a VT100 emulator.

use live_region::session::{LiveSession, SessionOptions};
use live_region::terminal::FixedTerminal;
use std::io::{self, Write};

/// A VT100 screen behind a tty that translates `\n` into `\r\n`.
struct Screen {
    parser: vt100::Parser,
}

impl Write for Screen {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut translated = Vec::with_capacity(buf.len() + 8);
        for &byte in buf {
            if byte == b'\n' {
                translated.push(b'\r');
            }
            translated.push(byte);
        }
        self.parser.process(&translated);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn session(columns: u16, rows: u16) -> LiveSession<FixedTerminal<Screen>> {
    let screen = Screen {
        parser: vt100::Parser::new(rows, columns, 0),
    };
    LiveSession::new(FixedTerminal::new(screen, columns, rows))
}

fn screen_rows(session: &LiveSession<FixedTerminal<Screen>>) -> Vec<String> {
    let screen = session.stream().get_ref().parser.screen();
    let (_, columns) = screen.size();
    screen
        .rows(0, columns)
        .map(|row| row.trim_end().to_string())
        .collect()
}

fn cursor(session: &LiveSession<FixedTerminal<Screen>>) -> (u16, u16) {
    session.stream().get_ref().parser.screen().cursor_position()
}

#[test]
fn redraw_replaces_previous_frame() {
    let mut session = session(20, 5);
    session.render(["hello"]).unwrap();
    session.render(["world"]).unwrap();

    assert_eq!(screen_rows(&session), vec!["world", "", "", "", ""]);
    assert_eq!(cursor(&session), (1, 0));
}

#[test]
fn shorter_frame_leaves_no_residue() {
    let mut session = session(20, 6);
    session.render(["one\ntwo\nthree"]).unwrap();
    session.render(["four"]).unwrap();

    assert_eq!(screen_rows(&session), vec!["four", "", "", "", "", ""]);
}

#[test]
fn wrapped_rows_are_erased() {
    let mut session = session(5, 6);
    session.render(["abcdefghijkl"]).unwrap();
    assert_eq!(screen_rows(&session)[..3], ["abcde", "fghij", "kl"]);

    session.render(["x"]).unwrap();
    assert_eq!(screen_rows(&session), vec!["x", "", "", "", "", ""]);
}

#[test]
fn output_above_region_untouched() {
    let mut session = session(20, 5);
    session.stream_mut().write_all(b"log line\n").unwrap();

    session.render(["status 1"]).unwrap();
    session.render(["status 2"]).unwrap();

    assert_eq!(screen_rows(&session)[..2], ["log line", "status 2"]);
}

#[test]
fn clear_blanks_region() {
    let mut session = session(20, 5);
    session.render(["a\nb"]).unwrap();
    session.clear().unwrap();

    assert!(screen_rows(&session).iter().all(String::is_empty));
    assert_eq!(cursor(&session), (0, 0));
}

#[test]
fn done_keeps_frame_and_next_render_goes_below() {
    let mut session = session(20, 5);
    session.render(["first"]).unwrap();
    session.done().unwrap();
    session.render(["second"]).unwrap();

    assert_eq!(screen_rows(&session)[..2], ["first", "second"]);
}

#[test]
fn cursor_hidden_only_while_active() {
    let mut session = session(20, 5);
    session.render(["busy"]).unwrap();
    assert!(session.stream().get_ref().parser.screen().hide_cursor());

    session.done().unwrap();
    assert!(!session.stream().get_ref().parser.screen().hide_cursor());
}

#[test]
fn visible_cursor_option_respected() {
    let screen = Screen {
        parser: vt100::Parser::new(5, 20, 0),
    };
    let mut session = LiveSession::with_options(
        FixedTerminal::new(screen, 20, 5),
        SessionOptions::new().with_show_cursor(true),
    );
    session.render(["busy"]).unwrap();
    assert!(!session.stream().get_ref().parser.screen().hide_cursor());
}

#[test]
fn wide_characters_wrap_on_column_count() {
    let mut session = session(4, 5);
    session.render(["日本語"]).unwrap();

    assert_eq!(screen_rows(&session)[..2], ["日本", "語"]);
    assert_eq!(session.line_count(), 2);
}

#[test]
fn tall_frames_never_scroll() {
    let mut session = session(10, 5);
    let first: Vec<String> = (1..=10).map(|n| n.to_string()).collect();
    session.render([first.join("\n")]).unwrap();
    assert_eq!(screen_rows(&session), vec!["7", "8", "9", "10", ""]);

    let second: Vec<String> = (11..=20).map(|n| n.to_string()).collect();
    session.render([second.join("\n")]).unwrap();
    assert_eq!(screen_rows(&session), vec!["17", "18", "19", "20", ""]);
}

#[test]
fn resize_redraws_at_new_width() {
    let mut session = session(10, 5);
    session.render(["abcdefgh"]).unwrap();
    assert_eq!(session.line_count(), 1);

    session.stream_mut().resize(Some(4), Some(5));
    session.render(["abcdefgh"]).unwrap();
    assert_eq!(session.line_count(), 2);
    assert_eq!(screen_rows(&session)[..3], ["abcd", "efgh", ""]);
}

#[test]
fn styled_text_reaches_screen_plain() {
    let mut session = session(20, 5);
    session.render(["\x1b[1m\x1b[31mbold red\x1b[0m"]).unwrap();

    assert_eq!(screen_rows(&session)[0], "bold red");
    let screen = session.stream().get_ref().parser.screen();
    let cell = screen.cell(0, 0).unwrap();
    assert!(cell.bold());
    assert_eq!(cell.fgcolor(), vt100::Color::Idx(1));
}
