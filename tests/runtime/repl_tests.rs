//! Game loop tests.
//!
//! Tests for the read-dispatch-print loop.

use std::io::{self, Cursor, Write};

use mudline_foundation::{ErrorKind, Player};
use mudline_runtime::{BufReadEditor, GameState, ReadResult, Repl, messages};

use crate::common::{ScriptedEditor, scripted_repl, written};

#[test]
fn prompt_before_every_read() {
    let mut repl = scripted_repl(&["look", "help", "quit"]);
    repl.run().unwrap();

    assert_eq!(repl.editor().prompts, ["> ", "> ", "> "]);
}

#[test]
fn no_reads_after_quit() {
    let mut repl = scripted_repl(&["quit", "look", "look"]);
    repl.run().unwrap();

    assert_eq!(repl.editor().reads(), 1);
    assert_eq!(written(&repl), "game over.\n");
}

#[test]
fn responses_in_dispatch_order() {
    let mut repl = scripted_repl(&["move left", "pick up torch", "inventory", "quit"]);
    repl.run().unwrap();

    assert_eq!(
        written(&repl),
        "you moved left. A new area unfolds before you.\n\
         you picked up torch.\n\
         your inventory is empty.\n\
         game over.\n"
    );
}

#[test]
fn end_of_input_quits() {
    let mut repl = scripted_repl(&["look"]);
    repl.run().unwrap();

    assert_eq!(repl.controller().state(), GameState::Stopped);
    assert!(written(&repl).ends_with("\ngame over.\n"));
}

#[test]
fn empty_input_stream_quits_immediately() {
    let mut repl = scripted_repl(&[]);
    repl.run().unwrap();

    assert_eq!(repl.editor().reads(), 1);
    assert_eq!(written(&repl), "\ngame over.\n");
}

#[test]
fn interrupt_discards_line() {
    let editor = ScriptedEditor::with_results(vec![
        ReadResult::Line("look".to_string()),
        ReadResult::Interrupted,
        ReadResult::Line("quit".to_string()),
    ]);
    let mut repl = Repl::with_output(editor, Vec::new(), Player::default()).without_banner();
    repl.run().unwrap();

    assert_eq!(
        written(&repl),
        format!("{}\n\n{}\n", messages::LOOK, messages::GAME_OVER)
    );
    assert_eq!(repl.editor().history, ["look", "quit"]);
}

#[test]
fn buffered_stdin_style_session() {
    let input = Cursor::new("look\n\nmove Forward\npick up Lamp\nquit\nlook\n");
    let editor = BufReadEditor::new(input, Vec::new());
    let mut repl = Repl::with_output(editor, Vec::new(), Player::new("Ada")).without_banner();
    repl.run().unwrap();

    assert_eq!(repl.editor().prompt_out().as_slice(), b"> > > > > ");
    assert_eq!(
        written(&repl),
        "you look around. The room appears empty and quiet.\n\
         you moved forward. A new area unfolds before you.\n\
         you picked up Lamp.\n\
         game over.\n"
    );
}

#[test]
fn invalid_utf8_line_is_an_unknown_command() {
    let input = Cursor::new(&b"look\n\xff\xfe bad\nhelp\nquit\n"[..]);
    let editor = BufReadEditor::new(input, Vec::new());
    let mut repl = Repl::with_output(editor, Vec::new(), Player::default()).without_banner();
    repl.run().unwrap();

    let output = written(&repl);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], messages::LOOK);
    assert_eq!(lines[1], messages::UNKNOWN_COMMAND);
    assert_eq!(lines[2], "available commands:");
    assert_eq!(lines.last().copied(), Some(messages::GAME_OVER));
    assert_eq!(repl.controller().state(), GameState::Stopped);
}

/// An output sink whose reader has gone away.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader gone"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn output_failure_names_what_was_being_written() {
    let editor = ScriptedEditor::new(&["look"]);
    let mut repl = Repl::with_output(editor, ClosedPipe, Player::default()).without_banner();

    let err = repl.run().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert_eq!(err.context.as_deref(), Some("writing response"));
    assert!(err.to_string().ends_with("(while writing response)"));
}

#[test]
fn controller_keeps_player() {
    let repl = Repl::with_output(ScriptedEditor::new(&[]), Vec::new(), Player::new("Ada"));
    assert_eq!(repl.controller().player().name(), "Ada");
}
