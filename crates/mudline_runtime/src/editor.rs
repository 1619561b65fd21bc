//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line input, so the
//! REPL can read from rustyline on a terminal, from a plain buffered stream
//! when input is piped, or from a scripted source in tests.

use crate::highlight::CommandHighlighter;
use mudline_foundation::{Error, Result};
use mudline_parser::{Direction, Verb};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use std::borrow::Cow;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Result of reading a line from the editor.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D, or the stream ended.
    Eof,
}

/// Abstraction over line editing functionality.
///
/// Implementations show the prompt themselves, without a trailing newline,
/// and must not close the underlying input stream.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

// =============================================================================
// Rustyline
// =============================================================================

/// Helper for rustyline that provides completion, hints, and highlighting.
#[derive(Helper, Completer, Hinter, Validator)]
struct MudlineHelper {
    #[rustyline(Completer)]
    completer: VocabularyCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: CommandHighlighter,
}

impl Highlighter for MudlineHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;33m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer for the command vocabulary.
struct VocabularyCompleter;

impl Completer for VocabularyCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = completion_candidates(line, pos);
        let candidates = words
            .into_iter()
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

/// Finds completions for the word ending at `pos`.
///
/// Returns the byte offset where the word starts and the matching words:
/// verbs for the first word, directions after `move`, `up` after `pick`.
fn completion_candidates(line: &str, pos: usize) -> (usize, Vec<&'static str>) {
    let Some(before) = line.get(..pos) else {
        return (pos, Vec::new());
    };

    // Find the start of the current word
    let start = before
        .rfind(char::is_whitespace)
        .map_or(0, |i| i + before[i..].chars().next().map_or(1, char::len_utf8));
    let word = before[start..].to_lowercase();

    let preceding: Vec<String> = before[..start]
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    let pool: Vec<&'static str> = match preceding.as_slice() {
        [] => Verb::ALL.iter().map(|verb| verb.word()).collect(),
        [verb] if verb == Verb::Move.word() => {
            Direction::ALL.iter().map(|dir| dir.as_str()).collect()
        }
        [verb] if verb == Verb::Pick.word() => vec!["up"],
        _ => Vec::new(),
    };

    let matches = pool
        .into_iter()
        .filter(|candidate| candidate.starts_with(&word))
        .collect();
    (start, matches)
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<MudlineHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::editor(e.to_string()))?
            .build();

        let helper = MudlineHelper {
            completer: VocabularyCompleter,
            hinter: HistoryHinter::new(),
            highlighter: CommandHighlighter::new(),
        };

        let mut editor = Editor::with_config(config).map_err(|e| Error::editor(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::editor(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

// =============================================================================
// Plain buffered input
// =============================================================================

/// Line editor over any buffered reader, for piped input.
///
/// The prompt goes to `prompt_out` and is flushed before each read. Bytes
/// that are not valid UTF-8 are decoded lossily, so a garbled line still
/// reaches the controller as an unknown command. The reader is only borrowed from the caller's point of view: dropping this
/// editor drops a lock or a handle, never the process's input stream.
pub struct BufReadEditor<R, W> {
    input: R,
    prompt_out: W,
    buffer: Vec<u8>,
}

impl BufReadEditor<StdinLock<'static>, Stdout> {
    /// Creates an editor over locked stdin, prompting on stdout.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> BufReadEditor<R, W> {
    /// Creates an editor over the given reader and prompt sink.
    pub fn new(input: R, prompt_out: W) -> Self {
        Self {
            input,
            prompt_out,
            buffer: Vec::new(),
        }
    }

    /// Returns the prompt sink.
    pub fn prompt_out(&self) -> &W {
        &self.prompt_out
    }
}

impl<R: BufRead, W: Write> LineEditor for BufReadEditor<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        write!(self.prompt_out, "{prompt}")?;
        self.prompt_out.flush()?;

        self.buffer.clear();
        if self.input.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(ReadResult::Eof);
        }

        let line = self.buffer.strip_suffix(b"\n").unwrap_or(&self.buffer);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        Ok(ReadResult::Line(String::from_utf8_lossy(line).into_owned()))
    }

    fn add_history(&mut self, _line: &str) {}
}
