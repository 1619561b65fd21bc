//! Input highlighting for the REPL.

use std::borrow::Cow;

use mudline_parser::{Direction, InputTokenizer, Verb};

const VERB_STYLE: &str = "\x1b[1;32m";
const ARGUMENT_STYLE: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Highlights a recognized verb, and a recognized direction after `move`.
pub struct CommandHighlighter;

impl CommandHighlighter {
    /// Creates a new highlighter.
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    ///
    /// Lines whose first word is not a verb come back unchanged.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let Some(split) = InputTokenizer::split(line) else {
            return Cow::Borrowed(line);
        };
        let Some(verb) = Verb::lookup(&split.verb) else {
            return Cow::Borrowed(line);
        };

        // Locate the verb as typed, preserving the user's spacing.
        let verb_start = line.len() - line.trim_start().len();
        let verb_end = line[verb_start..]
            .find(char::is_whitespace)
            .map_or(line.len(), |i| verb_start + i);
        let rest = &line[verb_end..];

        let mut result = String::with_capacity(line.len() + 16);
        result.push_str(&line[..verb_start]);
        result.push_str(VERB_STYLE);
        result.push_str(&line[verb_start..verb_end]);
        result.push_str(RESET);

        if verb == Verb::Move && Direction::parse(&split.argument).is_ok() {
            let arg_start = rest.len() - rest.trim_start().len();
            let arg_end = rest.trim_end().len();
            result.push_str(&rest[..arg_start]);
            result.push_str(ARGUMENT_STYLE);
            result.push_str(&rest[arg_start..arg_end]);
            result.push_str(RESET);
            result.push_str(&rest[arg_end..]);
        } else {
            result.push_str(rest);
        }

        Cow::Owned(result)
    }
}

impl Default for CommandHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
