//! Main parser pipeline.
//!
//! Orchestrates the flow from raw input to [`Command`].

use tracing::trace;

use crate::command::Command;
use crate::tokenizer::InputTokenizer;

/// Result of parsing player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// The input was blank
    Empty,
    /// The input produced a command
    Command(Command),
}

impl ParseResult {
    /// Returns the command, if any.
    #[must_use]
    pub fn into_command(self) -> Option<Command> {
        match self {
            Self::Empty => None,
            Self::Command(command) => Some(command),
        }
    }
}

/// The command parser.
///
/// Parsing is total: every input yields either [`ParseResult::Empty`] or a
/// command, possibly [`Command::Unknown`].
pub struct CommandParser;

impl CommandParser {
    /// Parses one line of player input.
    #[must_use]
    pub fn parse(input: &str) -> ParseResult {
        // 1. Tokenize
        let Some(line) = InputTokenizer::split(input) else {
            return ParseResult::Empty;
        };

        // 2. Vocabulary lookup and argument parsing
        let command = Command::from_line(line);
        trace!(?command, "parsed input");

        ParseResult::Command(command)
    }
}
