//! Input tokenization.
//!
//! Splits raw player input into a verb and the rest of the line.

/// A line of input split into its verb and argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine {
    /// The first word, lowercased
    pub verb: String,
    /// Everything after the first whitespace run, trimmed (may be empty)
    pub argument: String,
}

impl CommandLine {
    /// Returns true if the line carried nothing after the verb.
    #[must_use]
    pub fn has_argument(&self) -> bool {
        !self.argument.is_empty()
    }
}

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Splits a raw input line into a [`CommandLine`].
    ///
    /// - Returns `None` for empty or whitespace-only input
    /// - Splits on the first whitespace run only
    /// - Lowercases the verb; the argument keeps its casing
    #[must_use]
    pub fn split(input: &str) -> Option<CommandLine> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (verb, rest) = match trimmed.find(char::is_whitespace) {
            Some(idx) => trimmed.split_at(idx),
            None => (trimmed, ""),
        };

        Some(CommandLine {
            verb: verb.to_lowercase(),
            argument: rest.trim().to_string(),
        })
    }
}
