//! Shared helpers for runtime tests.

use mudline_foundation::{Player, Result};
use mudline_runtime::{LineEditor, ReadResult, Repl};

/// A line editor that replays a fixed script, then reports end of input.
pub struct ScriptedEditor {
    inputs: Vec<ReadResult>,
    pub prompts: Vec<String>,
    pub history: Vec<String>,
}

impl ScriptedEditor {
    pub fn new(lines: &[&str]) -> Self {
        Self::with_results(
            lines
                .iter()
                .map(|line| ReadResult::Line((*line).to_string()))
                .collect(),
        )
    }

    pub fn with_results(mut inputs: Vec<ReadResult>) -> Self {
        inputs.reverse();
        Self {
            inputs,
            prompts: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Number of reads performed so far.
    pub fn reads(&self) -> usize {
        self.prompts.len()
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop().unwrap_or(ReadResult::Eof))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }
}

/// A bannerless REPL over a scripted editor, writing into memory.
pub fn scripted_repl(lines: &[&str]) -> Repl<ScriptedEditor, Vec<u8>> {
    Repl::with_output(ScriptedEditor::new(lines), Vec::new(), Player::default()).without_banner()
}

/// Everything the REPL has written so far.
pub fn written<E: LineEditor>(repl: &Repl<E, Vec<u8>>) -> String {
    String::from_utf8_lossy(repl.output()).into_owned()
}
