//! The main game loop.

use crate::controller::Controller;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::response::Response;
use mudline_foundation::{Error, Player, Result};
use mudline_parser::Command;
use std::fs;
use std::io::{self, Stdout, Write};
use std::path::Path;
use tracing::{debug, info};

/// The prompt shown before each read.
pub const DEFAULT_PROMPT: &str = "> ";

/// The interactive read-dispatch-print loop.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = Stdout> {
    /// The line editor for input.
    editor: E,

    /// Where responses are written.
    out: W,

    /// Run state and dispatch.
    controller: Controller,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(player: Player) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, player))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor, writing to stdout.
    pub fn with_editor(editor: E, player: Player) -> Self {
        Self::with_output(editor, io::stdout(), player)
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Creates a new REPL with the given editor and output sink.
    pub fn with_output(editor: E, out: W, player: Player) -> Self {
        Self {
            editor,
            out,
            controller: Controller::new(player),
            show_banner: true,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the controller.
    #[must_use]
    pub const fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Returns a reference to the output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Returns a reference to the editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Runs the loop until the player quits or input ends.
    ///
    /// End of input counts as `quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner()?;
        }

        info!(player = %self.controller.player(), "game loop started");
        while self.controller.is_running() {
            self.read_dispatch_print()?;
        }
        info!("game loop finished");

        Ok(())
    }

    /// Executes one read-dispatch-print iteration.
    fn read_dispatch_print(&mut self) -> Result<()> {
        match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history(&line);
                }
                self.dispatch(&line)
            }
            ReadResult::Interrupted => {
                debug!("input cancelled");
                writeln!(self.out)?;
                self.out.flush()?;
                Ok(())
            }
            ReadResult::Eof => {
                debug!("end of input");
                // Finish the prompt line before the farewell.
                writeln!(self.out)?;
                let response = self.controller.execute(Command::Quit);
                self.emit(&response)
            }
        }
    }

    /// Dispatches a single line as if it had been typed, printing the
    /// response.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn dispatch(&mut self, line: &str) -> Result<()> {
        let response = self.controller.handle_input(line);
        self.emit(&response)
    }

    /// Replays a command script: each line is echoed after the prompt and
    /// dispatched, stopping early if the script quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be read or output fails.
    pub fn run_script(&mut self, path: &Path) -> Result<()> {
        let source =
            fs::read_to_string(path).map_err(|e| Error::script(path, e.to_string()))?;
        info!(path = %path.display(), "running script");

        for line in source.lines() {
            if !self.controller.is_running() {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            writeln!(self.out, "{}{line}", self.prompt)?;
            self.dispatch(line)?;
        }

        Ok(())
    }

    fn emit(&mut self, response: &Response) -> Result<()> {
        response
            .write_to(&mut self.out)
            .map_err(|e| Error::from(e).with_context("writing response"))
    }

    /// Prints the welcome banner.
    fn print_banner(&mut self) -> Result<()> {
        writeln!(self.out, "\x1b[1;36mMudline v{}\x1b[0m", env!("CARGO_PKG_VERSION"))?;
        writeln!(
            self.out,
            "Type 'help' for a list of commands. Use Ctrl+D to leave.\n"
        )?;

        // Flush to ensure banner appears
        self.out.flush()?;
        Ok(())
    }
}
