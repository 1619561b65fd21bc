//! Error types for the Mudline system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Command dispatch never fails. These errors cover the surfaces around it:
//! the terminal, the output sink, and command scripts.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Mudline operations.
#[derive(Debug, Error)]
#[error("{kind}{}", .context.as_ref().map(|c| format!(" (while {c})")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates a line editor error.
    #[must_use]
    pub fn editor(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Editor(message.into()))
    }

    /// Creates a script loading error.
    #[must_use]
    pub fn script(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Script {
            path: path.into(),
            message: message.into(),
        })
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[source] io::Error),

    /// The interactive line editor failed.
    #[error("line editor error: {0}")]
    Editor(String),

    /// A command script could not be loaded.
    #[error("failed to load script {}: {message}", .path.display())]
    Script {
        /// Path of the script.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },
}

/// Result type alias using Mudline's Error.
pub type Result<T> = std::result::Result<T, Error>;
