//! Game controller, REPL, and CLI for Mudline.
//!
//! This crate provides:
//! - [`Controller`] - Run state and command dispatch
//! - [`Repl`] - The interactive read-dispatch-print loop
//! - [`LineEditor`] implementations for terminals and piped input

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod controller;
pub mod editor;
pub mod highlight;
pub mod messages;
pub mod repl;
pub mod response;

pub use controller::{Controller, GameState};
pub use editor::{BufReadEditor, LineEditor, ReadResult, RustylineEditor};
pub use repl::{DEFAULT_PROMPT, Repl};
pub use response::Response;
