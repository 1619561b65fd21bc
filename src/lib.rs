//! Mudline - A tiny text adventure command interpreter
//!
//! This crate re-exports all layers of the Mudline system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: mudline_runtime    — Controller, REPL, CLI
//! Layer 1: mudline_parser     — Verb/argument parsing into commands
//! Layer 0: mudline_foundation — Core types (Player, Error)
//! ```

pub use mudline_foundation as foundation;
pub use mudline_parser as parser;
pub use mudline_runtime as runtime;
