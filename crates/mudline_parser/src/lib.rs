//! Command parser for the Mudline text adventure.
//!
//! This crate turns a line of player input like "pick up sword" into a
//! [`Command`] the runtime can dispatch.
//!
//! # Architecture
//!
//! ```text
//! "Pick UP Rusty Sword"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → verb "pick", argument "UP Rusty Sword"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → Verb::Pick
//! │ LOOKUP          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ARGUMENT        │  → ItemName("Rusty Sword")
//! │ PARSING         │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → Command::PickUp(Ok(ItemName("Rusty Sword")))
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Split raw input into a verb and an argument
//! - [`vocabulary`] - The fixed set of verbs
//! - [`direction`] - Movement direction parsing
//! - [`item`] - Item name parsing for "pick up"
//! - [`command`] - The parsed command type
//! - [`parser`] - Pipeline orchestration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod direction;
pub mod item;
pub mod parser;
pub mod tokenizer;
pub mod vocabulary;

// Re-export main types for convenience
pub use command::Command;
pub use direction::{Direction, DirectionError};
pub use item::{ItemName, PickupError};
pub use parser::{CommandParser, ParseResult};
pub use tokenizer::{CommandLine, InputTokenizer};
pub use vocabulary::Verb;
