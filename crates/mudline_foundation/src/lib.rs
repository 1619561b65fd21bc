//! Core types and errors for Mudline.
//!
//! This crate provides:
//! - [`Player`] - The opaque identity handed to the game controller
//! - [`Error`] - Rich error types with context for the I/O surfaces

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod player;

pub use error::{Error, ErrorKind, Result};
pub use player::{DEFAULT_PLAYER_NAME, Player};
