//! Integration tests for the mudline_parser crate.
//!
//! Tests for the command parsing pipeline:
//! - Tokenization
//! - Vocabulary lookup
//! - Argument parsing (directions, item names)
//! - Full parser pipeline

mod argument_tests;
