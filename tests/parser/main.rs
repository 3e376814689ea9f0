//! Integration tests for the delve_parser crate.
//!
//! Tests for the command pipeline:
//! - Tokenization
//! - Vocabulary lookup
//! - Command parsing
//! - Interpretation against a world

mod interpreter_tests;
mod vocabulary_tests;
