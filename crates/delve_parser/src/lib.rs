//! Command parsing and interpretation for Delve.
//!
//! This crate turns a line of player input into exactly one response.
//!
//! # Architecture
//!
//! ```text
//! "take Brass Key"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["take", "Brass", "Key"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → Verb::Take (verb synonyms
//! │ LOOKUP          │     resolved here)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → Command::Take { item: "Brass Key" }
//! │ PARSER          │     or ParseError ("Take what?", "Unknown command.")
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ INTERPRETER     │  → World::take("Brass Key")
//! │ DISPATCH        │  → Response { text: "You picked up brass key.", .. }
//! │                 │     (exit labels win over direction shorthands)
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Split raw input into words
//! - [`vocabulary`] - Verbs, verb synonyms and direction shorthands
//! - [`command`] - Parsed command representation
//! - [`parser`] - Words to [`Command`]
//! - [`interpreter`] - Command dispatch against a [`World`](delve_world::World)
//! - [`stdlib`] - Standard vocabulary tables and help text

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod interpreter;
pub mod parser;
pub mod stdlib;
pub mod tokenizer;
pub mod vocabulary;

pub use command::Command;
pub use interpreter::{Interpreter, Outcome, Response};
pub use parser::{CommandParser, ParseError};
pub use vocabulary::{Verb, VocabularyRegistry};
