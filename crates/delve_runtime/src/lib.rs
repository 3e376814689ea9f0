//! Game loop, line editing, configuration and CLI for Delve.
//!
//! This crate provides:
//! - [`Repl`] - The blocking read-eval-print game loop
//! - [`LineEditor`] - Input abstraction, with a rustyline implementation for
//!   terminals and a plain reader for scripts and tests
//! - [`Config`] - Command-line configuration
//! - [`logging`] - Tracing subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
mod highlight;
pub mod logging;
pub mod repl;

pub use config::Config;
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptEditor};
pub use repl::Repl;
