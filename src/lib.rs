//! Delve - a small text adventure engine
//!
//! This crate re-exports all layers of Delve for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: delve_runtime     — Game loop, line editor, CLI config, logging
//! Layer 2: delve_parser      — Tokenizer, vocabulary, parser, interpreter
//! Layer 1: delve_world       — Items, rooms, player, world state
//! Layer 0: delve_foundation  — Core types (RoomId, Error)
//! ```

pub use delve_foundation as foundation;
pub use delve_parser as parser;
pub use delve_runtime as runtime;
pub use delve_world as world;
