//! End-to-end scenarios.
//!
//! Whole play sessions, driven through the interpreter directly and through
//! the game loop with scripted input.

mod walkthrough;
