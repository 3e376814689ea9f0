//! Core identifiers and error types for Delve.
//!
//! This crate provides:
//! - [`RoomId`] - Index of a room in the world's room table
//! - [`Error`] - Setup and runtime errors with categorized kinds

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;

pub use error::{Error, ErrorKind, Result};
pub use id::RoomId;
