//! Error types for Delve.
//!
//! Uses `thiserror` for ergonomic error definition. These errors cover world
//! setup, configuration and terminal I/O. Refusals during play (a locked
//! door, a missing item) are not errors at this level; they are ordinary
//! responses produced by the world and parser crates.

use thiserror::Error;

use crate::id::RoomId;

/// Result alias using the Delve [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Delve operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a room not found error.
    #[must_use]
    pub fn room_not_found(id: RoomId) -> Self {
        Self::new(ErrorKind::RoomNotFound(id))
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates a terminal I/O error.
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Terminal(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::terminal(err.to_string())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A room id does not refer to any room in the world.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A world was built without choosing a starting room.
    #[error("world has no starting room")]
    MissingStartRoom,

    /// A command-line argument or configuration value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading from or writing to the terminal failed.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
