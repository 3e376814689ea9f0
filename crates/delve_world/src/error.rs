//! Refusals produced by world actions.
//!
//! Every variant displays as the exact text shown to the player. A refusal
//! never changes world state.

use thiserror::Error;

/// Why a player action did not happen.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    /// The current room has no exit in the requested direction.
    #[error("You can't go that way.")]
    NoExit,

    /// The exit leads to a locked room. Carries the room's name.
    #[error("{0} is locked.")]
    Locked(String),

    /// No item in the current room answers to the given name.
    #[error("Item not found.")]
    ItemNotFound,

    /// No item in the inventory answers to the given name.
    #[error("You aren't carrying that.")]
    NotCarrying,

    /// The item named as a key is not in the inventory.
    #[error("You don't have that.")]
    NoSuchKey,

    /// The key does not fit any lock in reach.
    #[error("You can't unlock this room.")]
    CannotUnlock,
}
