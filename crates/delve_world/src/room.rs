//! Rooms: nodes of the world graph.

use delve_foundation::RoomId;
use im::{OrdMap, Vector};
use tracing::debug;

use crate::error::ActionError;
use crate::item::Item;

/// Response given when a key opens a lock.
pub const UNLOCKED: &str = "The room is now unlocked!";

/// A location in the world.
///
/// Exits are directed: connecting A to B north says nothing about B's exits.
/// Exits are kept ordered by direction label so that anything iterating them
/// (unlock candidates, exit listings) is deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    name: String,
    description: String,
    connections: OrdMap<String, RoomId>,
    items: Vector<Item>,
    locked: bool,
    required_key: Option<String>,
}

impl Room {
    /// Creates an unlocked room with no exits and no items.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            connections: OrdMap::new(),
            items: Vector::new(),
            locked: false,
            required_key: None,
        }
    }

    /// Locks the room behind the item named `key` (matched case-sensitively).
    #[must_use]
    pub fn with_lock(mut self, key: impl Into<String>) -> Self {
        self.locked = true;
        self.required_key = Some(key.into());
        self
    }

    /// Adds an item to the room.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push_back(item);
        self
    }

    /// Returns the room's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the room's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns all exits, ordered by direction label.
    #[must_use]
    pub fn connections(&self) -> &OrdMap<String, RoomId> {
        &self.connections
    }

    /// Returns the room reached by `direction`, if any. Exact match.
    #[must_use]
    pub fn exit(&self, direction: &str) -> Option<RoomId> {
        self.connections.get(direction).copied()
    }

    /// Returns the items in this room, in insertion order.
    #[must_use]
    pub fn items(&self) -> &Vector<Item> {
        &self.items
    }

    /// Returns true while the room is locked.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns the name of the key that opens this room, if it has a lock.
    #[must_use]
    pub fn required_key(&self) -> Option<&str> {
        self.required_key.as_deref()
    }

    /// Registers the exit for `direction`, replacing any previous target.
    ///
    /// Returns the previous target, if there was one. Callers outside the
    /// crate go through [`RoomGraph::connect`](crate::RoomGraph::connect),
    /// which checks that the target exists.
    pub(crate) fn connect(&mut self, direction: impl Into<String>, target: RoomId) -> Option<RoomId> {
        self.connections.insert(direction.into(), target)
    }

    /// Returns the room's name and description on separate lines.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{}\n{}", self.name, self.description)
    }

    /// Appends an item to the room.
    pub fn add_item(&mut self, item: Item) {
        self.items.push_back(item);
    }

    /// Tries to open the lock with `key`.
    ///
    /// Succeeds only if the room has a required key and `key`'s name equals
    /// it exactly. There is no way to re-lock a room.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CannotUnlock`] if the key does not fit; the room
    /// is left unchanged.
    pub fn unlock(&mut self, key: &Item) -> Result<&'static str, ActionError> {
        match &self.required_key {
            Some(required) if required == key.name() => {
                self.locked = false;
                debug!(room = %self.name, key = key.name(), "room unlocked");
                Ok(UNLOCKED)
            }
            _ => Err(ActionError::CannotUnlock),
        }
    }

    /// Removes and returns the first item answering to `name`.
    pub(crate) fn remove_item(&mut self, name: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.answers_to(name))?;
        Some(self.items.remove(index))
    }
}
