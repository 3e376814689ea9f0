//! The player: a location and an inventory.

use delve_foundation::RoomId;
use im::Vector;
use tracing::debug;

use crate::error::ActionError;
use crate::graph::RoomGraph;
use crate::item::Item;
use crate::room::Room;

/// Prefix of the inventory listing.
pub const CARRYING: &str = "You are carrying: ";

/// The single player of a world.
///
/// The player only stores the id of its current room; every operation that
/// needs the room itself takes the [`RoomGraph`] it lives in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    current_room: RoomId,
    inventory: Vector<Item>,
}

impl Player {
    /// Creates a player standing in `start` with nothing in hand.
    #[must_use]
    pub fn new(start: RoomId) -> Self {
        Self {
            current_room: start,
            inventory: Vector::new(),
        }
    }

    /// Returns the room the player is in.
    #[must_use]
    pub const fn current_room(&self) -> RoomId {
        self.current_room
    }

    /// Returns the carried items.
    #[must_use]
    pub fn inventory(&self) -> &Vector<Item> {
        &self.inventory
    }

    /// Returns the first carried item answering to `name`.
    #[must_use]
    pub fn carried(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|item| item.answers_to(name))
    }

    /// Walks through the exit labelled `direction`.
    ///
    /// # Errors
    ///
    /// - [`ActionError::NoExit`] if the current room has no such exit.
    /// - [`ActionError::Locked`] if the exit leads into a locked room.
    pub fn go(&mut self, rooms: &RoomGraph, direction: &str) -> Result<String, ActionError> {
        let target = rooms
            .get(self.current_room)
            .and_then(|here| here.exit(direction))
            .ok_or(ActionError::NoExit)?;
        let room = rooms.get(target).ok_or(ActionError::NoExit)?;
        if room.is_locked() {
            return Err(ActionError::Locked(room.name().to_string()));
        }

        debug!(from = %self.current_room, to = %target, direction, "player moved");
        self.current_room = target;
        Ok(format!("You moved {direction}."))
    }

    /// Describes the current room.
    #[must_use]
    pub fn look(&self, rooms: &RoomGraph) -> String {
        rooms[self.current_room].describe()
    }

    /// Picks up the first item in the current room answering to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::ItemNotFound`] if no item matches.
    pub fn take(&mut self, rooms: &mut RoomGraph, name: &str) -> Result<String, ActionError> {
        let item = rooms[self.current_room]
            .remove_item(name)
            .ok_or(ActionError::ItemNotFound)?;
        let message = format!("You picked up {}.", item.name());

        debug!(item = item.name(), room = %self.current_room, "item taken");
        self.inventory.push_back(item);
        Ok(message)
    }

    /// Puts down the first carried item answering to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotCarrying`] if no carried item matches.
    pub fn drop(&mut self, rooms: &mut RoomGraph, name: &str) -> Result<String, ActionError> {
        let index = self
            .inventory
            .iter()
            .position(|item| item.answers_to(name))
            .ok_or(ActionError::NotCarrying)?;
        let item = self.inventory.remove(index);
        let message = format!("You dropped {}.", item.name());

        debug!(item = item.name(), room = %self.current_room, "item dropped");
        rooms[self.current_room].add_item(item);
        Ok(message)
    }

    /// Lists carried items as `name: description`, comma separated.
    ///
    /// An empty inventory still yields the prefix.
    #[must_use]
    pub fn inventory_listing(&self) -> String {
        let items: Vec<String> = self.inventory.iter().map(ToString::to_string).collect();
        format!("{CARRYING}{}", items.join(", "))
    }

    /// Uses the carried item `key_name` on a lock.
    ///
    /// The key is tried on the current room first, then on each locked room
    /// one exit away, in direction order. The first lock that accepts it is
    /// opened.
    ///
    /// # Errors
    ///
    /// - [`ActionError::NoSuchKey`] if no carried item answers to `key_name`.
    /// - [`ActionError::CannotUnlock`] if no lock in reach accepts the key.
    pub fn unlock(&self, rooms: &mut RoomGraph, key_name: &str) -> Result<String, ActionError> {
        let key = self.carried(key_name).ok_or(ActionError::NoSuchKey)?;

        let here = self.current_room;
        let mut candidates = vec![here];
        if let Some(room) = rooms.get(here) {
            candidates.extend(
                room.connections()
                    .values()
                    .copied()
                    .filter(|&id| id != here && rooms.get(id).is_some_and(Room::is_locked)),
            );
        }

        for id in candidates {
            if let Some(Ok(message)) = rooms.get_mut(id).map(|room| room.unlock(key)) {
                return Ok(message.to_string());
            }
        }
        Err(ActionError::CannotUnlock)
    }
}
