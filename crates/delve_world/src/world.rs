//! World state: the room graph plus the player.
//!
//! A `World` is built from persistent collections, so `clone()` is O(1) and
//! shares structure with its source. The interpreter relies on this to
//! offer a pure `(world, input) -> (world, response)` form.

use delve_foundation::{Error, Result, RoomId};

use crate::error::ActionError;
use crate::graph::RoomGraph;
use crate::player::Player;
use crate::room::Room;

/// Everything that changes during play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    rooms: RoomGraph,
    player: Player,
}

impl World {
    /// Creates a world with the player standing in `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start`, or the target of any exit, is not a room
    /// of `rooms`.
    pub fn new(rooms: RoomGraph, start: RoomId) -> Result<Self> {
        if !rooms.contains(start) {
            return Err(Error::room_not_found(start));
        }
        for (_, room) in rooms.iter() {
            if let Some(&target) = room.connections().values().find(|&&id| !rooms.contains(id)) {
                return Err(Error::room_not_found(target));
            }
        }
        Ok(Self {
            rooms,
            player: Player::new(start),
        })
    }

    /// Returns the room graph.
    #[must_use]
    pub const fn rooms(&self) -> &RoomGraph {
        &self.rooms
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the room the player is in.
    #[must_use]
    pub fn current_room(&self) -> &Room {
        &self.rooms[self.player.current_room()]
    }

    /// Moves the player through `direction`.
    ///
    /// # Errors
    ///
    /// See [`Player::go`].
    pub fn go(&mut self, direction: &str) -> std::result::Result<String, ActionError> {
        self.player.go(&self.rooms, direction)
    }

    /// Describes the player's room.
    #[must_use]
    pub fn look(&self) -> String {
        self.player.look(&self.rooms)
    }

    /// Picks up an item from the player's room.
    ///
    /// # Errors
    ///
    /// See [`Player::take`].
    pub fn take(&mut self, name: &str) -> std::result::Result<String, ActionError> {
        self.player.take(&mut self.rooms, name)
    }

    /// Puts a carried item down in the player's room.
    ///
    /// # Errors
    ///
    /// See [`Player::drop`].
    pub fn drop_item(&mut self, name: &str) -> std::result::Result<String, ActionError> {
        self.player.drop(&mut self.rooms, name)
    }

    /// Lists the player's inventory.
    #[must_use]
    pub fn inventory(&self) -> String {
        self.player.inventory_listing()
    }

    /// Uses a carried key on the nearest lock it fits.
    ///
    /// # Errors
    ///
    /// See [`Player::unlock`].
    pub fn unlock(&mut self, key_name: &str) -> std::result::Result<String, ActionError> {
        self.player.unlock(&mut self.rooms, key_name)
    }
}
