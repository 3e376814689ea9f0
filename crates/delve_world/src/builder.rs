//! Validated world construction.

use delve_foundation::{Error, ErrorKind, Result, RoomId};

use crate::graph::RoomGraph;
use crate::item::Item;
use crate::room::Room;
use crate::world::World;

/// Builds a [`World`] room by room.
///
/// ```
/// use delve_world::{Room, WorldBuilder};
///
/// let mut builder = WorldBuilder::new();
/// let cave = builder.add_room(Room::new("Cave", "Damp."));
/// let hall = builder.add_room(Room::new("Hall", "Wide."));
/// builder.connect_both(cave, "north", hall, "south").unwrap();
/// let world = builder.start_in(cave).build().unwrap();
/// assert_eq!(world.current_room().name(), "Cave");
/// ```
#[derive(Debug, Default)]
pub struct WorldBuilder {
    rooms: RoomGraph,
    start: Option<RoomId>,
}

impl WorldBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room and returns its id.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        self.rooms.add(room)
    }

    /// Adds a one-way exit.
    ///
    /// # Errors
    ///
    /// Returns an error if either room is unknown.
    pub fn connect(&mut self, from: RoomId, direction: &str, to: RoomId) -> Result<&mut Self> {
        self.rooms.connect(from, direction, to)?;
        Ok(self)
    }

    /// Adds an exit each way between two rooms.
    ///
    /// # Errors
    ///
    /// Returns an error if either room is unknown.
    pub fn connect_both(
        &mut self,
        a: RoomId,
        a_to_b: &str,
        b: RoomId,
        b_to_a: &str,
    ) -> Result<&mut Self> {
        self.rooms.connect(a, a_to_b, b)?;
        self.rooms.connect(b, b_to_a, a)?;
        Ok(self)
    }

    /// Places an item in a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is unknown.
    pub fn place(&mut self, room: RoomId, item: Item) -> Result<&mut Self> {
        self.rooms
            .get_mut(room)
            .ok_or_else(|| Error::room_not_found(room))?
            .add_item(item);
        Ok(self)
    }

    /// Chooses the player's starting room.
    pub fn start_in(&mut self, room: RoomId) -> &mut Self {
        self.start = Some(room);
        self
    }

    /// Finishes the world.
    ///
    /// # Errors
    ///
    /// Returns an error if no starting room was chosen, or if the start room
    /// or any exit target does not exist.
    pub fn build(&mut self) -> Result<World> {
        let start = self.start.ok_or_else(|| Error::new(ErrorKind::MissingStartRoom))?;
        World::new(std::mem::take(&mut self.rooms), start)
    }
}
