//! The room table.

use std::ops::{Index, IndexMut};

use delve_foundation::{Error, Result, RoomId};
use im::Vector;

use crate::room::Room;

/// All rooms of a world, addressed by [`RoomId`].
///
/// Rooms are only ever appended, so every id returned by [`RoomGraph::add`]
/// stays valid. Indexing with an id from another graph panics, like indexing
/// a slice out of bounds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomGraph {
    rooms: Vector<Room>,
}

impl RoomGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if the graph already holds `u32::MAX` rooms.
    pub fn add(&mut self, room: Room) -> RoomId {
        let index = u32::try_from(self.rooms.len()).expect("room table overflow");
        self.rooms.push_back(room);
        RoomId::new(index)
    }

    /// Returns the room with the given id.
    #[must_use]
    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    /// Returns the room with the given id, mutably.
    pub fn get_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.index())
    }

    /// Returns true if `id` refers to a room in this graph.
    #[must_use]
    pub fn contains(&self, id: RoomId) -> bool {
        id.index() < self.rooms.len()
    }

    /// Returns the number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns true if the graph has no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Links `from` to `to` in `direction`, replacing any previous link.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is not in this graph.
    pub fn connect(&mut self, from: RoomId, direction: impl Into<String>, to: RoomId) -> Result<()> {
        if !self.contains(to) {
            return Err(Error::room_not_found(to));
        }
        let room = self.get_mut(from).ok_or_else(|| Error::room_not_found(from))?;
        room.connect(direction, to);
        Ok(())
    }

    /// Finds the first room with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms
            .iter()
            .position(|room| room.name() == name)
            .and_then(|index| u32::try_from(index).ok())
            .map(RoomId::new)
    }

    /// Iterates over `(id, room)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        (0u32..).map(RoomId::new).zip(self.rooms.iter())
    }
}

impl Index<RoomId> for RoomGraph {
    type Output = Room;

    fn index(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }
}

impl IndexMut<RoomId> for RoomGraph {
    fn index_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.index()]
    }
}
