//! Rooms, items, the player, and world state for Delve.
//!
//! This crate provides:
//! - [`Item`] - A named, described object held by a room or the player
//! - [`Room`] - A node in the world graph with exits, items and an optional lock
//! - [`RoomGraph`] - The table of rooms, indexed by [`RoomId`]
//! - [`Player`] - Current location and inventory
//! - [`World`] - Rooms plus player, built on persistent collections so that
//!   cloning a world is cheap
//! - [`WorldBuilder`] - Validated world construction
//!
//! [`RoomId`]: delve_foundation::RoomId

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod error;
pub mod graph;
pub mod item;
pub mod player;
pub mod room;
pub mod starter;
pub mod world;

pub use builder::WorldBuilder;
pub use error::ActionError;
pub use graph::RoomGraph;
pub use item::Item;
pub use player::Player;
pub use room::Room;
pub use world::World;
