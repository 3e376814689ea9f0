//! Room graph and movement tests.

use delve_foundation::{ErrorKind, RoomId};
use delve_world::{ActionError, Room, WorldBuilder};
use proptest::prelude::*;

#[test]
fn connect_then_go_reaches_target() {
    let mut builder = WorldBuilder::new();
    let a = builder.add_room(Room::new("A", "first"));
    let b = builder.add_room(Room::new("B", "second"));
    builder.connect(a, "through the arch", b).unwrap();
    let mut world = builder.start_in(a).build().unwrap();

    assert_eq!(world.rooms()[a].exit("through the arch"), Some(b));
    assert_eq!(
        world.go("through the arch").unwrap(),
        "You moved through the arch."
    );
    assert_eq!(world.player().current_room(), b);
}

#[test]
fn links_are_not_symmetric() {
    let mut builder = WorldBuilder::new();
    let a = builder.add_room(Room::new("A", ""));
    let b = builder.add_room(Room::new("B", ""));
    builder.connect(a, "down", b).unwrap();
    let mut world = builder.start_in(a).build().unwrap();

    world.go("down").unwrap();
    assert_eq!(world.go("up"), Err(ActionError::NoExit));
    assert_eq!(world.player().current_room(), b);
}

#[test]
fn builder_rejects_dangling_exit() {
    let mut builder = WorldBuilder::new();
    let a = builder.add_room(Room::new("A", ""));
    let err = builder.connect(a, "north", RoomId::new(42)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RoomNotFound(_)));
}

#[test]
fn look_describes_current_room() {
    let mut builder = WorldBuilder::new();
    let a = builder.add_room(Room::new("Atrium", "Light falls from above."));
    let world = builder.start_in(a).build().unwrap();
    assert_eq!(world.look(), "Atrium\nLight falls from above.");
    assert_eq!(world.look(), world.look());
}

proptest! {
    #[test]
    fn walking_a_ring_returns_home(size in 1usize..12, laps in 1usize..3) {
        let mut builder = WorldBuilder::new();
        let ids: Vec<_> = (0..size)
            .map(|i| builder.add_room(Room::new(format!("Room {i}"), "")))
            .collect();
        for (i, &id) in ids.iter().enumerate() {
            builder.connect(id, "onward", ids[(i + 1) % size]).unwrap();
        }
        let mut world = builder.start_in(ids[0]).build().unwrap();

        for _ in 0..size * laps {
            prop_assert!(world.go("onward").is_ok());
        }
        prop_assert_eq!(world.player().current_room(), ids[0]);
    }

    #[test]
    fn last_connection_wins(targets in proptest::collection::vec(0usize..5, 1..10)) {
        let mut builder = WorldBuilder::new();
        let ids: Vec<_> = (0..5)
            .map(|i| builder.add_room(Room::new(format!("Room {i}"), "")))
            .collect();
        for &t in &targets {
            builder.connect(ids[0], "north", ids[t]).unwrap();
        }
        let world = builder.start_in(ids[0]).build().unwrap();
        let last = ids[*targets.last().unwrap()];
        prop_assert_eq!(world.rooms()[ids[0]].exit("north"), Some(last));
    }
}
