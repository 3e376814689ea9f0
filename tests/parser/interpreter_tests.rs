//! Interpreter tests.
//!
//! Tests for dispatching commands against a world.

use delve_parser::{Interpreter, Outcome};
use delve_world::{Item, Room, World, WorldBuilder};
use proptest::prelude::*;

fn cave_and_library() -> World {
    let mut builder = WorldBuilder::new();
    let cave = builder.add_room(Room::new("Cave", "Dark and damp."));
    let library = builder.add_room(Room::new("Library", "Dusty shelves."));
    let vault = builder.add_room(Room::new("Vault", "Cold stone.").with_lock("key"));
    builder
        .connect_both(cave, "north", library, "south")
        .unwrap()
        .connect_both(library, "east", vault, "west")
        .unwrap()
        .place(cave, Item::new("key", "a brass key"))
        .unwrap()
        .place(cave, Item::new("Oil Lamp", "half full"))
        .unwrap();
    builder.start_in(cave).build().unwrap()
}

fn run(world: &mut World, inputs: &[&str]) -> Vec<String> {
    let interpreter = Interpreter::standard();
    inputs
        .iter()
        .map(|input| interpreter.execute(world, input).text)
        .collect()
}

#[test]
fn locked_room_needs_unlock_first() {
    let mut world = cave_and_library();
    let replies = run(
        &mut world,
        &[
            "take key",
            "go north",
            "go east",
            "unlock lamp",
            "unlock key",
            "go east",
            "look",
        ],
    );
    assert_eq!(
        replies,
        vec![
            "You picked up key.",
            "You moved north.",
            "Vault is locked.",
            "You don't have that.",
            "The room is now unlocked!",
            "You moved east.",
            "Vault\nCold stone.",
        ]
    );
}

#[test]
fn wrong_key_leaves_lock_closed() {
    let mut world = cave_and_library();
    let replies = run(&mut world, &["take oil lamp", "go north", "unlock OIL LAMP"]);
    assert_eq!(replies[2], "You can't unlock this room.");
    let vault = world.rooms().find("Vault").unwrap();
    assert!(world.rooms()[vault].is_locked());
}

#[test]
fn unlock_on_current_room_uses_its_lock() {
    let mut builder = WorldBuilder::new();
    let cell = builder.add_room(
        Room::new("Cell", "Bars on every side.")
            .with_lock("pin")
            .with_item(Item::new("pin", "a bent hairpin")),
    );
    let mut world = builder.start_in(cell).build().unwrap();

    let replies = run(&mut world, &["take pin", "unlock pin"]);
    assert_eq!(replies[1], "The room is now unlocked!");
    assert!(!world.current_room().is_locked());
}

#[test]
fn take_then_drop_moves_item_between_rooms() {
    let mut world = cave_and_library();
    run(&mut world, &["take oil lamp", "go north", "drop Oil Lamp"]);
    assert!(world.player().inventory().is_empty());
    assert_eq!(world.current_room().items()[0].name(), "Oil Lamp");

    let cave = world.rooms().find("Cave").unwrap();
    assert_eq!(world.rooms()[cave].items().len(), 1);
}

#[test]
fn inventory_lists_items_in_pickup_order() {
    let mut world = cave_and_library();
    let replies = run(&mut world, &["take oil lamp", "take KEY", "inventory"]);
    assert_eq!(
        replies[2],
        "You are carrying: Oil Lamp: half full, key: a brass key"
    );
}

#[test]
fn quit_reports_outcome() {
    let mut world = cave_and_library();
    let interpreter = Interpreter::with_aliases();
    assert_eq!(interpreter.execute(&mut world, "q").outcome, Outcome::Quit);
    assert_eq!(
        interpreter.execute(&mut world, "look").outcome,
        Outcome::Continue
    );
}

#[test]
fn look_is_idempotent() {
    let mut world = cave_and_library();
    let replies = run(&mut world, &["look", "look"]);
    assert_eq!(replies[0], replies[1]);
}

proptest! {
    #[test]
    fn unknown_verbs_change_nothing(
        verb in "[a-zA-Z]{1,10}",
        rest in "[a-zA-Z ]{0,20}",
    ) {
        prop_assume!(
            !["go", "look", "take", "drop", "inventory", "unlock", "help", "quit"]
                .contains(&verb.as_str())
        );
        let world = cave_and_library();
        let input = format!("{verb} {rest}");
        let (next, response) = Interpreter::standard().interpret(&world, &input);
        prop_assert_eq!(response.text, "Unknown command.");
        prop_assert_eq!(next, world);
    }

    #[test]
    fn canonical_verbs_in_other_cases_are_unknown(
        verb in prop::sample::select(vec!["go", "look", "take", "inventory", "unlock"]),
        mask in proptest::collection::vec(any::<bool>(), 9),
    ) {
        let cased: String = verb
            .chars()
            .zip(mask)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assume!(cased != verb);
        let world = cave_and_library();
        let input = format!("{cased} north");
        let (next, response) = Interpreter::standard().interpret(&world, &input);
        prop_assert_eq!(response.text, "Unknown command.");
        prop_assert_eq!(next, world);
    }

    #[test]
    fn connected_label_is_reachable_with_aliases(
        label in prop::sample::select(vec![
            "north", "North", "NORTH", "n", "N", "d", "up", "u", "trapdoor", "Ladder",
        ]),
    ) {
        let mut builder = WorldBuilder::new();
        let a = builder.add_room(Room::new("A", ""));
        let b = builder.add_room(Room::new("B", ""));
        builder.connect(a, label, b).unwrap();
        let mut world = builder.start_in(a).build().unwrap();

        let reply = Interpreter::with_aliases().execute(&mut world, &format!("go {label}"));
        prop_assert_eq!(reply.text, format!("You moved {label}."));
        prop_assert_eq!(world.player().current_room(), b);
    }

    #[test]
    fn take_matches_any_case(mask in proptest::collection::vec(any::<bool>(), 8)) {
        let name: String = "oil lamp"
            .chars()
            .zip(mask)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect();
        let input = format!("take {name}");
        let mut world = cave_and_library();
        let replies = run(&mut world, &[input.as_str(), input.as_str()]);
        prop_assert_eq!(&replies[0], "You picked up Oil Lamp.");
        prop_assert_eq!(&replies[1], "Item not found.");
        prop_assert_eq!(world.player().inventory().len(), 1);
    }
}
