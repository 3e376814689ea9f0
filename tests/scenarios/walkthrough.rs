//! Turn-by-turn walkthroughs against the interpreter.

use delve_parser::Interpreter;
use delve_world::{Item, Room, World, WorldBuilder, starter};

fn play(world: &mut World, interpreter: &Interpreter, inputs: &[&str]) -> Vec<String> {
    inputs
        .iter()
        .map(|input| interpreter.execute(world, input).text)
        .collect()
}

#[test]
fn cave_to_library_and_back() {
    let mut builder = WorldBuilder::new();
    let cave = builder.add_room(Room::new("cave", "A dark cave."));
    let library = builder.add_room(Room::new("library", "Rows of books."));
    builder.connect(cave, "north", library).unwrap();
    builder.connect(library, "south", cave).unwrap();
    let mut world = builder.start_in(cave).build().unwrap();

    let replies = play(
        &mut world,
        &Interpreter::standard(),
        &["look", "go north", "look", "go south"],
    );
    assert_eq!(
        replies,
        vec![
            "cave\nA dark cave.",
            "You moved north.",
            "library\nRows of books.",
            "You moved south.",
        ]
    );
    assert_eq!(world.player().current_room(), cave);
}

#[test]
fn take_key_twice() {
    let mut builder = WorldBuilder::new();
    let cave = builder.add_room(Room::new("cave", "").with_item(Item::new("key", "a brass key")));
    let mut world = builder.start_in(cave).build().unwrap();

    let replies = play(
        &mut world,
        &Interpreter::standard(),
        &["take key", "inventory", "take key"],
    );
    assert_eq!(
        replies,
        vec![
            "You picked up key.",
            "You are carrying: key: a brass key",
            "Item not found.",
        ]
    );
}

#[test]
fn open_the_starter_vault() {
    let mut world = starter::world().unwrap();
    let replies = play(
        &mut world,
        &Interpreter::standard(),
        &[
            "take torch",
            "go north",
            "go east",
            "unlock brass key",
            "take brass key",
            "unlock torch",
            "unlock brass key",
            "go east",
            "take ancient map",
            "inventory",
        ],
    );

    assert_eq!(replies[0], "You picked up torch.");
    assert_eq!(replies[1], "You moved north.");
    assert_eq!(replies[2], "Sealed Vault is locked.");
    assert_eq!(replies[3], "You don't have that.");
    assert_eq!(replies[4], "You picked up brass key.");
    assert_eq!(replies[5], "You can't unlock this room.");
    assert_eq!(replies[6], "The room is now unlocked!");
    assert_eq!(replies[7], "You moved east.");
    assert_eq!(replies[8], "You picked up ancient map.");
    assert!(replies[9].starts_with("You are carrying: torch: "));
    assert!(replies[9].contains(", brass key: "));
    assert!(replies[9].contains(", ancient map: "));
    assert_eq!(world.current_room().name(), "Sealed Vault");
}

#[test]
fn aliases_play_the_same_game() {
    let mut long = starter::world().unwrap();
    let mut short = starter::world().unwrap();

    let long_replies = play(
        &mut long,
        &Interpreter::standard(),
        &["go north", "take brass key", "unlock brass key", "go east", "inventory"],
    );
    let short_replies = play(
        &mut short,
        &Interpreter::with_aliases(),
        &["n", "get brass key", "unlock brass key", "e", "i"],
    );

    assert_eq!(long_replies, short_replies);
    assert_eq!(long, short);
}

#[test]
fn failed_turns_change_nothing() {
    let original = starter::world().unwrap();
    let interpreter = Interpreter::standard();

    for input in ["go west", "take lantern", "drop torch", "unlock torch", "go", "dance"] {
        let (after, response) = interpreter.interpret(&original, input);
        assert_eq!(after, original, "{input:?} changed the world: {}", response.text);
    }
}
