//! The default world the binary starts in.
//!
//! ```text
//!  Mysterious Cave ──north──▶ Ancient Library ──east──▶ Sealed Vault (locked)
//!                 ◀──south──                  ◀──west──
//! ```

use delve_foundation::Result;

use crate::builder::WorldBuilder;
use crate::item::Item;
use crate::room::Room;
use crate::world::World;

/// Name of the item that opens the vault.
pub const VAULT_KEY: &str = "brass key";

/// Builds the starter world with the player in the cave.
///
/// # Errors
///
/// Only fails if the layout below refers to a room it did not add.
pub fn world() -> Result<World> {
    let mut builder = WorldBuilder::new();

    let cave = builder.add_room(Room::new(
        "Mysterious Cave",
        "You find yourself in a dimly lit cave. A torch gutters in a crack in the \
         rock. A narrow passage leads north.",
    ));
    let library = builder.add_room(Room::new(
        "Ancient Library",
        "This room is filled with old, dusty bookshelves. A brass key lies on the \
         reading desk. A heavy iron door is set into the east wall; the cave lies \
         back to the south.",
    ));
    let vault = builder.add_room(
        Room::new(
            "Sealed Vault",
            "Cold air hangs over a single stone plinth, where an ancient map lies \
             unrolled. The library is back to the west.",
        )
        .with_lock(VAULT_KEY),
    );

    builder
        .connect_both(cave, "north", library, "south")?
        .connect_both(library, "east", vault, "west")?
        .place(
            library,
            Item::new(VAULT_KEY, "a tarnished brass key with a lion's-head bow"),
        )?
        .place(vault, Item::new("ancient map", "a brittle map of tunnels far below"))?
        .place(cave, Item::new("torch", "a pitch-soaked torch, still smouldering"))?;

    builder.start_in(cave).build()
}
