//! Items.

use std::fmt;

/// A named, described object.
///
/// Items are immutable once created. An item lives in exactly one place at a
/// time (a room's item list or the player's inventory); moving it between the
/// two is a move of the value, never a copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    name: String,
    description: String,
}

impl Item {
    /// Creates a new item.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Returns the item's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the item's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true if `name` refers to this item, ignoring case.
    #[must_use]
    pub fn answers_to(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}
