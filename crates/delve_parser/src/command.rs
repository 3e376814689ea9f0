//! Parsed commands.

use std::fmt;

use crate::vocabulary::Verb;

/// A fully parsed player command, ready for dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `go <direction>`
    Go {
        /// Exit label, after shorthand resolution
        direction: String,
    },
    /// `look`
    Look,
    /// `take <item name>`
    Take {
        /// Item name as typed, words rejoined with single spaces
        item: String,
    },
    /// `drop <item name>`
    Drop {
        /// Item name as typed
        item: String,
    },
    /// `inventory`
    Inventory,
    /// `unlock <item name>`
    Unlock {
        /// Name of the carried item to use as a key
        key: String,
    },
    /// `help`
    Help,
    /// `quit`
    Quit,
}

impl Command {
    /// Returns the verb this command was parsed from.
    #[must_use]
    pub const fn verb(&self) -> Verb {
        match self {
            Command::Go { .. } => Verb::Go,
            Command::Look => Verb::Look,
            Command::Take { .. } => Verb::Take,
            Command::Drop { .. } => Verb::Drop,
            Command::Inventory => Verb::Inventory,
            Command::Unlock { .. } => Verb::Unlock,
            Command::Help => Verb::Help,
            Command::Quit => Verb::Quit,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Go { direction } => write!(f, "go {direction}"),
            Command::Take { item } => write!(f, "take {item}"),
            Command::Drop { item } => write!(f, "drop {item}"),
            Command::Unlock { key } => write!(f, "unlock {key}"),
            other => f.write_str(other.verb().word()),
        }
    }
}
