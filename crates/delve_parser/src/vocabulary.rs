//! Vocabulary registry.
//!
//! Stores the words the parser understands: verbs with their synonyms, and
//! direction shorthands.

use std::collections::HashMap;
use std::fmt;

/// A recognized action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Move through an exit.
    Go,
    /// Describe the current room.
    Look,
    /// Pick up an item.
    Take,
    /// Put down a carried item.
    Drop,
    /// List carried items.
    Inventory,
    /// Use a carried key on a lock.
    Unlock,
    /// List commands.
    Help,
    /// End the game.
    Quit,
}

impl Verb {
    /// Every verb, in help order.
    pub const ALL: [Verb; 8] = [
        Verb::Go,
        Verb::Look,
        Verb::Take,
        Verb::Drop,
        Verb::Inventory,
        Verb::Unlock,
        Verb::Help,
        Verb::Quit,
    ];

    /// Returns the canonical word for this verb.
    #[must_use]
    pub const fn word(self) -> &'static str {
        match self {
            Verb::Go => "go",
            Verb::Look => "look",
            Verb::Take => "take",
            Verb::Drop => "drop",
            Verb::Inventory => "inventory",
            Verb::Unlock => "unlock",
            Verb::Help => "help",
            Verb::Quit => "quit",
        }
    }

    /// Returns true if the verb needs an argument.
    #[must_use]
    pub const fn takes_argument(self) -> bool {
        matches!(self, Verb::Go | Verb::Take | Verb::Drop | Verb::Unlock)
    }

    /// Returns the question asked when the argument is missing.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Verb::Go => "Go where?",
            Verb::Take => "Take what?",
            Verb::Drop => "Drop what?",
            Verb::Unlock => "Unlock with what?",
            Verb::Look | Verb::Inventory | Verb::Help | Verb::Quit => "What?",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// Runtime storage for vocabulary definitions.
///
/// Verb words match exactly unless case folding is switched on. Direction
/// shorthands are stored lowercase and always fold case.
#[derive(Clone, Debug, Default)]
pub struct VocabularyRegistry {
    /// Word (canonical or synonym) -> verb
    verbs: HashMap<String, Verb>,
    /// Direction shorthand -> canonical direction
    direction_synonyms: HashMap<String, String>,
    /// Whether a bare direction word means "go <direction>"
    bare_directions: bool,
    /// Whether verb lookups also try the lowercased word
    fold_case: bool,
}

impl VocabularyRegistry {
    /// Creates a new empty vocabulary registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a verb under its canonical word.
    pub fn register_verb(&mut self, verb: Verb) {
        self.verbs.insert(verb.word().to_string(), verb);
    }

    /// Registers a synonym for a verb, stored as given.
    pub fn register_verb_synonym(&mut self, word: &str, verb: Verb) {
        self.verbs.insert(word.to_string(), verb);
    }

    /// Looks up a verb by word (canonical or synonym).
    ///
    /// The word must match a registered word exactly; with case folding on,
    /// its lowercase form is tried as well.
    #[must_use]
    pub fn lookup_verb(&self, word: &str) -> Option<Verb> {
        if let Some(verb) = self.verbs.get(word) {
            return Some(*verb);
        }
        if self.fold_case {
            return self.verbs.get(&word.to_lowercase()).copied();
        }
        None
    }

    /// Enables or disables case-insensitive verb lookup.
    pub fn set_fold_case(&mut self, enabled: bool) {
        self.fold_case = enabled;
    }

    /// Returns true if verb lookup ignores case.
    #[must_use]
    pub const fn folds_case(&self) -> bool {
        self.fold_case
    }

    /// Registers a direction with its shorthands.
    ///
    /// The canonical name maps to itself so that it also counts as a known
    /// direction for bare movement.
    pub fn register_direction(&mut self, name: &str, synonyms: &[&str]) {
        let canonical = name.to_lowercase();
        for syn in synonyms {
            self.direction_synonyms
                .insert(syn.to_lowercase(), canonical.clone());
        }
        self.direction_synonyms.insert(canonical.clone(), canonical);
    }

    /// Looks up a registered direction by word (canonical or shorthand).
    #[must_use]
    pub fn lookup_direction(&self, word: &str) -> Option<&str> {
        self.direction_synonyms
            .get(&word.to_lowercase())
            .map(String::as_str)
    }

    /// Resolves a direction word to its canonical form.
    ///
    /// Unregistered words come back unchanged, so worlds may use any exit
    /// label.
    #[must_use]
    pub fn resolve_direction<'a>(&'a self, word: &'a str) -> &'a str {
        self.lookup_direction(word).unwrap_or(word)
    }

    /// Enables or disables bare direction words as movement commands.
    pub fn set_bare_directions(&mut self, enabled: bool) {
        self.bare_directions = enabled;
    }

    /// Returns true if a bare direction word means "go <direction>".
    #[must_use]
    pub const fn bare_directions(&self) -> bool {
        self.bare_directions
    }

    /// Returns every word that resolves to a verb, sorted.
    #[must_use]
    pub fn verb_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.verbs.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
