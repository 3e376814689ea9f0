//! Standard vocabulary for Delve.
//!
//! [`standard`] knows only the canonical verbs. [`with_aliases`] adds the
//! usual adventure-game abbreviations on top.

use crate::vocabulary::{Verb, VocabularyRegistry};

/// Verb synonyms added by [`with_aliases`].
pub const VERB_SYNONYMS: &[(Verb, &[&str])] = &[
    (Verb::Go, &["walk", "move"]),
    (Verb::Look, &["l"]),
    (Verb::Take, &["get", "grab"]),
    (Verb::Drop, &["discard"]),
    (Verb::Inventory, &["i", "inv"]),
    (Verb::Help, &["?"]),
    (Verb::Quit, &["q", "exit"]),
];

/// Directions and their shorthands added by [`with_aliases`].
pub const DIRECTIONS: &[(&str, &[&str])] = &[
    ("north", &["n"]),
    ("south", &["s"]),
    ("east", &["e"]),
    ("west", &["w"]),
    ("up", &["u"]),
    ("down", &["d"]),
];

/// Text shown for `help`.
pub const HELP: &str = "\
Commands:
  go <direction>      move through an exit
  look                describe where you are
  take <item>         pick something up
  drop <item>         put something down
  inventory           list what you carry
  unlock <item>       use a carried key on a lock
  help                show this list
  quit                leave the game";

/// Builds a vocabulary with only the canonical verbs.
#[must_use]
pub fn standard() -> VocabularyRegistry {
    let mut vocabulary = VocabularyRegistry::new();
    register_verbs(&mut vocabulary);
    vocabulary
}

/// Builds a vocabulary with canonical verbs, synonyms and direction
/// shorthands, including bare direction words as movement. Verbs in this
/// vocabulary ignore case.
#[must_use]
pub fn with_aliases() -> VocabularyRegistry {
    let mut vocabulary = standard();
    register_aliases(&mut vocabulary);
    vocabulary
}

/// Registers every canonical verb.
pub fn register_verbs(vocabulary: &mut VocabularyRegistry) {
    for verb in Verb::ALL {
        vocabulary.register_verb(verb);
    }
}

/// Registers verb synonyms and direction shorthands, and turns on case
/// folding.
pub fn register_aliases(vocabulary: &mut VocabularyRegistry) {
    for (verb, synonyms) in VERB_SYNONYMS {
        for word in *synonyms {
            vocabulary.register_verb_synonym(word, *verb);
        }
    }
    for (name, synonyms) in DIRECTIONS {
        vocabulary.register_direction(name, synonyms);
    }
    vocabulary.set_bare_directions(true);
    vocabulary.set_fold_case(true);
}
