//! Vocabulary registry tests.
//!
//! Tests for registering and looking up verbs and directions.

use delve_parser::stdlib;
use delve_parser::vocabulary::{Verb, VocabularyRegistry};

#[test]
fn register_and_lookup_verb() {
    let mut vocab = VocabularyRegistry::new();
    vocab.register_verb(Verb::Look);

    assert_eq!(vocab.lookup_verb("look"), Some(Verb::Look));
    assert_eq!(vocab.lookup_verb("LOOK"), None);
    assert_eq!(vocab.lookup_verb("take"), None);
}

#[test]
fn lookup_verb_by_synonym() {
    let mut vocab = VocabularyRegistry::new();
    vocab.register_verb(Verb::Inventory);
    vocab.register_verb_synonym("i", Verb::Inventory);

    assert_eq!(vocab.lookup_verb("i"), Some(Verb::Inventory));
    assert_eq!(vocab.lookup_verb("I"), None);

    vocab.set_fold_case(true);
    assert_eq!(vocab.lookup_verb("I"), Some(Verb::Inventory));
    assert_eq!(vocab.lookup_verb("INVENTORY"), Some(Verb::Inventory));
}

#[test]
fn later_synonym_registration_wins() {
    let mut vocab = VocabularyRegistry::new();
    vocab.register_verb_synonym("x", Verb::Look);
    vocab.register_verb_synonym("x", Verb::Take);

    assert_eq!(vocab.lookup_verb("x"), Some(Verb::Take));
}

#[test]
fn register_and_lookup_direction() {
    let mut vocab = VocabularyRegistry::new();
    vocab.register_direction("up", &["u", "upward"]);

    assert_eq!(vocab.lookup_direction("u"), Some("up"));
    assert_eq!(vocab.lookup_direction("UPWARD"), Some("up"));
    assert_eq!(vocab.lookup_direction("up"), Some("up"));
    assert_eq!(vocab.lookup_direction("down"), None);
}

#[test]
fn unregistered_directions_pass_through() {
    let vocab = VocabularyRegistry::new();
    assert_eq!(vocab.resolve_direction("Trapdoor"), "Trapdoor");
}

#[test]
fn standard_vocabulary_verbs() {
    let vocab = stdlib::standard();
    for verb in Verb::ALL {
        assert_eq!(vocab.lookup_verb(verb.word()), Some(verb));
    }
    assert_eq!(vocab.lookup_verb("get"), None);
    assert_eq!(vocab.lookup_verb("Look"), None);
    assert_eq!(vocab.lookup_direction("n"), None);
}

#[test]
fn alias_vocabulary_adds_shorthands() {
    let vocab = stdlib::with_aliases();
    assert_eq!(vocab.lookup_verb("get"), Some(Verb::Take));
    assert_eq!(vocab.lookup_verb("q"), Some(Verb::Quit));
    assert_eq!(vocab.lookup_verb("Q"), Some(Verb::Quit));
    assert_eq!(vocab.lookup_direction("s"), Some("south"));
    assert!(vocab.bare_directions());
}
