//! Command parser.
//!
//! Turns tokenized input into a [`Command`] using a [`VocabularyRegistry`].

use thiserror::Error;

use crate::command::Command;
use crate::tokenizer::InputTokenizer;
use crate::vocabulary::{Verb, VocabularyRegistry};

/// Why input could not be turned into a command.
///
/// Each variant displays as the reply given to the player.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace was entered.
    #[error("Unknown command.")]
    EmptyInput,
    /// The first word is not a known verb.
    #[error("Unknown command.")]
    UnknownVerb(String),
    /// The verb needs an argument that was not given.
    #[error("{}", .0.prompt())]
    MissingArgument(Verb),
}

/// Parses player input against a vocabulary.
#[derive(Clone, Debug)]
pub struct CommandParser {
    vocabulary: VocabularyRegistry,
}

impl CommandParser {
    /// Creates a parser for the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: VocabularyRegistry) -> Self {
        Self { vocabulary }
    }

    /// Returns the parser's vocabulary.
    #[must_use]
    pub const fn vocabulary(&self) -> &VocabularyRegistry {
        &self.vocabulary
    }

    /// Parses one line of input.
    ///
    /// The first word selects the verb, matched as the vocabulary dictates.
    /// `go` uses only the first argument word, kept as typed; the interpreter
    /// resolves it against the room's exits. Item-taking verbs rejoin every
    /// remaining word; `look`, `inventory`, `help` and `quit` ignore extra
    /// words.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for empty input, an unknown verb, or a
    /// missing argument.
    pub fn parse(&self, input: &str) -> Result<Command, ParseError> {
        let words = InputTokenizer::tokenize(input);
        let Some((&first, args)) = words.split_first() else {
            return Err(ParseError::EmptyInput);
        };

        let verb = match self.vocabulary.lookup_verb(first) {
            Some(verb) => verb,
            None => return self.parse_bare_direction(first),
        };

        if verb.takes_argument() && args.is_empty() {
            return Err(ParseError::MissingArgument(verb));
        }

        Ok(match verb {
            Verb::Go => Command::Go {
                direction: args[0].to_string(),
            },
            Verb::Look => Command::Look,
            Verb::Take => Command::Take {
                item: InputTokenizer::rejoin(args),
            },
            Verb::Drop => Command::Drop {
                item: InputTokenizer::rejoin(args),
            },
            Verb::Inventory => Command::Inventory,
            Verb::Unlock => Command::Unlock {
                key: InputTokenizer::rejoin(args),
            },
            Verb::Help => Command::Help,
            Verb::Quit => Command::Quit,
        })
    }

    /// Treats a lone direction word as movement, when enabled.
    fn parse_bare_direction(&self, word: &str) -> Result<Command, ParseError> {
        if self.vocabulary.bare_directions() && self.vocabulary.lookup_direction(word).is_some() {
            return Ok(Command::Go {
                direction: word.to_string(),
            });
        }
        Err(ParseError::UnknownVerb(word.to_string()))
    }
}
