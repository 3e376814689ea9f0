//! Command interpretation.
//!
//! The interpreter is stateless: every turn is a function of the world and
//! one line of input. Each line yields exactly one [`Response`]; refusals and
//! parse failures become response text and never escape as errors.

use delve_world::World;
use tracing::{debug, trace};

use crate::command::Command;
use crate::parser::CommandParser;
use crate::stdlib;
use crate::tokenizer::InputTokenizer;
use crate::vocabulary::VocabularyRegistry;

/// Reply to `quit`.
pub const GOODBYE: &str = "Goodbye!";

/// What the game loop should do after a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading input.
    Continue,
    /// Stop the game.
    Quit,
}

/// The result of one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// Text to show the player.
    pub text: String,
    /// Whether the game goes on.
    pub outcome: Outcome,
}

impl Response {
    fn reply(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outcome: Outcome::Continue,
        }
    }

    /// Returns true if the game should stop.
    #[must_use]
    pub fn is_quit(&self) -> bool {
        self.outcome == Outcome::Quit
    }
}

/// Parses input and applies it to a world.
#[derive(Clone, Debug)]
pub struct Interpreter {
    parser: CommandParser,
}

impl Interpreter {
    /// Creates an interpreter for the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: VocabularyRegistry) -> Self {
        Self {
            parser: CommandParser::new(vocabulary),
        }
    }

    /// Creates an interpreter that knows only the canonical verbs.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(stdlib::standard())
    }

    /// Creates an interpreter with verb synonyms and direction shorthands.
    #[must_use]
    pub fn with_aliases() -> Self {
        Self::new(stdlib::with_aliases())
    }

    /// Returns the vocabulary in use.
    #[must_use]
    pub const fn vocabulary(&self) -> &VocabularyRegistry {
        self.parser.vocabulary()
    }

    /// Runs one turn against `world` in place.
    pub fn execute(&self, world: &mut World, input: &str) -> Response {
        trace!(tokens = ?InputTokenizer::tokenize(input), "turn input");

        let command = match self.parser.parse(input) {
            Ok(command) => command,
            Err(err) => {
                debug!(error = ?err, "input not understood");
                return Response::reply(err.to_string());
            }
        };

        let response = self.dispatch(world, &command);
        debug!(%command, reply = %response.text, "turn complete");
        response
    }

    /// Runs one turn without touching `world`, returning the resulting world
    /// alongside the response.
    ///
    /// Worlds share structure, so the copy costs little.
    #[must_use]
    pub fn interpret(&self, world: &World, input: &str) -> (World, Response) {
        let mut next = world.clone();
        let response = self.execute(&mut next, input);
        (next, response)
    }

    /// Picks the exit a typed direction refers to.
    ///
    /// A word that labels an exit of the current room is used as typed;
    /// otherwise registered shorthands are expanded.
    fn exit_label<'a>(&'a self, world: &World, typed: &'a str) -> &'a str {
        if world.current_room().exit(typed).is_some() {
            typed
        } else {
            self.vocabulary().resolve_direction(typed)
        }
    }

    fn dispatch(&self, world: &mut World, command: &Command) -> Response {
        let result = match command {
            Command::Go { direction } => {
                let label = self.exit_label(world, direction);
                world.go(label)
            }
            Command::Look => Ok(world.look()),
            Command::Take { item } => world.take(item),
            Command::Drop { item } => world.drop_item(item),
            Command::Inventory => Ok(world.inventory()),
            Command::Unlock { key } => world.unlock(key),
            Command::Help => Ok(stdlib::HELP.to_string()),
            Command::Quit => {
                return Response {
                    text: GOODBYE.to_string(),
                    outcome: Outcome::Quit,
                };
            }
        };
        Response::reply(result.unwrap_or_else(|refusal| refusal.to_string()))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::standard()
    }
}
