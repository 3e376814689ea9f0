//! The game loop.

use std::io::{self, Write};

use delve_foundation::Result;
use delve_parser::interpreter::GOODBYE;
use delve_parser::{Interpreter, Response};
use delve_world::World;
use tracing::info;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// The interactive game loop: read a line, interpret it, print the reply.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The world being played.
    world: World,

    /// Turns input into responses.
    interpreter: Interpreter,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Number of lines interpreted so far.
    turns: u64,
}

impl Repl<RustylineEditor> {
    /// Creates a game loop reading from the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(world: World, interpreter: Interpreter) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, world, interpreter))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a game loop with the given editor.
    pub fn with_editor(editor: E, world: World, interpreter: Interpreter) -> Self {
        Self {
            editor,
            world,
            interpreter,
            show_banner: true,
            prompt: "> ".to_string(),
            turns: 0,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Returns the number of lines interpreted so far.
    #[must_use]
    pub const fn turns(&self) -> u64 {
        self.turns
    }

    /// Runs the loop on stdout until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Runs the loop, writing game text to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run_to<W: Write>(&mut self, out: &mut W) -> Result<()> {
        info!(room = self.world.current_room().name(), "game started");
        if self.show_banner {
            self.print_banner(out)?;
        }
        self.refresh_completions();

        let mut quit = false;
        while !quit {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history(&line);
                    }
                    let response = self.turn(&line);
                    writeln!(out, "{}", response.text)?;
                    out.flush()?;
                    quit = response.is_quit();
                }
                ReadResult::Interrupted => {
                    writeln!(out)?;
                }
                ReadResult::Eof => {
                    writeln!(out, "\n{GOODBYE}")?;
                    break;
                }
            }
        }

        info!(turns = self.turns, "game ended");
        Ok(())
    }

    /// Interprets one line against the world.
    pub fn turn(&mut self, line: &str) -> Response {
        self.turns += 1;
        let response = self.interpreter.execute(&mut self.world, line);
        self.refresh_completions();
        response
    }

    /// Offers the current room's exits and the visible and carried item
    /// names for completion.
    fn refresh_completions(&mut self) {
        let verbs = self
            .interpreter
            .vocabulary()
            .verb_words()
            .into_iter()
            .map(String::from)
            .collect();
        self.editor.set_verbs(verbs);

        let room = self.world.current_room();
        let mut words: Vec<String> = room.connections().keys().cloned().collect();
        words.extend(room.items().iter().map(|item| item.name().to_string()));
        words.extend(
            self.world
                .player()
                .inventory()
                .iter()
                .map(|item| item.name().to_string()),
        );
        self.editor.set_context_words(words);
    }

    fn print_banner<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to Delve!")?;
        writeln!(out, "Type 'help' for a list of commands, 'quit' to leave.")?;
        writeln!(out)?;
        writeln!(out, "{}", self.world.look())?;
        Ok(())
    }
}
