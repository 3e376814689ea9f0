//! Line editor abstraction for the game loop.
//!
//! The loop reads through the [`LineEditor`] trait so that it can run on a
//! terminal (rustyline, with history, completion and highlighting) or on any
//! buffered reader (batch mode and tests).

use std::borrow::Cow;
use std::io::BufRead;

use delve_foundation::{Error, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

use crate::highlight::VerbHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D, or the input ran out.
    Eof,
}

/// Abstraction over line input.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the input fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set the verbs used for highlighting and completion.
    fn set_verbs(&mut self, verbs: Vec<String>);

    /// Set context words (exits, item names) offered for completion.
    fn set_context_words(&mut self, words: Vec<String>);
}

/// Helper for rustyline that provides completion, hints and highlighting.
#[derive(Helper, Completer, Hinter, Validator)]
struct DelveHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: VerbHighlighter,
}

impl Highlighter for DelveHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;36m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes verbs in first position and context words after it.
#[derive(Default)]
struct WordCompleter {
    verbs: Vec<String>,
    context: Vec<String>,
}

impl WordCompleter {
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let before = &line[..pos];
        let first_word_done = before.trim_start().contains(char::is_whitespace);

        // Arguments may be several words ("brass key"), so after the verb the
        // whole tail is the prefix being completed.
        let start = if first_word_done {
            let verb_end = before.len() - before.trim_start().len()
                + before
                    .trim_start()
                    .find(char::is_whitespace)
                    .unwrap_or(0);
            verb_end + (before[verb_end..].len() - before[verb_end..].trim_start().len())
        } else {
            before.len() - before.trim_start().len()
        };

        let prefix = before[start..].to_lowercase();
        let pool = if first_word_done {
            &self.context
        } else {
            &self.verbs
        };

        let pairs = pool
            .iter()
            .filter(|word| word.to_lowercase().starts_with(&prefix))
            .map(|word| Pair {
                display: word.clone(),
                replacement: word.clone(),
            })
            .collect();
        (start, pairs)
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<DelveHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(500)
            .map_err(|e| Error::terminal(e.to_string()))?
            .build();

        let helper = DelveHelper {
            completer: WordCompleter::default(),
            hinter: HistoryHinter::new(),
            highlighter: VerbHighlighter::new(),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::terminal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::terminal(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_verbs(&mut self, verbs: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.highlighter.set_verbs(verbs.iter().cloned());
            helper.completer.verbs = verbs;
        }
    }

    fn set_context_words(&mut self, words: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.context = words;
        }
    }
}

/// Line editor over any buffered reader.
///
/// Prompts are not shown and nothing is kept in history. Used for batch
/// mode, where commands are piped in, and for driving the loop in tests.
pub struct ScriptEditor<R> {
    reader: R,
    lines_read: usize,
}

impl<R: BufRead> ScriptEditor<R> {
    /// Creates an editor that reads lines from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            lines_read: 0,
        }
    }

    /// Returns how many lines have been read.
    #[must_use]
    pub const fn lines_read(&self) -> usize {
        self.lines_read
    }
}

impl<R: BufRead> LineEditor for ScriptEditor<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(ReadResult::Eof);
        }
        self.lines_read += 1;

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(ReadResult::Line(line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_verbs(&mut self, _verbs: Vec<String>) {}

    fn set_context_words(&mut self, _words: Vec<String>) {}
}
