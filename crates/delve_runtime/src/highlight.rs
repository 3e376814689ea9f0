//! Input highlighting for the game prompt.

use std::borrow::Cow;
use std::collections::HashSet;

/// Colors the first word of the line by whether it is a known verb.
pub struct VerbHighlighter {
    verbs: HashSet<String>,
}

impl VerbHighlighter {
    /// Creates a highlighter that knows no verbs.
    pub fn new() -> Self {
        Self {
            verbs: HashSet::new(),
        }
    }

    /// Replaces the known verb words.
    pub fn set_verbs<I, S>(&mut self, verbs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.verbs = verbs.into_iter().map(Into::into).collect();
    }

    /// Highlights a line: known verbs green, unknown first words red.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let trimmed = line.trim_start();
        let lead = line.len() - trimmed.len();
        let word_len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        if word_len == 0 {
            return Cow::Borrowed(line);
        }

        let word = &trimmed[..word_len];
        let color = if self.verbs.contains(word) {
            "\x1b[1;32m" // bold green
        } else {
            "\x1b[31m" // red
        };

        let mut result = String::with_capacity(line.len() + 12);
        result.push_str(&line[..lead]);
        result.push_str(color);
        result.push_str(word);
        result.push_str("\x1b[0m");
        result.push_str(&trimmed[word_len..]);
        Cow::Owned(result)
    }
}
