//! Input tokenization.
//!
//! Converts raw player input into words.

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Splits input on any run of whitespace.
    ///
    /// Words keep their case and punctuation; item names are matched later
    /// and may contain either.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<&str> {
        input.split_whitespace().collect()
    }

    /// Rejoins words with single spaces, for free-text arguments.
    #[must_use]
    pub fn rejoin(words: &[&str]) -> String {
        words.join(" ")
    }
}
