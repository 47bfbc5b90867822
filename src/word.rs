use crate::error::WordListError;
use std::collections::BTreeSet;

/// Placeholder shown for letters the player has not found yet.
pub const PLACEHOLDER: char = '_';

/// A secret word and the hint shown alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    hint: String,
}

impl Word {
    /// Build a word, trimming and uppercasing `text`.
    ///
    /// Fails with [`WordListError::EmptyWord`] if nothing is left after
    /// trimming, and with [`WordListError::UnplayableWord`] if any character
    /// is not an ASCII letter.
    pub fn new(text: &str, hint: impl Into<String>) -> Result<Self, WordListError> {
        let text = text.trim().to_uppercase();
        if text.is_empty() {
            return Err(WordListError::EmptyWord);
        }
        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordListError::UnplayableWord(text));
        }
        Ok(Self {
            text,
            hint: hint.into(),
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        self.text.chars().filter(|&c| c == letter).count()
    }

    /// Render the word with every unguessed position masked, e.g. `"C _ T"`.
    #[must_use]
    pub fn display_word(&self, guessed: &BTreeSet<char>) -> String {
        let mut display = String::with_capacity(self.text.len() * 2);
        for c in self.text.chars() {
            display.push(if guessed.contains(&c) { c } else { PLACEHOLDER });
            display.push(' ');
        }
        display.trim_end().to_string()
    }
}
