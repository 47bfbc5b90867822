use std::collections::BTreeSet;

/// Wrong guesses allowed per round.
pub const MAX_ATTEMPTS: u8 = 6;

/// What a single guess did to the player's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs `count` times in the word
    Hit { count: usize },
    /// The letter is not in the word; one attempt was spent
    Miss,
    /// The letter was guessed before; nothing changed
    AlreadyGuessed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    remaining_attempts: u8,
    guessed_letters: BTreeSet<char>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    #[must_use]
    pub fn new() -> Self {
        Self {
            remaining_attempts: MAX_ATTEMPTS,
            guessed_letters: BTreeSet::new(),
        }
    }

    pub fn reset(&mut self) {
        self.remaining_attempts = MAX_ATTEMPTS;
        self.guessed_letters.clear();
    }

    /// Record a guess of `letter` against `word`.
    ///
    /// Repeating a letter is a no-op. A letter absent from `word` costs one
    /// attempt; attempts stop at zero.
    pub fn guess_letter(&mut self, letter: char, word: &str) -> GuessOutcome {
        if !self.guessed_letters.insert(letter) {
            return GuessOutcome::AlreadyGuessed;
        }
        match word.chars().filter(|&c| c == letter).count() {
            0 => {
                self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
                GuessOutcome::Miss
            }
            count => GuessOutcome::Hit { count },
        }
    }

    #[must_use]
    pub fn has_won(&self, word: &str) -> bool {
        word.chars().all(|c| self.guessed_letters.contains(&c))
    }

    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.remaining_attempts == 0
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> u8 {
        self.remaining_attempts
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> u8 {
        MAX_ATTEMPTS - self.remaining_attempts
    }

    #[must_use]
    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }
}
