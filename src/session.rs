//! Round orchestration.
//!
//! A [`GameSession`] owns the candidate pool, the [`Player`] and the active
//! word. Rounds move through these states:
//! - `NotStarted` → `InProgress` on [`GameSession::start_new_game`]
//! - `InProgress` → `Won` | `Lost` after a guess completes the word or spends
//!   the last attempt
//! - any state → `InProgress` on the next `start_new_game`

use crate::error::GameError;
use crate::player::{GuessOutcome, Player};
use crate::word::Word;
use crate::{debug_log, info_log};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// How a finished round ended. The word is revealed on a loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum RoundOutcome {
    Won,
    Lost { word: String },
}

/// Read-only snapshot of the active round for the front-end.
///
/// Keyboard keys are enabled or disabled from `guessed_letters` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub display_word: String,
    pub hint: String,
    pub remaining_attempts: u8,
    pub guessed_letters: BTreeSet<char>,
    pub status: RoundStatus,
    pub outcome: Option<RoundOutcome>,
}

/// Result of an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReport {
    pub letter: char,
    pub outcome: GuessOutcome,
    pub status: RoundStatus,
}

/// Source of word indices for new rounds.
pub trait WordPicker {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picker over the whole pool. The previous word may come up again.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl WordPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Parse a typed guess: exactly one ASCII letter, surrounding whitespace
/// ignored, returned uppercase.
pub fn parse_letter(input: &str) -> Result<char, GameError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        (Some(c), None) => Err(GameError::InvalidGuessInput(c)),
        _ => Err(GameError::InvalidGuessText(trimmed.to_string())),
    }
}

pub struct GameSession<P: WordPicker = RandomPicker> {
    words: Vec<Word>,
    player: Player,
    current: Option<usize>,
    status: RoundStatus,
    picker: P,
}

impl<P: WordPicker> GameSession<P> {
    /// Create a session over `words`. An empty pool is accepted here and
    /// rejected by [`start_new_game`](Self::start_new_game).
    pub fn new(words: Vec<Word>, picker: P) -> Self {
        info_log!("GameSession::new() - {} candidate words", words.len());
        Self {
            words,
            player: Player::new(),
            current: None,
            status: RoundStatus::NotStarted,
            picker,
        }
    }

    /// Pick a word, reset the player and begin a round.
    ///
    /// Fails with [`GameError::EmptyWordPool`] without touching any state.
    pub fn start_new_game(&mut self) -> Result<&Word, GameError> {
        if self.words.is_empty() {
            info_log!("start_new_game() - refusing to start, word pool is empty");
            return Err(GameError::EmptyWordPool);
        }
        let index = self.picker.pick(self.words.len()).min(self.words.len() - 1);
        self.current = Some(index);
        self.player.reset();
        self.status = RoundStatus::InProgress;
        let word = &self.words[index];
        debug_log!("start_new_game() - picked word #{}: {}", index, word.text());
        Ok(word)
    }

    /// Apply a guess to the active round.
    ///
    /// Lowercase letters count as their uppercase form. Rejected guesses leave
    /// the session unchanged. A guess that completes the word wins even if it
    /// is also the last attempt.
    pub fn submit_guess(&mut self, letter: char) -> Result<GuessReport, GameError> {
        if self.status != RoundStatus::InProgress {
            return Err(GameError::GuessInWrongState(self.status));
        }
        let Some(word) = self.current.map(|i| &self.words[i]) else {
            return Err(GameError::GuessInWrongState(self.status));
        };
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidGuessInput(letter));
        }
        let letter = letter.to_ascii_uppercase();

        let outcome = self.player.guess_letter(letter, word.text());
        if self.player.has_won(word.text()) {
            self.status = RoundStatus::Won;
        } else if self.player.has_lost() {
            self.status = RoundStatus::Lost;
        }
        debug_log!(
            "submit_guess() - '{}' -> {:?}, {} attempts left, status {}",
            letter,
            outcome,
            self.player.remaining_attempts(),
            self.status
        );
        if self.status.is_terminal() {
            info_log!("submit_guess() - round {} ({})", self.status, word.text());
        }

        Ok(GuessReport {
            letter,
            outcome,
            status: self.status,
        })
    }

    /// Snapshot of the active round, `None` before the first round.
    #[must_use]
    pub fn current_display_state(&self) -> Option<DisplayState> {
        let word = self.current_word()?;
        let outcome = match self.status {
            RoundStatus::Won => Some(RoundOutcome::Won),
            RoundStatus::Lost => Some(RoundOutcome::Lost {
                word: word.text().to_string(),
            }),
            RoundStatus::NotStarted | RoundStatus::InProgress => None,
        };
        Some(DisplayState {
            display_word: word.display_word(self.player.guessed_letters()),
            hint: word.hint().to_string(),
            remaining_attempts: self.player.remaining_attempts(),
            guessed_letters: self.player.guessed_letters().clone(),
            status: self.status,
            outcome,
        })
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn current_word(&self) -> Option<&Word> {
        self.current.map(|i| &self.words[i])
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}
