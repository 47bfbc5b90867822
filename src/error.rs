use crate::session::RoundStatus;
use std::io;
use thiserror::Error;

/// Errors reported by [`GameSession`](crate::session::GameSession) commands.
///
/// None of these end the session; the front-end shows them and keeps going.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("no words available to start a round")]
    EmptyWordPool,
    #[error("'{0}' is not a letter")]
    InvalidGuessInput(char),
    #[error("expected a single letter, got '{0}'")]
    InvalidGuessText(String),
    #[error("cannot guess while the round is {0}")]
    GuessInWrongState(RoundStatus),
}

/// Errors produced while loading a word list.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    #[error("malformed word list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("word is empty")]
    EmptyWord,
    #[error("'{0}' cannot be guessed with A-Z letters")]
    UnplayableWord(String),
    #[error("word list contains no playable words")]
    NoWords,
}
