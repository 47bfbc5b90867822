// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod player;
pub mod session;
pub mod tui;
pub mod word;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use error::{GameError, WordListError};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use player::{GuessOutcome, MAX_ATTEMPTS, Player};
pub use session::{
    DisplayState, GameSession, GuessReport, RandomPicker, RoundOutcome, RoundStatus, WordPicker,
    parse_letter,
};
pub use word::Word;
pub use wordlist::{load_words, load_words_from_file, load_words_from_str};
