use crate::error::GameError;
use crate::game_state::{GameInterface, UserAction};
use crate::player::{GuessOutcome, MAX_ATTEMPTS};
use crate::session::{DisplayState, GuessReport, RoundOutcome, parse_letter};
use clap::Parser;
use std::collections::BTreeSet;
use std::io::BufRead;
use std::path::PathBuf;

/// Hangman: guess the hidden word one letter at a time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON word list: [{"word": "...", "hint": "..."}, ...]
    #[arg(short = 'i', long = "input")]
    pub wordlist_path: Option<PathBuf>,

    /// Play with plain line-based prompts instead of the terminal UI
    #[arg(long)]
    pub plain: bool,

    /// Seed for word selection, for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write the log file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum GuessInput {
    Letter(char),
    Invalid(GameError),
    Exit,
    NewGame,
}

/// Interpret one line of input. Commands are case-insensitive.
#[must_use]
pub fn parse_input(line: &str) -> GuessInput {
    let input = line.trim().to_uppercase();
    match input.as_str() {
        "EXIT" | "QUIT" => GuessInput::Exit,
        "NEW" | "NEXT" => GuessInput::NewGame,
        _ => match parse_letter(&input) {
            Ok(letter) => GuessInput::Letter(letter),
            Err(e) => GuessInput::Invalid(e),
        },
    }
}

/// Read a command, treating end of input (or a read failure) as exit.
pub fn read_guess<R: BufRead>(reader: &mut R, round_over: bool) -> GuessInput {
    if round_over {
        println!("\nType 'new' to play again, or 'exit' to quit:");
    } else {
        println!("\nGuess a letter ('new' for a new word, 'exit' to quit):");
    }
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => GuessInput::Exit,
        Ok(_) => parse_input(&input),
    }
}

fn format_letters(letters: &BTreeSet<char>) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn display_round(state: &DisplayState) {
    println!();
    println!("{}", state.display_word);
    if !state.hint.is_empty() {
        println!("Hint: {}", state.hint);
    }
    println!("Attempts: {}/{}", state.remaining_attempts, MAX_ATTEMPTS);
    if !state.guessed_letters.is_empty() {
        println!("Guessed: {}", format_letters(&state.guessed_letters));
    }
    match &state.outcome {
        Some(RoundOutcome::Won) => println!("You win!"),
        Some(RoundOutcome::Lost { word }) => println!("You lost! The word was {word}."),
        None => {}
    }
}

pub fn display_guess_result(report: &GuessReport) {
    let letter = report.letter;
    match report.outcome {
        GuessOutcome::Hit { count: 1 } => println!("Yes! There is one '{letter}'."),
        GuessOutcome::Hit { count } => println!("Yes! There are {count} '{letter}'s."),
        GuessOutcome::Miss => println!("Sorry, '{letter}' is not in the word."),
        GuessOutcome::AlreadyGuessed => println!("You already guessed '{letter}'."),
    }
}

/// Only malformed guesses are reported as bad input; the rest are state problems.
#[must_use]
pub fn format_error(error: &GameError) -> String {
    match error {
        GameError::InvalidGuessInput(_) | GameError::InvalidGuessText(_) => {
            format!("Invalid input: {error}.")
        }
        GameError::EmptyWordPool | GameError::GuessInWrongState(_) => {
            format!("Cannot play: {error}.")
        }
    }
}

pub fn display_error(error: &GameError) {
    println!("{}", format_error(error));
}

pub fn display_new_game_message(word_count: usize) {
    println!("New game started. Picked from {word_count} words.");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the `GameInterface` trait.
/// Wraps a `BufRead` so tests can script the input.
pub struct CliInterface<R: BufRead> {
    reader: R,
    round_over: bool,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            round_over: false,
        }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round(&mut self, state: &DisplayState) {
        self.round_over = state.outcome.is_some();
        display_round(state);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match read_guess(&mut self.reader, self.round_over) {
            GuessInput::Letter(letter) => Some(UserAction::Guess(letter)),
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::NewGame => Some(UserAction::NewGame),
            GuessInput::Invalid(e) => {
                display_error(&e);
                None
            }
        }
    }

    fn display_guess_result(&mut self, report: &GuessReport) {
        display_guess_result(report);
    }

    fn display_error(&mut self, error: &GameError) {
        display_error(error);
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        self.round_over = false;
        display_new_game_message(word_count);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
