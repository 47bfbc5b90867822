//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Layout
//! Title, then the gallows next to the masked word, hint and attempts, then
//! the on-screen keyboard, a message panel, the status line and key help.
//!
//! # State Machine
//! - `Playing`: letter keys guess, `Tab` starts a new word, `Esc` quits
//! - `GameOver`: `N`/`Enter` start a new word, `Esc` quits
//!
//! Everything drawn comes from the latest [`DisplayState`]; the keyboard
//! greys out keys purely from its `guessed_letters`.

use crate::error::GameError;
use crate::game_state::{GameInterface, UserAction};
use crate::player::{GuessOutcome, MAX_ATTEMPTS};
use crate::session::{DisplayState, GuessReport, RoundOutcome};
use crate::{debug_log, info_log, warn_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const LOST_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const WORD_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// One picture per number of wrong guesses, 0 through 6.
const GALLOWS: [[&str; 7]; 7] = [
    ["  +---+", "  |   |", "      |", "      |", "      |", "      |", "========"],
    ["  +---+", "  |   |", "  O   |", "      |", "      |", "      |", "========"],
    ["  +---+", "  |   |", "  O   |", "  |   |", "      |", "      |", "========"],
    ["  +---+", "  |   |", "  O   |", " /|   |", "      |", "      |", "========"],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "      |", "========"],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "      |", "========"],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "      |", "========"],
];

/// Picture index for the given attempts left, clamped to the final picture.
#[must_use]
pub fn gallows_stage(remaining_attempts: u8) -> usize {
    let wrong = usize::from(MAX_ATTEMPTS.saturating_sub(remaining_attempts));
    wrong.min(GALLOWS.len() - 1)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum KeyState {
    Available,
    Hit,
    Miss,
}

impl KeyState {
    /// A guessed letter is a hit if it shows up in the masked word.
    fn of(letter: char, state: &DisplayState) -> Self {
        if !state.guessed_letters.contains(&letter) {
            Self::Available
        } else if state.display_word.contains(letter) {
            Self::Hit
        } else {
            Self::Miss
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Available => Style::new().fg(Color::White).bg(Color::DarkGray),
            Self::Hit => Style::new().fg(Color::Black).bg(Color::Green),
            Self::Miss => Style::new()
                .fg(Color::Gray)
                .bg(Color::Black)
                .add_modifier(Modifier::CROSSED_OUT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    Playing,
    GameOver,
}

/// What a key press means in the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
enum KeyAction {
    Act(UserAction),
    Reject(String),
    Ignore,
}

fn has_modifier_keys(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
}

fn map_key(state: TuiState, key: &KeyEvent) -> KeyAction {
    if key.code == KeyCode::Esc {
        return KeyAction::Act(UserAction::Exit);
    }
    if has_modifier_keys(key) {
        return KeyAction::Ignore;
    }
    match (state, key.code) {
        (TuiState::Playing, KeyCode::Tab) => KeyAction::Act(UserAction::NewGame),
        (TuiState::Playing, KeyCode::Char(c)) if c.is_ascii_alphabetic() => {
            KeyAction::Act(UserAction::Guess(c.to_ascii_uppercase()))
        }
        (TuiState::Playing, KeyCode::Char(c)) if !c.is_control() && c != '\u{FFFD}' => {
            KeyAction::Reject(format!("Only A-Z letters are allowed! ('{c}' can't be guessed)"))
        }
        (TuiState::GameOver, KeyCode::Char('n' | 'N') | KeyCode::Enter | KeyCode::Tab) => {
            KeyAction::Act(UserAction::NewGame)
        }
        _ => KeyAction::Ignore,
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Undo raw mode and the alternate screen if setup failed halfway,
/// since no `TuiInterface` exists yet to do it on drop.
fn restore_on_error<T>(result: Result<T, io::Error>) -> Result<T, io::Error> {
    if let Err(e) = &result {
        warn_log!("Terminal setup failed, restoring terminal: {}", e);
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        let _ = disable_raw_mode();
    }
    result
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    round: Option<&'a DisplayState>,
    state: TuiState,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Owns the terminal while alive; restores it on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    round: Option<DisplayState>,
    state: TuiState,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let terminal = restore_on_error(setup_terminal())?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            round: None,
            state: TuiState::Playing,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            round: self.round.as_ref(),
            state: self.state,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(9),  // Gallows + word
                Constraint::Length(8),  // Keyboard
                Constraint::Min(3),     // Messages
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        if let Some(round) = ctx.round {
            Self::render_round(f, chunks[1], round);
            Self::render_keyboard(f, chunks[2], round);
        }
        Self::render_messages(f, chunks[3], ctx.round, ctx.message, ctx.error_message);
        Self::render_status(f, chunks[4], ctx.status);
        Self::render_instructions(f, chunks[5], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_round(f: &mut Frame, area: Rect, round: &DisplayState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(14), Constraint::Min(20)])
            .split(area);

        let picture: Vec<Line> = GALLOWS[gallows_stage(round.remaining_attempts)]
            .iter()
            .map(|row| Line::from(*row))
            .collect();
        f.render_widget(
            Paragraph::new(picture).block(Block::default().borders(Borders::ALL)),
            columns[0],
        );

        let word_style = match round.outcome {
            Some(RoundOutcome::Won) => SUCCESS_STYLE,
            Some(RoundOutcome::Lost { .. }) => LOST_STYLE,
            None => WORD_STYLE,
        };
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(round.display_word.clone(), word_style)),
            Line::from(""),
            Line::from(format!("Hint: {}", round.hint)),
            Line::from(""),
            Line::from(format!(
                "Attempts: {}/{}",
                round.remaining_attempts, MAX_ATTEMPTS
            )),
        ];
        let panel = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Word").borders(Borders::ALL));
        f.render_widget(panel, columns[1]);
    }

    fn render_keyboard(f: &mut Frame, area: Rect, round: &DisplayState) {
        let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len() * 2);
        for (row_index, row) in KEYBOARD_ROWS.iter().enumerate() {
            // Stagger rows like a physical keyboard
            let mut spans = vec![Span::raw(" ".repeat(row_index * 2))];
            for letter in row.chars() {
                spans.push(Span::styled(
                    format!(" {letter} "),
                    KeyState::of(letter, round).style(),
                ));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }
        let keyboard = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title("Keyboard").borders(Borders::ALL));
        f.render_widget(keyboard, area);
    }

    fn render_messages(
        f: &mut Frame,
        area: Rect,
        round: Option<&DisplayState>,
        message: &str,
        error_message: &str,
    ) {
        let mut lines = Vec::new();

        match round.and_then(|r| r.outcome.as_ref()) {
            Some(RoundOutcome::Won) => {
                lines.push(Line::from(Span::styled("You win!", SUCCESS_STYLE)));
            }
            Some(RoundOutcome::Lost { word }) => {
                lines.push(Line::from(Span::styled(
                    format!("You lost! The word was {word}."),
                    LOST_STYLE,
                )));
            }
            None => {}
        }

        if !message.is_empty() {
            lines.push(Line::from(Span::styled(message, MESSAGE_STYLE)));
        }

        if !error_message.is_empty() {
            lines.push(Line::from(Span::styled(error_message, ERROR_STYLE)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::Playing => "A-Z: Guess a letter | TAB: New word | ESC: Quit",
            TuiState::GameOver => "N / ENTER: New game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let key = match event::read()? {
            Event::Key(key) => key,
            other => {
                debug_log!("handle_input() - Ignoring non-key event: {:?}", other);
                return Ok(None);
            }
        };
        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        debug_log!(
            "handle_input() - Key event: code={:?}, modifiers={:?}, state={:?}",
            key.code,
            key.modifiers,
            self.state
        );
        match map_key(self.state, &key) {
            KeyAction::Act(action) => {
                self.error_message.clear();
                Ok(Some(action))
            }
            KeyAction::Reject(message) => {
                self.error_message = message;
                Ok(None)
            }
            KeyAction::Ignore => Ok(None),
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_round(&mut self, state: &DisplayState) {
        self.state = match state.outcome {
            Some(_) => TuiState::GameOver,
            None => TuiState::Playing,
        };
        self.status = match &state.outcome {
            Some(RoundOutcome::Won) => "Game Over - You win!".to_string(),
            Some(RoundOutcome::Lost { word }) => format!("Game Over - The word was {word}"),
            None => format!(
                "{} guessed, {} attempts left",
                state.guessed_letters.len(),
                state.remaining_attempts
            ),
        };
        self.round = Some(state.clone());
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Error handling input: {}", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_guess_result(&mut self, report: &GuessReport) {
        let letter = report.letter;
        self.message = match report.outcome {
            GuessOutcome::Hit { count: 1 } => format!("Yes! There is one '{letter}'."),
            GuessOutcome::Hit { count } => format!("Yes! There are {count} '{letter}'s."),
            GuessOutcome::Miss => format!("Sorry, '{letter}' is not in the word."),
            GuessOutcome::AlreadyGuessed => format!("You already guessed '{letter}'."),
        };
    }

    fn display_error(&mut self, error: &GameError) {
        self.error_message = format!("{error}");
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        self.state = TuiState::Playing;
        self.message = format!("New game started. Picked from {word_count} words.");
        self.error_message.clear();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
