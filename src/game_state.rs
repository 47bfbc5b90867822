use crate::error::GameError;
use crate::session::{DisplayState, GameSession, GuessReport, WordPicker};
use crate::{debug_log, info_log};

/// A command coming from the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Guess(char),
    NewGame,
    Exit,
}

/// Everything a front-end must provide to host a session.
///
/// Implemented by the line-based [`CliInterface`](crate::cli::CliInterface)
/// and the ratatui [`TuiInterface`](crate::tui::TuiInterface).
pub trait GameInterface {
    /// Show the current round. Called after every state change.
    fn display_round(&mut self, state: &DisplayState);
    /// Wait for the next command. `None` means the input was rejected and
    /// already reported; the loop just asks again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_guess_result(&mut self, report: &GuessReport);
    fn display_error(&mut self, error: &GameError);
    fn display_new_game_message(&mut self, word_count: usize);
    fn display_exit_message(&mut self);
}

/// Drive `session` with commands from `interface` until the user exits.
///
/// Returns an error only if the first round cannot start.
pub fn game_loop<P, I>(session: &mut GameSession<P>, interface: &mut I) -> Result<(), GameError>
where
    P: WordPicker,
    I: GameInterface + ?Sized,
{
    if let Err(e) = start_round(session, interface) {
        interface.display_error(&e);
        return Err(e);
    }

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action: {:?}", action);

        match action {
            UserAction::Exit => {
                info_log!("game_loop() - exit requested");
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                if let Err(e) = start_round(session, interface) {
                    interface.display_error(&e);
                }
            }
            UserAction::Guess(letter) => match session.submit_guess(letter) {
                Ok(report) => {
                    interface.display_guess_result(&report);
                    redraw(session, interface);
                }
                Err(e) => {
                    debug_log!("game_loop() - guess rejected: {}", e);
                    interface.display_error(&e);
                }
            },
        }
    }
    Ok(())
}

fn start_round<P, I>(session: &mut GameSession<P>, interface: &mut I) -> Result<(), GameError>
where
    P: WordPicker,
    I: GameInterface + ?Sized,
{
    session.start_new_game()?;
    interface.display_new_game_message(session.word_count());
    redraw(session, interface);
    Ok(())
}

fn redraw<P, I>(session: &GameSession<P>, interface: &mut I)
where
    P: WordPicker,
    I: GameInterface + ?Sized,
{
    if let Some(state) = session.current_display_state() {
        interface.display_round(&state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::GuessOutcome;
    use crate::session::{RoundOutcome, RoundStatus};
    use crate::word::Word;
    use std::collections::VecDeque;

    struct FirstWord;

    impl WordPicker for FirstWord {
        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    /// Replays scripted actions and records what the loop showed.
    #[derive(Default)]
    struct ScriptedInterface {
        actions: VecDeque<Option<UserAction>>,
        rounds: Vec<DisplayState>,
        reports: Vec<GuessReport>,
        errors: Vec<GameError>,
        new_games: usize,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            Self {
                actions: actions.into(),
                ..Self::default()
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_round(&mut self, state: &DisplayState) {
            self.rounds.push(state.clone());
        }

        fn read_action(&mut self) -> Option<UserAction> {
            self.actions.pop_front().unwrap_or(Some(UserAction::Exit))
        }

        fn display_guess_result(&mut self, report: &GuessReport) {
            self.reports.push(*report);
        }

        fn display_error(&mut self, error: &GameError) {
            self.errors.push(error.clone());
        }

        fn display_new_game_message(&mut self, _word_count: usize) {
            self.new_games += 1;
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    fn session(word: &str) -> GameSession<FirstWord> {
        GameSession::new(vec![Word::new(word, "hint").unwrap()], FirstWord)
    }

    #[test]
    fn test_game_loop_immediate_exit() {
        let mut session = session("CAT");
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Exit)]);
        game_loop(&mut session, &mut interface).unwrap();
        assert!(interface.exited);
        assert_eq!(interface.new_games, 1);
        assert_eq!(interface.rounds.len(), 1);
        assert_eq!(interface.rounds[0].display_word, "_ _ _");
    }

    #[test]
    fn test_game_loop_empty_pool() {
        let mut session: GameSession<FirstWord> = GameSession::new(Vec::new(), FirstWord);
        let mut interface = ScriptedInterface::default();
        assert_eq!(game_loop(&mut session, &mut interface), Err(GameError::EmptyWordPool));
        assert_eq!(interface.errors, vec![GameError::EmptyWordPool]);
        assert!(interface.rounds.is_empty());
    }

    #[test]
    fn test_game_loop_winning_round() {
        let mut session = session("CAT");
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::Guess('C')),
            Some(UserAction::Guess('A')),
            Some(UserAction::Guess('T')),
        ]);
        game_loop(&mut session, &mut interface).unwrap();
        let last = interface.rounds.last().unwrap();
        assert_eq!(last.outcome, Some(RoundOutcome::Won));
        assert_eq!(interface.reports.last().unwrap().status, RoundStatus::Won);
    }

    #[test]
    fn test_game_loop_skips_rejected_input() {
        let mut session = session("CAT");
        let mut interface =
            ScriptedInterface::new(vec![None, Some(UserAction::Guess('Z')), None]);
        game_loop(&mut session, &mut interface).unwrap();
        assert_eq!(interface.reports.len(), 1);
        assert_eq!(interface.reports[0].outcome, GuessOutcome::Miss);
    }

    #[test]
    fn test_game_loop_reports_invalid_and_late_guesses() {
        let mut session = session("OX");
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::Guess('1')),
            Some(UserAction::Guess('O')),
            Some(UserAction::Guess('X')),
            Some(UserAction::Guess('Q')),
        ]);
        game_loop(&mut session, &mut interface).unwrap();
        assert_eq!(
            interface.errors,
            vec![
                GameError::InvalidGuessInput('1'),
                GameError::GuessInWrongState(RoundStatus::Won),
            ]
        );
        assert_eq!(session.status(), RoundStatus::Won);
    }

    #[test]
    fn test_game_loop_new_game_resets_round() {
        let mut session = session("CAT");
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::Guess('Z')),
            Some(UserAction::NewGame),
        ]);
        game_loop(&mut session, &mut interface).unwrap();
        assert_eq!(interface.new_games, 2);
        let last = interface.rounds.last().unwrap();
        assert!(last.guessed_letters.is_empty());
        assert_eq!(last.remaining_attempts, crate::player::MAX_ATTEMPTS);
    }
}
