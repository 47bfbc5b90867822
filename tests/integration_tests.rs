// Integration tests for the hangman application
// These tests verify that all modules work together correctly

use hangman::cli::CliInterface;
use hangman::*;
use std::collections::BTreeSet;
use std::io::Cursor;

/// Always picks the same index so scripted games know the word.
struct FixedPicker(usize);

impl WordPicker for FixedPicker {
    fn pick(&mut self, _len: usize) -> usize {
        self.0
    }
}

fn session_from_json(json: &str, index: usize) -> GameSession<FixedPicker> {
    let words = load_words_from_str(json).unwrap();
    GameSession::new(words, FixedPicker(index))
}

#[test]
fn test_end_to_end_cli_winning_game() {
    // Load words -> pick "CAT" -> play it out through the CLI front-end
    let mut session = session_from_json(
        r#"[{"word": "dog", "hint": "Barks"}, {"word": "cat", "hint": "Meows"}]"#,
        1,
    );
    let input = "c\nz\na\nt\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut session, &mut interface).unwrap();

    assert_eq!(session.status(), RoundStatus::Won);
    let state = session.current_display_state().unwrap();
    assert_eq!(state.display_word, "C A T");
    assert_eq!(state.hint, "Meows");
    assert_eq!(state.remaining_attempts, MAX_ATTEMPTS - 1);
    assert_eq!(state.outcome, Some(RoundOutcome::Won));
}

#[test]
fn test_end_to_end_cli_losing_game() {
    let mut session = session_from_json(r#"[{"word": "dog", "hint": "Barks"}]"#, 0);
    let input = "x\nq\nz\nw\nv\nk\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    // Input ends after the last guess; EOF is treated as exit
    game_loop(&mut session, &mut interface).unwrap();

    let state = session.current_display_state().unwrap();
    assert_eq!(session.status(), RoundStatus::Lost);
    assert_eq!(state.remaining_attempts, 0);
    assert_eq!(
        state.outcome,
        Some(RoundOutcome::Lost {
            word: "DOG".to_string()
        })
    );
}

#[test]
fn test_cli_guesses_after_round_end_do_not_change_state() {
    let mut session = session_from_json(r#"[{"word": "ox", "hint": ""}]"#, 0);
    let input = "o\nx\na\nb\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut session, &mut interface).unwrap();

    let state = session.current_display_state().unwrap();
    assert_eq!(session.status(), RoundStatus::Won);
    assert_eq!(state.guessed_letters, ['O', 'X'].into_iter().collect());
}

#[test]
fn test_cli_invalid_input_is_ignored() {
    let mut session = session_from_json(r#"[{"word": "cat", "hint": ""}]"#, 0);
    let input = "7\nab\n\n!\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut session, &mut interface).unwrap();

    let state = session.current_display_state().unwrap();
    assert_eq!(session.status(), RoundStatus::InProgress);
    assert!(state.guessed_letters.is_empty());
    assert_eq!(state.remaining_attempts, MAX_ATTEMPTS);
}

#[test]
fn test_cli_multiple_rounds() {
    let mut session = session_from_json(r#"[{"word": "ox", "hint": ""}]"#, 0);
    // Win, start again, make one wrong guess
    let input = "o\nx\nnew\nz\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut session, &mut interface).unwrap();

    let state = session.current_display_state().unwrap();
    assert_eq!(session.status(), RoundStatus::InProgress);
    assert_eq!(state.display_word, "_ _");
    assert_eq!(state.guessed_letters, ['Z'].into_iter().collect());
    assert_eq!(state.remaining_attempts, MAX_ATTEMPTS - 1);
}

#[test]
fn test_game_loop_with_empty_pool() {
    let mut session: GameSession<FixedPicker> = GameSession::new(Vec::new(), FixedPicker(0));
    let mut interface = CliInterface::new(Cursor::new("a\n"));

    assert_eq!(
        game_loop(&mut session, &mut interface),
        Err(GameError::EmptyWordPool)
    );
    assert_eq!(session.status(), RoundStatus::NotStarted);
    assert!(session.current_display_state().is_none());
}

#[test]
fn test_win_priority_on_final_attempt() {
    let mut session = session_from_json(r#"[{"word": "cat", "hint": ""}]"#, 0);
    session.start_new_game().unwrap();
    for letter in ['X', 'Q', 'Z', 'W', 'V', 'C', 'A'] {
        session.submit_guess(letter).unwrap();
    }
    assert_eq!(session.player().remaining_attempts(), 1);

    let report = session.submit_guess('T').unwrap();
    assert_eq!(report.outcome, GuessOutcome::Hit { count: 1 });
    assert_eq!(report.status, RoundStatus::Won);
    assert_eq!(session.player().remaining_attempts(), 1);
}

#[test]
fn test_attempts_monotonic_over_round() {
    let mut session = session_from_json(r#"[{"word": "hangman", "hint": ""}]"#, 0);
    session.start_new_game().unwrap();
    let mut previous = MAX_ATTEMPTS;
    for letter in "QHZAXNBGCMDE".chars() {
        if session.status() != RoundStatus::InProgress {
            break;
        }
        session.submit_guess(letter).unwrap();
        let remaining = session.player().remaining_attempts();
        assert!(remaining <= previous);
        previous = remaining;
    }
    assert_eq!(session.status(), RoundStatus::Won);
}

#[test]
fn test_has_won_matches_distinct_letters() {
    // Winning requires exactly the distinct letters of the word
    let word = Word::new("mississippi", "").unwrap();
    let distinct: BTreeSet<char> = word.text().chars().collect();
    let mut player = Player::new();
    for letter in &distinct {
        assert!(!player.has_won(word.text()));
        player.guess_letter(*letter, word.text());
    }
    assert!(player.has_won(word.text()));
    assert_eq!(player.remaining_attempts(), MAX_ATTEMPTS);
}

#[test]
fn test_seeded_sessions_pick_same_words() {
    let words = load_words_from_str(wordlist::EMBEDDED_WORDLIST).unwrap();
    let mut first = GameSession::new(words.clone(), RandomPicker::seeded(2024));
    let mut second = GameSession::new(words, RandomPicker::seeded(2024));
    for _ in 0..10 {
        let a = first.start_new_game().unwrap().text().to_string();
        let b = second.start_new_game().unwrap().text().to_string();
        assert_eq!(a, b);
    }
}

#[test]
fn test_custom_wordlist_file_to_game() {
    // Load a custom word list file -> play a game with it
    let path = std::env::temp_dir().join("hangman_integration_wordlist.json");
    std::fs::write(
        &path,
        r#"[{"word": "apple", "hint": "Keeps the doctor away"}, {"word": "two words", "hint": "skipped"}]"#,
    )
    .unwrap();

    let words = load_words_from_file(&path).unwrap();
    assert_eq!(words.len(), 1);

    let mut session = GameSession::new(words, RandomPicker::seeded(1));
    let input = "a\np\nl\ne\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    game_loop(&mut session, &mut interface).unwrap();
    assert_eq!(session.status(), RoundStatus::Won);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_display_state_snapshot_json() {
    let mut session = session_from_json(r#"[{"word": "cat", "hint": "Meows"}]"#, 0);
    session.start_new_game().unwrap();
    session.submit_guess('a').unwrap();

    let json = serde_json::to_string(&session.current_display_state().unwrap()).unwrap();
    assert!(json.contains(r#""display_word":"_ A _""#));
    assert!(json.contains(r#""hint":"Meows""#));
    assert!(json.contains(r#""guessed_letters":["A"]"#));
    assert!(json.contains(r#""outcome":null"#));
}
