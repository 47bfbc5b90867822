use hangman::cli::{CliInterface, parse_cli};
use hangman::logging::{default_log_path, init_logging};
use hangman::session::{GameSession, RandomPicker};
use hangman::tui::TuiInterface;
use hangman::wordlist::load_words;
use hangman::{game_loop, info_log};
use std::io;

fn main() {
    let cli = parse_cli();

    if let Some(path) = cli.log_file.clone().or_else(default_log_path)
        && let Err(e) = init_logging(&path)
    {
        eprintln!("Logging disabled, could not open '{}': {e}", path.display());
    }

    let words = match load_words(cli.wordlist_path.as_deref()) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load word list: {e}");
            return;
        }
    };
    info_log!("Loaded {} words", words.len());

    let picker = match cli.seed {
        Some(seed) => RandomPicker::seeded(seed),
        None => RandomPicker::from_entropy(),
    };
    let mut session = GameSession::new(words, picker);

    let result = if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut session, &mut interface)
    } else {
        match TuiInterface::new() {
            Ok(mut interface) => game_loop(&mut session, &mut interface),
            Err(e) => {
                eprintln!("Failed to start terminal UI: {e}");
                return;
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{e}");
    }
}
