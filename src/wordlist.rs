use crate::error::WordListError;
use crate::word::Word;
use crate::{info_log, warn_log};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDLIST: &str = include_str!("resources/words.json");

const WORDLIST_FILE_NAME: &str = "words.json";

/// One entry of a JSON word list: `{ "word": "...", "hint": "..." }`.
#[derive(Debug, Clone, Deserialize)]
pub struct WordRecord {
    pub word: String,
    #[serde(default)]
    pub hint: String,
}

/// Per-user word list override, `<config_dir>/hangman/words.json`.
#[must_use]
pub fn get_user_wordlist_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hangman").join(WORDLIST_FILE_NAME))
}

/// Convert records into words, skipping entries nobody could win.
pub fn words_from_records(records: Vec<WordRecord>) -> Result<Vec<Word>, WordListError> {
    let mut words = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match Word::new(&record.word, record.hint) {
            Ok(word) => words.push(word),
            Err(e @ (WordListError::EmptyWord | WordListError::UnplayableWord(_))) => {
                warn_log!("Skipping word list entry #{}: {}", index, e);
            }
            Err(e) => return Err(e),
        }
    }
    if words.is_empty() {
        return Err(WordListError::NoWords);
    }
    Ok(words)
}

pub fn load_words_from_str(data: &str) -> Result<Vec<Word>, WordListError> {
    let records: Vec<WordRecord> = serde_json::from_str(data)?;
    words_from_records(records)
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let file = File::open(path)?;
    let records: Vec<WordRecord> = serde_json::from_reader(BufReader::new(file))?;
    words_from_records(records)
}

/// Load the word list for this run.
///
/// An explicit path wins; otherwise the per-user file is used if present,
/// falling back to the embedded list.
pub fn load_words(explicit: Option<&Path>) -> Result<Vec<Word>, WordListError> {
    load_words_with_user_path(explicit, get_user_wordlist_path())
}

/// [`load_words`] with the per-user location supplied by the caller.
pub fn load_words_with_user_path(
    explicit: Option<&Path>,
    user_path: Option<PathBuf>,
) -> Result<Vec<Word>, WordListError> {
    if let Some(path) = explicit {
        info_log!("Loading word list from {}", path.display());
        return load_words_from_file(path);
    }
    if let Some(path) = user_path
        && path.is_file()
    {
        info_log!("Loading word list from {}", path.display());
        return load_words_from_file(path);
    }
    info_log!("Using embedded word list");
    load_words_from_str(EMBEDDED_WORDLIST)
}
