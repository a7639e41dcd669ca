//! Word-list loading for the CLI: one word per line, with blank lines and
//! `#` comments ignored. Words are kept raw here; the generator normalizes
//! them (uppercase, diacritics stripped) as part of its own contract.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Failure to read a word-list source.
#[derive(Debug)]
pub enum WordListError {
    Io(io::Error),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordListError::Io(err) => write!(f, "could not read word list: {err}"),
        }
    }
}

impl Error for WordListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WordListError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for WordListError {
    fn from(err: io::Error) -> WordListError {
        WordListError::Io(err)
    }
}

/// Parse word-list contents: one word per line, trimmed; blank lines and
/// lines starting with `#` are skipped.
#[must_use]
pub fn parse_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Load and parse a word-list file.
pub fn load_word_list(path: &Path) -> Result<Vec<String>, WordListError> {
    Ok(parse_word_list(&fs::read_to_string(path)?))
}
