//! Deck input sources: file path, piped stdin, or the built-in demo deck.

use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;

use tracing::warn;

use crate::integration;
use crate::model::{Deck, DeckError};

/// Where the deck comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
    /// A deck file supplied on the command line.
    File(PathBuf),
    /// Lines piped on stdin.
    Stdin,
    /// No source supplied and stdin is a TTY: use the built-in demo deck.
    Demo,
}

/// Decide where the deck comes from.
///
/// A path argument always wins. Without one, piped stdin is read;
/// an interactive terminal falls back to the demo deck.
pub fn detect_deck_source(path: Option<PathBuf>) -> DeckSource {
    match path {
        Some(path) => DeckSource::File(path),
        None if std::io::stdin().is_terminal() => DeckSource::Demo,
        None => DeckSource::Stdin,
    }
}

/// Load the deck from the detected source.
///
/// Malformed lines are non-fatal: each is logged with its line number and
/// skipped. A missing deck file is fatal.
pub fn load_deck(source: &DeckSource) -> Result<Deck, DeckError> {
    let lines = match source {
        DeckSource::Demo => return Ok(Deck::demo()),
        DeckSource::File(path) => {
            if !path.exists() {
                return Err(DeckError::FileNotFound { path: path.clone() });
            }
            let content = std::fs::read_to_string(path)?;
            content.lines().map(str::to_string).collect()
        }
        DeckSource::Stdin => {
            let stdin = std::io::stdin();
            let mut lines = Vec::new();
            for line in stdin.lock().lines() {
                lines.push(line?);
            }
            lines
        }
    };

    let (cards, errors) = integration::process_lines(lines, 1);
    for err in &errors {
        warn!("deck parse error: {err}");
    }
    Ok(Deck::new(cards))
}
