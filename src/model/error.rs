//! Error types for the deckview application.
//!
//! A small `thiserror` hierarchy composing via `From` and `?`:
//!
//! - [`AppError`] - top-level error wrapping all domain-specific failures
//!   - [`DeckError`] - deck file/stdin reading failures (fatal)
//!   - [`ParseError`] - per-line deck parsing failures (non-fatal)
//!   - `std::io::Error` - terminal failures (fatal)
//!
//! Parsing errors are non-fatal by policy: a malformed deck line is logged
//! and skipped, and viewing continues with the remaining cards. Input and
//! terminal errors propagate to the top-level handler.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the deck from file or stdin. Fatal: there is nothing
    /// to show without a deck source.
    #[error("Failed to read deck: {0}")]
    DeckRead(#[from] DeckError),

    /// Failed to parse a deck line. Non-fatal at the load site (lines are
    /// skipped); wrapped here only when surfaced as a terminal diagnostic.
    #[error("Failed to parse deck entry: {0}")]
    Parse(#[from] ParseError),

    /// Terminal or TUI rendering error from the crossterm/ratatui layer.
    /// Fatal: without a working terminal the UI cannot function.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading the deck from a file or stdin.
///
/// Failure modes are kept distinct (missing file vs generic I/O) so the
/// shell can produce targeted messages.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The deck file does not exist at the given path.
    #[error("Deck file not found: {path}")]
    FileNotFound {
        /// The filesystem path that was attempted.
        path: PathBuf,
    },

    /// Generic I/O failure reading the deck source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing deck lines.
///
/// Non-fatal: malformed lines are logged with their line number and
/// skipped so the deck loads with partial data.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A deck line is not a valid card object.
    #[error("Invalid card at line {line}: {message}")]
    InvalidCard {
        /// 1-based line number in the deck file.
        line: usize,
        /// The JSON parser error message.
        message: String,
    },
}

impl ParseError {
    /// Line number the error occurred on.
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidCard { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn deck_error_file_not_found_display() {
        let err = DeckError::FileNotFound {
            path: PathBuf::from("/tmp/missing.deck"),
        };
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("/tmp/missing.deck"));
    }

    #[test]
    fn parse_error_preserves_line_number() {
        let err = ParseError::InvalidCard {
            line: 42,
            message: "unexpected character '}'".to_string(),
        };
        assert_eq!(err.line(), 42);
        assert!(err.to_string().contains("line 42"));
    }

    #[test]
    fn app_error_from_deck_error() {
        let err: AppError = DeckError::FileNotFound {
            path: PathBuf::from("x.deck"),
        }
        .into();
        assert!(err.to_string().contains("Failed to read deck"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let err: AppError = io_err.into();
        assert!(err.to_string().contains("Terminal error"));
        assert!(err.to_string().contains("pipe broken"));
    }

    #[test]
    fn app_error_nested_io_through_deck_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let deck_err: DeckError = io_err.into();
        let err: AppError = deck_err.into();
        assert!(err.to_string().contains("Failed to read deck"));
        assert!(err.to_string().contains("access denied"));
    }
}
