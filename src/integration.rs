//! Pure deck-assembly functions for the shell.
//!
//! Testable without I/O: raw lines in, cards and per-line errors out.

use crate::model::{Card, ParseError};
use crate::parser;

/// Process raw deck lines into cards.
///
/// Blank lines are skipped without consuming a card slot but still count
/// towards line numbering. Malformed lines are collected as errors and do
/// not abort processing.
pub fn process_lines(
    lines: Vec<String>,
    starting_line_number: usize,
) -> (Vec<Card>, Vec<ParseError>) {
    let mut cards = Vec::new();
    let mut errors = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_number = starting_line_number + index;
        match parser::parse_card(&line, line_number) {
            Ok(card) => cards.push(card),
            Err(err) => errors.push(err),
        }
    }

    (cards, errors)
}
