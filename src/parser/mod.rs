//! Deck file parsing.
//!
//! Deck files are JSON lines: one card object per line, e.g.
//! `{"title": "Welcome", "body": "..."}`. Blank lines are skipped by the
//! caller; malformed lines produce a [`ParseError`] carrying the 1-based
//! line number and are skipped by policy.

use crate::model::{Card, ParseError};

/// Parse one deck line into a [`Card`].
pub fn parse_card(line: &str, line_number: usize) -> Result<Card, ParseError> {
    serde_json::from_str(line).map_err(|err| ParseError::InvalidCard {
        line: line_number,
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_card_line() {
        let card = parse_card(r#"{"title":"Welcome","body":"Hello"}"#, 1).unwrap();
        assert_eq!(card.title(), "Welcome");
        assert_eq!(card.body(), "Hello");
    }

    #[test]
    fn malformed_json_reports_line_number() {
        let err = parse_card(r#"{"title":"Welcome""#, 7).unwrap_err();
        assert_eq!(err.line(), 7);
    }

    #[test]
    fn missing_field_is_an_error() {
        assert!(parse_card(r#"{"title":"Welcome"}"#, 1).is_err());
    }

    #[test]
    fn extra_fields_are_rejected_gracefully_or_ignored() {
        // serde's default tolerates unknown fields; the card still loads.
        let card = parse_card(r#"{"title":"t","body":"b","image":"x.png"}"#, 1).unwrap();
        assert_eq!(card.title(), "t");
    }
}
