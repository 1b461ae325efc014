//! Domain model: deck contents, semantic key actions, and the error taxonomy.

pub mod card;
pub mod error;
pub mod key_action;

pub use card::{Card, Deck};
pub use error::{AppError, DeckError, ParseError};
pub use key_action::KeyAction;
