//! Semantic actions produced by key input.

use crate::view_state::CardIndex;

/// What a key press means to the application, decoupled from the physical
/// key through the configurable [`KeyBindings`](crate::config::KeyBindings)
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the application.
    Quit,
    /// Arrow control: wrapping step towards the last card.
    NextCard,
    /// Arrow control: wrapping step towards the first card.
    PrevCard,
    /// Enable or disable auto-advance.
    ToggleAutoplay,
    /// Jump directly to a card (digit keys).
    GoToCard(CardIndex),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_to_card_carries_index() {
        let action = KeyAction::GoToCard(CardIndex::new(3));
        assert_eq!(action, KeyAction::GoToCard(CardIndex::new(3)));
        assert_ne!(action, KeyAction::GoToCard(CardIndex::new(2)));
    }
}
