//! Deck and card model types.

use serde::{Deserialize, Serialize};

use crate::view_state::CardIndex;

/// One card in the deck: an opaque visual item with a title and body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    title: String,
    body: String,
}

impl Card {
    /// Create a card.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Card title, shown in the card header.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Card body text.
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Ordered card collection. The count is fixed after construction; the
/// carousel only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create a deck from an ordered card list.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `index`, if in range.
    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.get())
    }

    /// Iterate cards in order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Built-in demo deck used when no deck file is supplied.
    pub fn demo() -> Self {
        Self::new(vec![
            Card::new("Welcome", "Drag the strip with the mouse, or use the arrow keys."),
            Card::new("Dots", "Click a dot below to jump straight to a card."),
            Card::new("Auto-advance", "The deck cycles on its own while you are idle."),
            Card::new("Swipe", "A short drag snaps back; a quarter-stride drag commits."),
            Card::new("Quit", "Press q to leave."),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_in_range_returns_card() {
        let deck = Deck::new(vec![Card::new("a", "1"), Card::new("b", "2")]);
        assert_eq!(deck.get(CardIndex::new(1)).unwrap().title(), "b");
    }

    #[test]
    fn get_out_of_range_returns_none() {
        let deck = Deck::new(vec![Card::new("a", "1")]);
        assert!(deck.get(CardIndex::new(1)).is_none());
    }

    #[test]
    fn demo_deck_is_non_empty() {
        assert!(!Deck::demo().is_empty());
    }

    #[test]
    fn card_roundtrips_through_json() {
        let card = Card::new("Title", "Body text");
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
