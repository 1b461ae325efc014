//! Current-card index ownership.
//!
//! The index is mutated only through the explicit operations here, never
//! directly. Two stepping modes exist by design and must not be merged:
//! arrow controls and auto-advance use wrapping [`IndexController::step`],
//! while drag commits use clamped [`IndexController::commit_step`].

use crate::view_state::CardIndex;

/// Direction of a single-card step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Towards the last card.
    Forward,
    /// Towards the first card.
    Backward,
}

/// Owns the current card index and keeps it inside `[0, count - 1]`.
///
/// All operations are no-ops on an empty deck.
#[derive(Debug, Clone)]
pub struct IndexController {
    current: CardIndex,
    count: usize,
}

impl IndexController {
    /// Create a controller over `count` cards, starting at the first.
    pub fn new(count: usize) -> Self {
        Self {
            current: CardIndex::new(0),
            count,
        }
    }

    /// Number of cards under control.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The current card, or `None` for an empty deck.
    pub fn current(&self) -> Option<CardIndex> {
        if self.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    /// Index of the last card, or `None` for an empty deck.
    pub fn last(&self) -> Option<CardIndex> {
        self.count.checked_sub(1).map(CardIndex::new)
    }

    /// Jump to `index`, clamped to the valid domain.
    /// Returns the index actually stored.
    pub fn go_to(&mut self, index: CardIndex) -> Option<CardIndex> {
        let last = self.last()?;
        self.current = index.min(last);
        Some(self.current)
    }

    /// Step one card with wraparound: past the last wraps to the first,
    /// before the first wraps to the last. Used by arrow controls and
    /// auto-advance.
    pub fn step(&mut self, direction: StepDirection) -> Option<CardIndex> {
        let last = self.last()?;
        self.current = match direction {
            StepDirection::Forward => {
                if self.current >= last {
                    CardIndex::new(0)
                } else {
                    self.current.next()
                }
            }
            StepDirection::Backward => {
                if self.current.get() == 0 {
                    last
                } else {
                    self.current.prev()
                }
            }
        };
        Some(self.current)
    }

    /// Step one card with clamping, no wrap. Used by drag commits.
    pub fn commit_step(&mut self, direction: StepDirection) -> Option<CardIndex> {
        let last = self.last()?;
        self.current = match direction {
            StepDirection::Forward => self.current.next().min(last),
            StepDirection::Backward => self.current.prev(),
        };
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_card() {
        let ctrl = IndexController::new(5);
        assert_eq!(ctrl.current(), Some(CardIndex::new(0)));
    }

    #[test]
    fn empty_deck_has_no_current() {
        let ctrl = IndexController::new(0);
        assert_eq!(ctrl.current(), None);
        assert_eq!(ctrl.last(), None);
    }

    mod go_to {
        use super::*;

        #[test]
        fn stores_valid_index() {
            let mut ctrl = IndexController::new(5);
            assert_eq!(ctrl.go_to(CardIndex::new(3)), Some(CardIndex::new(3)));
            assert_eq!(ctrl.current(), Some(CardIndex::new(3)));
        }

        #[test]
        fn clamps_past_end() {
            let mut ctrl = IndexController::new(5);
            assert_eq!(ctrl.go_to(CardIndex::new(99)), Some(CardIndex::new(4)));
        }

        #[test]
        fn noop_on_empty_deck() {
            let mut ctrl = IndexController::new(0);
            assert_eq!(ctrl.go_to(CardIndex::new(0)), None);
        }
    }

    mod step {
        use super::*;

        #[test]
        fn forward_wraps_at_last() {
            let mut ctrl = IndexController::new(4);
            ctrl.go_to(CardIndex::new(3));
            assert_eq!(ctrl.step(StepDirection::Forward), Some(CardIndex::new(0)));
        }

        #[test]
        fn backward_wraps_at_first() {
            let mut ctrl = IndexController::new(4);
            assert_eq!(ctrl.step(StepDirection::Backward), Some(CardIndex::new(3)));
        }

        #[test]
        fn forward_advances_mid_deck() {
            let mut ctrl = IndexController::new(4);
            ctrl.go_to(CardIndex::new(1));
            assert_eq!(ctrl.step(StepDirection::Forward), Some(CardIndex::new(2)));
        }

        #[test]
        fn single_card_deck_wraps_to_itself() {
            let mut ctrl = IndexController::new(1);
            assert_eq!(ctrl.step(StepDirection::Forward), Some(CardIndex::new(0)));
            assert_eq!(ctrl.step(StepDirection::Backward), Some(CardIndex::new(0)));
        }

        #[test]
        fn noop_on_empty_deck() {
            let mut ctrl = IndexController::new(0);
            assert_eq!(ctrl.step(StepDirection::Forward), None);
        }
    }

    mod commit_step {
        use super::*;

        #[test]
        fn forward_clamps_at_last() {
            let mut ctrl = IndexController::new(4);
            ctrl.go_to(CardIndex::new(3));
            assert_eq!(
                ctrl.commit_step(StepDirection::Forward),
                Some(CardIndex::new(3))
            );
        }

        #[test]
        fn backward_clamps_at_first() {
            let mut ctrl = IndexController::new(4);
            assert_eq!(
                ctrl.commit_step(StepDirection::Backward),
                Some(CardIndex::new(0))
            );
        }

        #[test]
        fn forward_advances_mid_deck() {
            let mut ctrl = IndexController::new(5);
            ctrl.go_to(CardIndex::new(2));
            assert_eq!(
                ctrl.commit_step(StepDirection::Forward),
                Some(CardIndex::new(3))
            );
        }

        #[test]
        fn noop_on_empty_deck() {
            let mut ctrl = IndexController::new(0);
            assert_eq!(ctrl.commit_step(StepDirection::Forward), None);
        }
    }
}
