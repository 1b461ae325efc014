//! Ring indicator that trails the active dot.
//!
//! Moves are rate-limited: after an accepted move the ring is busy for a
//! short cooldown and further move requests are rejected until it expires.

use std::time::{Duration, Instant};

use crate::view_state::CardIndex;

/// Cooldown after an accepted ring move.
pub const RING_COOLDOWN: Duration = Duration::from_millis(400);

/// Position and busy state of the ring indicator.
#[derive(Debug, Clone)]
pub struct RingState {
    position: Option<CardIndex>,
    busy_until: Option<Instant>,
    cooldown: Duration,
}

impl RingState {
    /// Create a ring with no position and the given move cooldown.
    pub fn new(cooldown: Duration) -> Self {
        Self {
            position: None,
            busy_until: None,
            cooldown,
        }
    }

    /// Dot the ring currently sits under.
    pub fn position(&self) -> Option<CardIndex> {
        self.position
    }

    /// Whether a move is still in flight at `now`.
    pub fn is_busy(&self, now: Instant) -> bool {
        self.busy_until.is_some_and(|until| now < until)
    }

    /// Request a move under `dot`. Rejected while busy; an accepted move
    /// starts a new cooldown. Moving to the current position is accepted
    /// and still consumes the cooldown, matching the observed control.
    pub fn move_to(&mut self, dot: CardIndex, now: Instant) -> bool {
        if self.is_busy(now) {
            return false;
        }
        self.position = Some(dot);
        self.busy_until = Some(now + self.cooldown);
        true
    }
}

impl Default for RingState {
    fn default() -> Self {
        Self::new(RING_COOLDOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unpositioned_and_idle() {
        let ring = RingState::default();
        assert_eq!(ring.position(), None);
        assert!(!ring.is_busy(Instant::now()));
    }

    #[test]
    fn accepted_move_updates_position() {
        let mut ring = RingState::default();
        let now = Instant::now();
        assert!(ring.move_to(CardIndex::new(2), now));
        assert_eq!(ring.position(), Some(CardIndex::new(2)));
    }

    #[test]
    fn move_during_cooldown_is_rejected() {
        let mut ring = RingState::default();
        let now = Instant::now();
        ring.move_to(CardIndex::new(1), now);
        assert!(!ring.move_to(CardIndex::new(3), now + Duration::from_millis(200)));
        assert_eq!(ring.position(), Some(CardIndex::new(1)));
    }

    #[test]
    fn move_after_cooldown_is_accepted() {
        let mut ring = RingState::default();
        let now = Instant::now();
        ring.move_to(CardIndex::new(1), now);
        assert!(ring.move_to(CardIndex::new(3), now + RING_COOLDOWN));
        assert_eq!(ring.position(), Some(CardIndex::new(3)));
    }
}
