//! Auto-advance cadence.
//!
//! Fires on a fixed interval while enabled, is suspended for the duration of
//! any manual interaction, and restarts with a fresh full interval when the
//! interaction resolves (never resumed mid-period). All timing flows through
//! injected `Instant`s so tests are deterministic.

use std::time::{Duration, Instant};

/// Interval between automatic advances.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(4000);

/// Deadline-based auto-advance timer.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    enabled: bool,
    deadline: Option<Instant>,
}

impl AutoAdvance {
    /// Create a timer. When `enabled`, the first advance is due one full
    /// interval after `now`.
    pub fn new(interval: Duration, enabled: bool, now: Instant) -> Self {
        let mut timer = Self {
            interval,
            enabled,
            deadline: None,
        };
        if enabled {
            timer.resume(now);
        }
        timer
    }

    /// Whether the timer is currently armed.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Whether auto-advance is enabled at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Cancel the pending advance for the duration of a manual interaction.
    pub fn suspend(&mut self) {
        self.deadline = None;
    }

    /// Restart after an interaction: the next advance is due one full
    /// interval from `now`, regardless of how much of the previous period
    /// had elapsed.
    pub fn resume(&mut self, now: Instant) {
        if self.enabled {
            self.deadline = Some(now + self.interval);
        }
    }

    /// Enable or disable the timer. Enabling arms a fresh interval.
    pub fn set_enabled(&mut self, enabled: bool, now: Instant) {
        self.enabled = enabled;
        if enabled {
            self.resume(now);
        } else {
            self.deadline = None;
        }
    }

    /// Check the deadline. Returns `true` when an advance is due, and
    /// reschedules the next one a full interval after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Next pending deadline, for event-loop timeout selection.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
