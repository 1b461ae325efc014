//! Carousel composition: one owned state object wiring the gesture tracker,
//! index controller, auto-advance timer, and render sync together.
//!
//! The shell feeds pointer/key/resize/tick events in and reads a
//! [`RenderFrame`] out once per display refresh. All cross-component effects
//! live here: suspending auto-advance during interaction, dropping
//! transitions around drags, and routing commits to the controller.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::view_state::{CardIndex, RenderFrame, RenderSync, SurfaceMetrics};

use super::autoplay::{AutoAdvance, AUTO_ADVANCE_INTERVAL};
use super::gesture::{GestureCommit, GestureConfig, GestureEvent, GestureTracker, PointerButton};
use super::index::{IndexController, StepDirection};
use super::ring::RingState;

/// Tunables for one carousel instance.
#[derive(Debug, Clone)]
pub struct CarouselConfig {
    /// Gesture thresholds.
    pub gesture: GestureConfig,
    /// Auto-advance cadence.
    pub interval: Duration,
    /// Whether auto-advance starts enabled.
    pub autoplay: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            interval: AUTO_ADVANCE_INTERVAL,
            autoplay: true,
        }
    }
}

/// Owned carousel state. No ambient globals; the shell holds exactly one of
/// these per strip and routes events to it.
#[derive(Debug)]
pub struct CarouselState {
    controller: IndexController,
    tracker: GestureTracker,
    autoplay: AutoAdvance,
    ring: RingState,
    render: RenderSync,
    dirty: bool,
}

impl CarouselState {
    /// Create carousel state over `count` cards.
    pub fn new(count: usize, config: CarouselConfig, now: Instant) -> Self {
        Self {
            controller: IndexController::new(count),
            tracker: GestureTracker::new(config.gesture),
            autoplay: AutoAdvance::new(config.interval, config.autoplay, now),
            ring: RingState::default(),
            render: RenderSync::new(),
            dirty: true,
        }
    }

    /// Number of cards.
    pub fn count(&self) -> usize {
        self.controller.count()
    }

    /// Current card, if the deck is non-empty.
    pub fn current(&self) -> Option<CardIndex> {
        self.controller.current()
    }

    /// Whether a horizontal drag currently owns the strip.
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Whether auto-advance is enabled.
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay.is_enabled()
    }

    /// Recompute stride from fresh surface metrics and re-render the current
    /// card's resting offset. Invoked on resize and initial layout.
    pub fn sync_layout(&mut self, metrics: Option<&SurfaceMetrics>, now: Instant) {
        self.render.recompute_stride(metrics);
        if let Some(current) = self.controller.current() {
            if let Some(target) = self.render.target_for(current) {
                // Layout changes snap; only index changes animate.
                self.render.render_offset(target, false, now);
            }
            if self.ring.position().is_none() {
                self.ring.move_to(current, now);
            }
        }
        self.dirty = true;
    }

    /// Pointer pressed on the strip.
    pub fn pointer_down(&mut self, pos: (f64, f64), button: PointerButton) {
        let ev = self.tracker.begin(
            pos,
            button,
            self.render.committed_offset(),
            self.render.stride(),
            self.controller.count(),
        );
        if ev == Some(GestureEvent::Started) {
            // Interaction owns the strip: no pending auto-advance, no
            // transition animation until the session resolves.
            self.autoplay.suspend();
            self.render.set_live(self.render.committed_offset());
            self.dirty = true;
        }
    }

    /// Pointer moved while pressed.
    pub fn pointer_move(&mut self, pos: (f64, f64), now: Instant) {
        match self.tracker.update(pos) {
            Some(GestureEvent::Live(offset)) => {
                self.render.set_live(offset);
                self.dirty = true;
            }
            Some(GestureEvent::Aborted) => {
                debug!("gesture locked vertical; releasing strip");
                self.render.clear_live();
                self.autoplay.resume(now);
                self.dirty = true;
            }
            _ => {}
        }
    }

    /// Pointer released.
    pub fn pointer_up(&mut self, now: Instant) {
        self.finish_session(now);
    }

    /// Pointer left the tracked surface mid-session; behaves as a release.
    pub fn pointer_leave(&mut self, now: Instant) {
        self.finish_session(now);
    }

    fn finish_session(&mut self, now: Instant) {
        let GestureEvent::Ended(commit) = self.tracker.end() else {
            return;
        };
        match commit {
            GestureCommit::NoDrag => {
                self.render.clear_live();
            }
            GestureCommit::Advance | GestureCommit::Retreat | GestureCommit::Stay => {
                let target = match commit {
                    GestureCommit::Advance => self.controller.commit_step(StepDirection::Forward),
                    GestureCommit::Retreat => self.controller.commit_step(StepDirection::Backward),
                    _ => self.controller.current(),
                };
                debug!(?commit, index = ?target, "drag session committed");
                self.animate_to(target, now);
            }
        }
        self.autoplay.resume(now);
        self.dirty = true;
    }

    /// Arrow control: wrapping step. Resets the auto-advance period.
    pub fn arrow(&mut self, direction: StepDirection, now: Instant) {
        self.autoplay.suspend();
        let index = self.controller.step(direction);
        self.animate_to(index, now);
        self.autoplay.resume(now);
        self.dirty = true;
    }

    /// Dot control: clamped jump to `index`. Resets the auto-advance period.
    pub fn dot(&mut self, index: CardIndex, now: Instant) {
        self.autoplay.suspend();
        let index = self.controller.go_to(index);
        self.animate_to(index, now);
        self.autoplay.resume(now);
        self.dirty = true;
    }

    /// Toggle auto-advance on or off.
    pub fn toggle_autoplay(&mut self, now: Instant) {
        let enabled = !self.autoplay.is_enabled();
        self.autoplay.set_enabled(enabled, now);
        debug!(enabled, "autoplay toggled");
        self.dirty = true;
    }

    /// Advance on the auto-advance cadence. Returns `true` when it fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.autoplay.poll(now) {
            return false;
        }
        let index = self.controller.step(StepDirection::Forward);
        debug!(index = ?index, "auto-advance");
        self.animate_to(index, now);
        self.dirty = true;
        true
    }

    fn animate_to(&mut self, index: Option<CardIndex>, now: Instant) {
        let Some(index) = index else {
            return;
        };
        if let Some(target) = self.render.target_for(index) {
            self.render.render_offset(target, true, now);
        } else {
            // No stride yet: nothing to move, but drop any live override.
            self.render.clear_live();
        }
        self.ring.move_to(index, now);
    }

    /// Snapshot everything the renderer needs for one frame.
    pub fn frame(&self, now: Instant) -> RenderFrame {
        RenderFrame {
            offset: self.render.visible_offset(now),
            dragging: self.tracker.is_dragging(),
            active: self.controller.current(),
            ring: self.ring.position(),
        }
    }

    /// Whether the shell should render at frame cadence right now
    /// (live drag sampling or an eased transition in flight).
    pub fn needs_frame(&self, now: Instant) -> bool {
        self.tracker.is_dragging() || self.render.is_animating(now)
    }

    /// Deadline of the pending auto-advance, for poll-timeout selection.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.autoplay.next_deadline()
    }

    /// Consume the dirty flag; `true` means state changed since last take.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "carousel_tests.rs"]
mod tests;
