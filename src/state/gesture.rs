//! Drag gesture recognition: transforms raw pointer input into carousel intent.
//!
//! [`GestureTracker`] is a stateful processor that disambiguates pointer
//! movement into a horizontal strip drag or a vertical scroll handoff, and
//! tracks the live translation offset while a drag is in progress.
//!
//! # State Machine
//!
//! One session runs per pointer-down → pointer-up interaction:
//!
//! - **Idle**: no session. Only a primary-button press starts one.
//! - **Undecided**: pointer is down but neither axis has won yet. Movement
//!   below the lock threshold is ignored.
//! - **Horizontal**: the drag owns the strip; every move updates the live
//!   offset, soft-clamped to the scrollable range plus overscroll slack.
//!
//! A vertical lock aborts the session immediately so the surrounding surface
//! can scroll; the tracker returns to Idle without ever emitting an offset.
//!
//! # Invariants
//!
//! 1. Within one session: `begin` → zero or more `update` → exactly one
//!    `end`. A new `begin` is ignored while a session is active.
//! 2. An aborted (vertical) session never produces a live offset or a commit.
//! 3. The committed index delta is at most one card per session, regardless
//!    of overscroll magnitude.

use crate::view_state::{OffsetPx, Stride};

/// Thresholds for gesture recognition.
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Minimum dominant-axis displacement before the axis locks (default: 10).
    pub axis_lock_threshold: f64,
    /// Fraction of the stride a drag must travel to commit a step
    /// (default: 0.25, strict inequality).
    pub commit_ratio: f64,
    /// Slack beyond the resting range the live offset may reach (default: 100).
    pub overscroll: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            axis_lock_threshold: 10.0,
            commit_ratio: 0.25,
            overscroll: 100.0,
        }
    }
}

/// Pointer button that initiated an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// The primary button; the only one that starts a session.
    Primary,
    /// Secondary (context-menu) button.
    Secondary,
    /// Middle button.
    Middle,
}

/// Phase of the drag state machine, for observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No active session.
    Idle,
    /// Session active, axis not yet decided.
    Undecided,
    /// Session active and locked to the horizontal axis.
    Horizontal,
}

/// Semantic output of feeding pointer input to the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A session began: suspend auto-advance and disable transitions.
    Started,
    /// The session locked vertical and ended: resume auto-advance,
    /// re-enable transitions, let the surface scroll.
    Aborted,
    /// New live offset while dragging horizontally. The shell samples the
    /// latest value once per display refresh, not once per input event.
    Live(OffsetPx),
    /// The session ended with the given commit outcome.
    Ended(GestureCommit),
}

/// Outcome of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureCommit {
    /// Displacement passed the commit threshold towards later cards.
    Advance,
    /// Displacement passed the commit threshold towards earlier cards.
    Retreat,
    /// Horizontal drag that fell short of the threshold; snap back.
    Stay,
    /// The session never locked horizontal; resume auto-advance only.
    NoDrag,
}

#[derive(Debug, Clone)]
struct Session {
    origin: (f64, f64),
    horizontal: bool,
    /// Committed strip offset when the session began; live deltas apply
    /// against this, and the commit displacement is measured from it.
    prior: OffsetPx,
    stride: Stride,
    min_offset: f64,
    max_offset: f64,
    live: OffsetPx,
}

/// Stateful drag tracker. Bounds and stride are captured at `begin`, so a
/// resize mid-drag uses the stale stride until the next session (accepted).
#[derive(Debug)]
pub struct GestureTracker {
    config: GestureConfig,
    session: Option<Session>,
}

impl GestureTracker {
    /// Create a tracker with the given thresholds.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Start a session at `pos`.
    ///
    /// Returns `GestureEvent::Started` when a session begins. No session
    /// starts for non-primary buttons, while another session is active, or
    /// when there is nothing to drag (empty deck or unmeasured stride).
    pub fn begin(
        &mut self,
        pos: (f64, f64),
        button: PointerButton,
        prior: OffsetPx,
        stride: Option<Stride>,
        count: usize,
    ) -> Option<GestureEvent> {
        if button != PointerButton::Primary || self.session.is_some() {
            return None;
        }
        let stride = stride?;
        if count == 0 {
            return None;
        }
        let scrollable = (count.saturating_sub(1)) as f64 * stride.get();
        self.session = Some(Session {
            origin: pos,
            horizontal: false,
            prior,
            stride,
            min_offset: -scrollable - self.config.overscroll,
            max_offset: self.config.overscroll,
            live: prior,
        });
        Some(GestureEvent::Started)
    }

    /// Feed a pointer movement into the active session.
    pub fn update(&mut self, pos: (f64, f64)) -> Option<GestureEvent> {
        let session = self.session.as_mut()?;
        let dx = pos.0 - session.origin.0;
        let dy = pos.1 - session.origin.1;

        if !session.horizontal {
            let threshold = self.config.axis_lock_threshold;
            if dx.abs() > threshold && dx.abs() > dy.abs() {
                session.horizontal = true;
            } else if dy.abs() > threshold && dy.abs() > dx.abs() {
                self.session = None;
                return Some(GestureEvent::Aborted);
            } else {
                return None;
            }
        }

        let session = self.session.as_mut()?;
        session.live = OffsetPx::new(session.prior.get() + dx)
            .clamp(session.min_offset, session.max_offset);
        Some(GestureEvent::Live(session.live))
    }

    /// End the session (pointer up, or pointer leaving the tracked surface).
    ///
    /// The commit is decided by the displacement against the stride captured
    /// at `begin`: strictly beyond `stride * commit_ratio` in either
    /// direction commits a single step; anything else stays.
    pub fn end(&mut self) -> GestureEvent {
        let Some(session) = self.session.take() else {
            return GestureEvent::Ended(GestureCommit::NoDrag);
        };
        if !session.horizontal {
            return GestureEvent::Ended(GestureCommit::NoDrag);
        }
        let moved = session.live.get() - session.prior.get();
        let threshold = session.stride.get() * self.config.commit_ratio;
        let commit = if moved < -threshold {
            GestureCommit::Advance
        } else if moved > threshold {
            GestureCommit::Retreat
        } else {
            GestureCommit::Stay
        };
        GestureEvent::Ended(commit)
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> GesturePhase {
        match &self.session {
            None => GesturePhase::Idle,
            Some(s) if s.horizontal => GesturePhase::Horizontal,
            Some(_) => GesturePhase::Undecided,
        }
    }

    /// Whether a horizontal drag currently owns the strip offset.
    pub fn is_dragging(&self) -> bool {
        self.phase() == GesturePhase::Horizontal
    }

    /// Latest live offset, present only while dragging horizontally.
    pub fn live_offset(&self) -> Option<OffsetPx> {
        self.session
            .as_ref()
            .filter(|s| s.horizontal)
            .map(|s| s.live)
    }

    /// Thresholds in use.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }
}
