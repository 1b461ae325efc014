//! Offset targeting and transition resolution.
//!
//! [`RenderSync`] is the leaf of the carousel core: it owns the geometry
//! cache and turns "show card `i`" / "show this live drag offset" requests
//! into the offset that is actually visible at a given instant. Committed
//! targets ease over a fixed-duration transition; live drag offsets apply
//! immediately with no transition.

use std::time::{Duration, Instant};

use super::geometry::{GeometryCache, SurfaceMetrics};
use super::types::{CardIndex, OffsetPx, Stride};

/// Duration of the eased transition applied to committed offset changes.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(400);

/// Everything the shell needs to draw one frame of the carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    /// Visible horizontal offset of the strip.
    pub offset: OffsetPx,
    /// Whether a drag session currently owns the offset.
    pub dragging: bool,
    /// Index carrying the active-indicator state, if the deck is non-empty.
    pub active: Option<CardIndex>,
    /// Dot the ring indicator currently sits under.
    pub ring: Option<CardIndex>,
}

/// An in-flight eased offset transition.
#[derive(Debug, Clone, Copy)]
struct Transition {
    from: OffsetPx,
    to: OffsetPx,
    start: Instant,
    duration: Duration,
}

impl Transition {
    fn at(&self, now: Instant) -> OffsetPx {
        let elapsed = now.saturating_duration_since(self.start);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = ease_in_out_cubic(t);
        OffsetPx::new(self.from.get() + (self.to.get() - self.from.get()) * eased)
    }

    fn done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Applies computed offsets to the visible strip and keeps the rendered
/// stride cache consistent with layout changes.
#[derive(Debug)]
pub struct RenderSync {
    cache: GeometryCache,
    committed: OffsetPx,
    transition: Option<Transition>,
    live: Option<OffsetPx>,
}

impl Default for RenderSync {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSync {
    /// Create a new render sync with an empty geometry cache and the strip
    /// at rest on the first card.
    pub fn new() -> Self {
        Self {
            cache: GeometryCache::new(),
            committed: OffsetPx::ZERO,
            transition: None,
            live: None,
        }
    }

    /// Recompute the cached stride from fresh surface metrics.
    /// Invoked on layout-affecting events (resize, initial load).
    pub fn recompute_stride(&mut self, metrics: Option<&SurfaceMetrics>) {
        self.cache.recompute(metrics);
    }

    /// Currently cached stride, if any measurement has succeeded.
    pub fn stride(&self) -> Option<Stride> {
        self.cache.stride()
    }

    /// Resting offset for `index`, or `None` when no stride is known.
    pub fn target_for(&self, index: CardIndex) -> Option<OffsetPx> {
        self.cache.stride().map(|s| s.offset_for(index))
    }

    /// Offset of the last committed target. During a drag this is the
    /// prior committed offset that live deltas are applied against.
    pub fn committed_offset(&self) -> OffsetPx {
        self.committed
    }

    /// Write a committed offset target.
    ///
    /// When `animated`, the visible offset eases from its current position
    /// to the target over [`TRANSITION_DURATION`]; otherwise the target
    /// applies immediately. Either way any live drag override is dropped.
    pub fn render_offset(&mut self, target: OffsetPx, animated: bool, now: Instant) {
        let current = self.visible_offset(now);
        self.live = None;
        if animated && current != target {
            self.transition = Some(Transition {
                from: current,
                to: target,
                start: now,
                duration: TRANSITION_DURATION,
            });
        } else {
            self.transition = None;
        }
        self.committed = target;
    }

    /// Apply a live drag offset immediately, with no transition.
    /// Sampled by the shell once per display refresh while a drag is active.
    pub fn set_live(&mut self, offset: OffsetPx) {
        self.transition = None;
        self.live = Some(offset);
    }

    /// Drop the live drag override (session ended or aborted).
    pub fn clear_live(&mut self) {
        self.live = None;
    }

    /// The offset actually visible at `now`.
    pub fn visible_offset(&self, now: Instant) -> OffsetPx {
        if let Some(live) = self.live {
            return live;
        }
        match &self.transition {
            Some(t) => t.at(now),
            None => self.committed,
        }
    }

    /// Whether an eased transition is still in flight at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.as_ref().is_some_and(|t| !t.done(now))
    }
}
