//! Surface measurement port and the rendered-stride cache.
//!
//! The carousel core never touches the rendering surface directly. It reads
//! geometry through [`SurfaceMetrics`] (produced by a [`Surface`] adapter at
//! composition time) and caches the derived stride. The cache is written only
//! on layout-affecting events (resize, initial load); everything else reads it.

use super::render_sync::RenderFrame;
use super::types::Stride;

/// Gap assumed between cards when the surface cannot measure one.
pub const DEFAULT_GAP: f64 = 20.0;

/// Surfaces narrower than this derive stride from the inter-item gap;
/// wider surfaces use the item's horizontal margins instead.
pub const NARROW_VIEWPORT_WIDTH: f64 = 768.0;

/// Geometry readings taken from the rendering surface.
///
/// Optional fields model measurements that may be unavailable or unparsable
/// on the host surface; derivation falls back to [`DEFAULT_GAP`] for those.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    /// Rendered width of one card.
    pub item_width: f64,
    /// Gap between adjacent cards, if measurable.
    pub gap: Option<f64>,
    /// Left margin of a card, if measurable.
    pub margin_left: Option<f64>,
    /// Right margin of a card, if measurable.
    pub margin_right: Option<f64>,
    /// Total width of the viewport containing the strip.
    pub viewport_width: f64,
}

impl SurfaceMetrics {
    /// Metrics for a surface that only reports item width and gap.
    pub fn with_gap(item_width: f64, gap: f64, viewport_width: f64) -> Self {
        Self {
            item_width,
            gap: Some(gap),
            margin_left: None,
            margin_right: None,
            viewport_width,
        }
    }
}

/// Port through which the core observes and mutates the rendering surface.
///
/// The TUI supplies a terminal-backed adapter; tests supply fixed fakes.
pub trait Surface {
    /// Measure the rendered geometry. `None` when nothing is rendered
    /// (empty container); all dependent operations then degrade to no-ops.
    fn metrics(&self) -> Option<SurfaceMetrics>;

    /// Present a computed frame.
    fn present(&mut self, frame: &RenderFrame);
}

/// Cached stride, recomputed only on layout-affecting events.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryCache {
    stride: Option<Stride>,
}

impl GeometryCache {
    /// Create an empty cache. Stride is unknown until the first measurement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently cached stride, if any measurement has succeeded.
    pub fn stride(&self) -> Option<Stride> {
        self.stride
    }

    /// Recompute the stride from fresh surface metrics.
    ///
    /// Narrow surfaces (below [`NARROW_VIEWPORT_WIDTH`]) use item width plus
    /// the inter-item gap; wider surfaces use item width plus horizontal
    /// margins. Unmeasurable gaps or margins fall back to [`DEFAULT_GAP`].
    ///
    /// `None` metrics (absent surface) leave the cache untouched. A
    /// measurement that derives an invalid stride is discarded, so the
    /// cache never holds a non-positive stride.
    pub fn recompute(&mut self, metrics: Option<&SurfaceMetrics>) {
        let Some(m) = metrics else {
            return;
        };
        let spacing = if m.viewport_width <= NARROW_VIEWPORT_WIDTH {
            m.gap.unwrap_or(DEFAULT_GAP)
        } else {
            match (m.margin_left, m.margin_right) {
                (Some(l), Some(r)) => l + r,
                _ => m.gap.unwrap_or(DEFAULT_GAP),
            }
        };
        if let Ok(stride) = Stride::new(m.item_width + spacing) {
            self.stride = Some(stride);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cache_has_no_stride() {
        assert!(GeometryCache::new().stride().is_none());
    }

    #[test]
    fn narrow_surface_uses_gap() {
        let mut cache = GeometryCache::new();
        cache.recompute(Some(&SurfaceMetrics::with_gap(280.0, 20.0, 600.0)));
        assert_eq!(cache.stride().unwrap().get(), 300.0);
    }

    #[test]
    fn narrow_surface_falls_back_to_default_gap() {
        let mut cache = GeometryCache::new();
        let metrics = SurfaceMetrics {
            item_width: 280.0,
            gap: None,
            margin_left: None,
            margin_right: None,
            viewport_width: 600.0,
        };
        cache.recompute(Some(&metrics));
        assert_eq!(cache.stride().unwrap().get(), 280.0 + DEFAULT_GAP);
    }

    #[test]
    fn wide_surface_uses_margins() {
        let mut cache = GeometryCache::new();
        let metrics = SurfaceMetrics {
            item_width: 280.0,
            gap: Some(20.0),
            margin_left: Some(15.0),
            margin_right: Some(15.0),
            viewport_width: 1200.0,
        };
        cache.recompute(Some(&metrics));
        assert_eq!(cache.stride().unwrap().get(), 310.0);
    }

    #[test]
    fn wide_surface_without_margins_falls_back_to_gap() {
        let mut cache = GeometryCache::new();
        cache.recompute(Some(&SurfaceMetrics::with_gap(280.0, 20.0, 1200.0)));
        assert_eq!(cache.stride().unwrap().get(), 300.0);
    }

    #[test]
    fn absent_surface_preserves_cache() {
        let mut cache = GeometryCache::new();
        cache.recompute(Some(&SurfaceMetrics::with_gap(280.0, 20.0, 600.0)));
        cache.recompute(None);
        assert_eq!(cache.stride().unwrap().get(), 300.0);
    }

    #[test]
    fn invalid_measurement_is_discarded() {
        let mut cache = GeometryCache::new();
        cache.recompute(Some(&SurfaceMetrics::with_gap(280.0, 20.0, 600.0)));
        cache.recompute(Some(&SurfaceMetrics::with_gap(0.0, 0.0, 600.0)));
        // Previous good stride survives a degenerate resize reading.
        assert_eq!(cache.stride().unwrap().get(), 300.0);
    }

    #[test]
    fn resize_updates_stride() {
        let mut cache = GeometryCache::new();
        cache.recompute(Some(&SurfaceMetrics::with_gap(280.0, 20.0, 600.0)));
        cache.recompute(Some(&SurfaceMetrics::with_gap(230.0, 20.0, 500.0)));
        assert_eq!(cache.stride().unwrap().get(), 250.0);
    }
}
