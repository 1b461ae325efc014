//! Terminal-backed surface adapter.
//!
//! Bridges cell-based terminal geometry to the logical-pixel measurements
//! the carousel core expects, and records the most recent presented frame.

use crate::view_state::{RenderFrame, Surface, SurfaceMetrics};

use super::constants::{CARD_GAP, CARD_HEIGHT, CARD_WIDTH, PX_PER_CELL};

/// Surface adapter over the terminal grid.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    width: u16,
    height: u16,
    card_count: usize,
    last_frame: Option<RenderFrame>,
}

impl TerminalSurface {
    /// Create an adapter for a terminal of the given size showing
    /// `card_count` cards.
    pub fn new(width: u16, height: u16, card_count: usize) -> Self {
        Self {
            width,
            height,
            card_count,
            last_frame: None,
        }
    }

    /// Update the tracked terminal size (resize events).
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// The most recently presented frame, if any.
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }
}

impl Surface for TerminalSurface {
    /// Measured geometry, or `None` when the strip renders nothing
    /// (empty deck or a terminal too small for a single card).
    fn metrics(&self) -> Option<SurfaceMetrics> {
        if self.card_count == 0 || self.width < CARD_WIDTH || self.height < CARD_HEIGHT {
            return None;
        }
        Some(SurfaceMetrics::with_gap(
            f64::from(CARD_WIDTH) * PX_PER_CELL,
            f64::from(CARD_GAP) * PX_PER_CELL,
            f64::from(self.width) * PX_PER_CELL,
        ))
    }

    fn present(&mut self, frame: &RenderFrame) {
        self.last_frame = Some(*frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::OffsetPx;

    #[test]
    fn metrics_scale_cells_to_logical_px() {
        let surface = TerminalSurface::new(80, 24, 5);
        let metrics = surface.metrics().unwrap();
        assert_eq!(metrics.item_width, f64::from(CARD_WIDTH) * PX_PER_CELL);
        assert_eq!(metrics.gap, Some(f64::from(CARD_GAP) * PX_PER_CELL));
        assert_eq!(metrics.viewport_width, 640.0);
    }

    #[test]
    fn empty_deck_has_no_metrics() {
        let surface = TerminalSurface::new(80, 24, 0);
        assert!(surface.metrics().is_none());
    }

    #[test]
    fn tiny_terminal_has_no_metrics() {
        let surface = TerminalSurface::new(10, 4, 5);
        assert!(surface.metrics().is_none());
    }

    #[test]
    fn resize_changes_viewport_width() {
        let mut surface = TerminalSurface::new(80, 24, 5);
        surface.set_size(100, 30);
        assert_eq!(surface.metrics().unwrap().viewport_width, 800.0);
    }

    #[test]
    fn present_records_the_frame() {
        let mut surface = TerminalSurface::new(80, 24, 5);
        let frame = RenderFrame {
            offset: OffsetPx::new(-300.0),
            dragging: false,
            active: None,
            ring: None,
        };
        surface.present(&frame);
        assert_eq!(surface.last_frame(), Some(&frame));
    }
}
