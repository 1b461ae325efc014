//! Dot indicator row.
//!
//! One dot per card, centered under the strip. The dot for the current card
//! is filled; the ring marker follows the most recent jump target and is
//! styled distinctly while it settles.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::view_state::{CardIndex, RenderFrame};

use super::styles::CarouselStyles;

/// Rendered width of the dot row in cells: one cell per dot, one per gap.
fn row_width(count: usize) -> u16 {
    if count == 0 {
        return 0;
    }
    (count * 2 - 1) as u16
}

/// Left edge of the centered dot row within `area`.
fn row_start(area: Rect, count: usize) -> u16 {
    area.x + area.width.saturating_sub(row_width(count)) / 2
}

/// Map a click column to the dot under it, if any.
pub fn hit_test(column: u16, area: Rect, count: usize) -> Option<CardIndex> {
    let width = row_width(count);
    if width == 0 || area.width < width {
        return None;
    }
    let start = row_start(area, count);
    if column < start || column >= start + width {
        return None;
    }
    let rel = column - start;
    // Odd cells are the gaps between dots.
    if rel % 2 != 0 {
        return None;
    }
    Some(CardIndex::new(usize::from(rel) / 2))
}

/// Render the dot row into `area`.
pub fn render_dots(
    f: &mut Frame,
    area: Rect,
    count: usize,
    view: &RenderFrame,
    styles: &CarouselStyles,
) {
    if count == 0 || area.height == 0 || area.width < row_width(count) {
        return;
    }
    let mut spans = Vec::with_capacity(count * 2 - 1);
    for i in 0..count {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let active = view.active.is_some_and(|a| a.get() == i);
        let ringed = view.ring.is_some_and(|r| r.get() == i);
        let glyph = if active { "●" } else { "○" };
        let style = if ringed {
            styles.ring()
        } else {
            styles.dot(active)
        };
        spans.push(Span::styled(glyph, style));
    }
    let row = Rect {
        x: row_start(area, count),
        y: area.y,
        width: row_width(count),
        height: 1,
    };
    f.render_widget(Line::from(spans), row);
}
