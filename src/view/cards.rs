//! Card strip rendering.
//!
//! Cards lay out left to right at one stride apiece; the strip's visible
//! offset (committed, eased, or live drag) shifts the whole row. Cards
//! partially or fully outside the viewport are clipped.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use crate::model::Deck;
use crate::view_state::RenderFrame;

use super::constants::{CARD_GAP, CARD_HEIGHT, CARD_WIDTH, PX_PER_CELL};
use super::styles::CarouselStyles;

/// Left edge of each card in cells relative to the strip area, for the
/// cards that intersect a viewport of `width` cells.
pub(crate) fn visible_cards(count: usize, offset_px: f64, width: u16) -> Vec<(usize, i32)> {
    let stride_px = f64::from(CARD_WIDTH + CARD_GAP) * PX_PER_CELL;
    let mut out = Vec::new();
    for i in 0..count {
        let x_px = i as f64 * stride_px + offset_px;
        let x = (x_px / PX_PER_CELL).round() as i32;
        if x + i32::from(CARD_WIDTH) > 0 && x < i32::from(width) {
            out.push((i, x));
        }
    }
    out
}

/// Truncate `text` to at most `max_width` terminal columns.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(ch);
    }
    out
}

/// Render the card strip into `area`.
pub fn render_cards(
    f: &mut Frame,
    area: Rect,
    deck: &Deck,
    view: &RenderFrame,
    styles: &CarouselStyles,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let height = CARD_HEIGHT.min(area.height);

    for (i, x) in visible_cards(deck.len(), view.offset.get(), area.width) {
        let Some(card) = deck.get(crate::view_state::CardIndex::new(i)) else {
            continue;
        };

        // Clip to the strip area; partially offscreen cards lose the
        // offscreen columns (and that edge of the border).
        let left = x.max(0);
        let right = (x + i32::from(CARD_WIDTH)).min(i32::from(area.width));
        if right <= left {
            continue;
        }
        let rect = Rect {
            x: area.x + left as u16,
            y: area.y,
            width: (right - left) as u16,
            height,
        };

        let is_active = view.active.is_some_and(|a| a.get() == i);
        let title = truncate_to_width(card.title(), rect.width.saturating_sub(4) as usize);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles.card_border(is_active))
            .title(Line::styled(title, styles.card_title()));
        let body = Paragraph::new(card.body())
            .style(styles.card_body())
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(body, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRIDE_PX: f64 = (CARD_WIDTH as f64 + CARD_GAP as f64) * PX_PER_CELL;

    #[test]
    fn at_rest_first_card_sits_at_origin() {
        let cards = visible_cards(5, 0.0, 80);
        assert_eq!(cards[0], (0, 0));
    }

    #[test]
    fn resting_offset_puts_current_card_at_origin() {
        let cards = visible_cards(5, -2.0 * STRIDE_PX, 80);
        assert!(cards.contains(&(2, 0)));
    }

    #[test]
    fn cards_fully_offscreen_are_skipped() {
        // At rest on card 4 of 5, card 0 is far off the left edge.
        let cards = visible_cards(5, -4.0 * STRIDE_PX, 40);
        assert!(!cards.iter().any(|&(i, _)| i == 0));
        assert!(cards.contains(&(4, 0)));
    }

    #[test]
    fn live_drag_offset_shifts_cards_mid_cell() {
        // Half a stride into a drag, card 0 straddles the left edge.
        let cards = visible_cards(3, -STRIDE_PX / 2.0, 80);
        let (_, x) = cards.iter().find(|&&(i, _)| i == 0).copied().unwrap();
        assert_eq!(x, -(i32::from(CARD_WIDTH + CARD_GAP)) / 2);
    }

    #[test]
    fn empty_deck_renders_nothing() {
        assert!(visible_cards(0, 0.0, 80).is_empty());
    }

    #[test]
    fn truncation_respects_column_widths() {
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("hello", 10), "hello");
        // Wide CJK glyphs count as two columns.
        assert_eq!(truncate_to_width("日本語", 4), "日本");
    }
}
