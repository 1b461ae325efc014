//! Acceptance tests for carousel interaction scenarios.
//!
//! Each test drives the full app through the harness: synthetic pointer and
//! key events in, rendered state out, with a virtual clock for the timer
//! and transition behavior.


use std::time::Duration;

use crossterm::event::KeyCode;
use harness::CarouselHarness;

// Terminal geometry used by the harness (80x24):
// cards are 28 cells wide with a 4-cell gap, so one stride is 32 cells
// (256 logical px) and the quarter-stride commit threshold is 8 cells.
const STRIDE_CELLS: u16 = 32;
const COMMIT_CELLS: u16 = STRIDE_CELLS / 4;
const DOT_ROW: u16 = 22;

/// Column of dot `i` when 5 dots are centered in 80 columns.
fn dot_column(i: u16) -> u16 {
    35 + 2 * i
}

#[test]
fn long_drag_left_advances_one_card() {
    // GIVEN a deck at rest on the first card
    let mut h = CarouselHarness::new(5).unwrap();
    assert_eq!(h.carousel().current().unwrap().get(), 0);

    // WHEN the user drags left well past the commit threshold
    h.press(40, 4);
    h.drag(40 - (COMMIT_CELLS + 2), 4);
    h.release(40 - (COMMIT_CELLS + 2), 4);

    // THEN the carousel commits a single forward step
    assert_eq!(h.carousel().current().unwrap().get(), 1);
}

#[test]
fn short_drag_snaps_back() {
    let mut h = CarouselHarness::new(5).unwrap();

    // A 3-cell drag locks the horizontal axis but stays under the
    // quarter-stride threshold.
    h.press(40, 4);
    h.drag(37, 4);
    assert!(h.carousel().is_dragging());
    h.release(37, 4);

    assert_eq!(h.carousel().current().unwrap().get(), 0);
    assert!(!h.carousel().is_dragging());
}

#[test]
fn huge_drag_still_commits_only_one_step() {
    let mut h = CarouselHarness::new(5).unwrap();

    // Dragging two full strides still moves exactly one card.
    h.press(75, 4);
    h.drag(75 - 2 * STRIDE_CELLS, 4);
    h.release(75 - 2 * STRIDE_CELLS, 4);

    assert_eq!(h.carousel().current().unwrap().get(), 1);
}

#[test]
fn vertical_drag_aborts_without_moving() {
    let mut h = CarouselHarness::new(5).unwrap();

    // Mostly-vertical motion hands the gesture back untouched.
    h.press(40, 4);
    h.drag(40, 8);
    assert!(!h.carousel().is_dragging());
    h.release(40, 8);

    assert_eq!(h.carousel().current().unwrap().get(), 0);
}

#[test]
fn dot_click_jumps_to_card() {
    let mut h = CarouselHarness::new(5).unwrap();

    // Click the third dot in the indicator row.
    h.press(dot_column(2), DOT_ROW);

    assert_eq!(h.carousel().current().unwrap().get(), 2);
}

#[test]
fn arrow_keys_wrap_at_both_ends() {
    let mut h = CarouselHarness::new(3).unwrap();

    // Backward from the first card wraps to the last.
    h.send_key(KeyCode::Left);
    assert_eq!(h.carousel().current().unwrap().get(), 2);

    // Forward from the last wraps to the first.
    h.send_key(KeyCode::Right);
    assert_eq!(h.carousel().current().unwrap().get(), 0);
}

#[test]
fn auto_advance_fires_on_schedule() {
    let mut h = CarouselHarness::new(4).unwrap();

    // Just short of the interval: nothing happens.
    h.advance(Duration::from_millis(3999));
    assert!(!h.pump().unwrap());
    assert_eq!(h.carousel().current().unwrap().get(), 0);

    // Crossing the deadline advances one card.
    h.advance(Duration::from_millis(2));
    assert!(h.pump().unwrap());
    assert_eq!(h.carousel().current().unwrap().get(), 1);
}

#[test]
fn auto_advance_wraps_past_the_last_card() {
    let mut h = CarouselHarness::new(3).unwrap();

    for _ in 0..3 {
        h.advance(Duration::from_millis(4001));
        assert!(h.pump().unwrap());
    }

    // 0 -> 1 -> 2 -> wraps to 0
    assert_eq!(h.carousel().current().unwrap().get(), 0);
}

#[test]
fn drag_suspends_auto_advance_until_release() {
    let mut h = CarouselHarness::new(5).unwrap();

    // GIVEN an open drag session
    h.press(40, 4);
    h.drag(40 - (COMMIT_CELLS + 2), 4);

    // WHEN the interval elapses mid-drag
    h.advance(Duration::from_millis(5000));

    // THEN the timer does not fire
    assert!(!h.pump().unwrap());
    assert_eq!(h.carousel().current().unwrap().get(), 0);

    // AND after release the drag commit lands and the period restarts in full
    h.release(40 - (COMMIT_CELLS + 2), 4);
    assert_eq!(h.carousel().current().unwrap().get(), 1);

    h.advance(Duration::from_millis(3999));
    assert!(!h.pump().unwrap());
    h.advance(Duration::from_millis(2));
    assert!(h.pump().unwrap());
    assert_eq!(h.carousel().current().unwrap().get(), 2);
}

#[test]
fn space_toggles_auto_advance_off() {
    let mut h = CarouselHarness::new(3).unwrap();

    h.send_key(KeyCode::Char(' '));
    assert!(!h.carousel().autoplay_enabled());

    h.advance(Duration::from_millis(10_000));
    assert!(!h.pump().unwrap());
    assert_eq!(h.carousel().current().unwrap().get(), 0);
}

#[test]
fn empty_deck_ignores_all_input() {
    let mut h = CarouselHarness::new(0).unwrap();

    h.press(40, 4);
    h.drag(20, 4);
    h.release(20, 4);
    h.send_key(KeyCode::Right);
    h.advance(Duration::from_millis(10_000));
    let _ = h.pump().unwrap();

    assert!(h.carousel().current().is_none());
    let rendered = h.render_to_string().unwrap();
    assert!(rendered.contains("no cards to show"));
}

#[test]
fn status_line_tracks_the_current_card() {
    let mut h = CarouselHarness::new(5).unwrap();
    assert!(h.render_to_string().unwrap().contains("card 1/5"));

    h.send_key(KeyCode::Right);
    assert!(h.render_to_string().unwrap().contains("card 2/5"));
}
