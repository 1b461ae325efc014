//! Layout dimension constants for TUI rendering.
//!
//! The carousel core measures in logical pixels; the terminal measures in
//! cells. One cell is [`PX_PER_CELL`] logical pixels, so the core's drag
//! thresholds and overscroll slack keep their tuned values regardless of
//! terminal geometry.

use std::time::Duration;

/// Logical pixels per terminal cell.
pub const PX_PER_CELL: f64 = 8.0;

/// Rendered width of one card in cells (border included).
pub const CARD_WIDTH: u16 = 28;

/// Gap between adjacent cards in cells.
pub const CARD_GAP: u16 = 4;

/// Rendered height of one card in lines (border included).
pub const CARD_HEIGHT: u16 = 9;

/// Height of the dot indicator row in lines.
pub const DOT_ROW_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Render cadence while a drag or transition is in flight (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Idle poll timeout when nothing is pending.
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);
