//! Pure view-state layer: geometry measurement, stride caching, and offset
//! resolution. Depends on the rendering surface only through the
//! [`geometry::Surface`] port.

pub mod geometry;
pub mod render_sync;
pub mod types;

pub use geometry::{GeometryCache, Surface, SurfaceMetrics, DEFAULT_GAP};
pub use render_sync::{RenderFrame, RenderSync, TRANSITION_DURATION};
pub use types::{CardIndex, InvalidStride, OffsetPx, Stride};
