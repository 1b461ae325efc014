//! Carousel core state machines (pure, event-loop independent).

pub mod autoplay;
pub mod carousel;
pub mod gesture;
pub mod index;
pub mod ring;

pub use autoplay::{AutoAdvance, AUTO_ADVANCE_INTERVAL};
pub use carousel::{CarouselConfig, CarouselState};
pub use gesture::{
    GestureCommit, GestureConfig, GestureEvent, GesturePhase, GestureTracker, PointerButton,
};
pub use index::{IndexController, StepDirection};
pub use ring::{RingState, RING_COOLDOWN};
