//! deckview - terminal card-carousel viewer.
//!
//! Shows a deck of cards as a horizontally scrolling strip with mouse
//! drag/swipe navigation, dot indicators, and an auto-advance timer.
//!
//! Layering follows a functional-core / imperative-shell split:
//!
//! - [`view_state`] - pure geometry and offset resolution
//! - [`state`] - pure carousel state machines (gesture, index, autoplay)
//! - [`model`] - deck data types and the error hierarchy
//! - [`parser`] / [`integration`] - deck-line parsing, pure assembly
//! - [`source`] / [`config`] / [`logging`] / [`view`] - the impure shell

pub mod config;
pub mod integration;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
