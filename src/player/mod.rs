//! Now-playing state.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  Message   ┌──────────────┐  setters   ┌─────────────┐
//! │  ui::views   │ ─────────▶ │  ui::update  │ ─────────▶ │ PlayerState │
//! └──────────────┘            └──────────────┘            └──────┬──────┘
//!        ▲                                                       │
//!        └───────────────────── rendered each frame ─────────────┘
//! ```
//!
//! There is no audio engine behind this state. "Playing", progress and
//! volume are display values only.

mod controls;
mod state;

pub use controls::TransportControl;
pub use state::{INITIAL_PROGRESS, INITIAL_VOLUME, PlayerState, SliderValue};
