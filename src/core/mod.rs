//! Core abstractions for breathe.
//!
//! This module provides the easing math, the terminal and clock seams, and the
//! cancellation flag shared by the animation engine.

mod clock;
pub mod easing;
mod interrupt;
mod traits;

pub use clock::SystemClock;
pub use easing::{position_at_time, time_at_pos};
pub use interrupt::Interrupt;
pub use traits::{Clock, Geometry, Surface, Wake};

#[cfg(test)]
pub use traits::MockSurface;
