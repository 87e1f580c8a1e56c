//! Inertial coast after a drag release
//!
//! While a window is dragged the host records its position on every pointer
//! move. On release the last few samples are turned into a launch velocity,
//! and a constant sliding-friction deceleration gives the distance and time
//! the window keeps travelling.

mod engine;
mod history;
mod physics;

pub use engine::InertiaEngine;
pub use history::{MotionSample, SampleHistory, HISTORY_CAPACITY};
pub use physics::CoastPhysics;
