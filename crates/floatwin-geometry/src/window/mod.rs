//! Per-window gesture handling
//!
//! Composes the snap, resize and inertia engines into the pointer state
//! machine a windowing UI drives: press, move, release.

mod controller;
mod gesture;
pub mod placement;

pub use controller::WindowController;
pub use gesture::Gesture;
pub use placement::initial_position;
