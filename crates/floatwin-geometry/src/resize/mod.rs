//! Edge and corner resizing
//!
//! Resizing is a three step protocol driven by the host:
//! 1. [`determine_anchor`] classifies the pointer against the window's edges
//! 2. [`ResizeEngine::start_resize`] snapshots the window and precomputes the
//!    legal range of the moving corner
//! 3. [`ResizeEngine::resize`] maps each pointer delta to a new window rect

mod anchor;
mod constraints;
mod engine;

pub use anchor::{determine_anchor, Corner, ResizeAnchor};
pub use constraints::SizeConstraints;
pub use engine::ResizeEngine;
