//! Core geometry types for window manipulation
//!
//! These types provide basic 2D math for positioning, sizing and the
//! start/end vectors used by the inertia clamp.

mod rect;
mod size;
mod vec2;
mod vector;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
pub use vector::Vector;

/// Clamp `value` into `[lo, hi]`.
///
/// Unlike `f64::clamp` this never panics: an inverted range resolves to `lo`.
#[inline]
pub fn clamp_range(value: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi {
        lo
    } else if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}
