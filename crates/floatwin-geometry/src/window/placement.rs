//! Initial window placement

use crate::math::{Rect, Size, Vec2};

/// Top-left for a newly opened window.
///
/// A requested position is used as-is when it is finite. Otherwise the
/// window is centered in `host`.
pub fn initial_position(host: Rect, size: Size, requested: Option<Vec2>) -> Vec2 {
    match requested {
        Some(pos) if pos.is_finite() => pos,
        _ => host.center() - size.non_negative().as_vec2() / 2.0,
    }
}
