//! Snap alignment against the host and sibling windows
//!
//! A dragged window whose edge comes within the snap distance of a host edge
//! or a sibling window edge is pulled flush with it. The same test applied
//! to a single corner backs resize snapping.

mod engine;

pub use engine::SnapEngine;

use crate::math::Rect;

/// Obstacles a window snaps against, supplied fresh on every call
#[derive(Clone, Copy, Debug)]
pub struct SnapTargets<'a> {
    /// Bounds of the containing canvas
    pub host: Rect,
    /// Bounds of the other open windows, in snap priority order
    pub siblings: &'a [Rect],
}

impl<'a> SnapTargets<'a> {
    pub fn new(host: Rect, siblings: &'a [Rect]) -> Self {
        Self { host, siblings }
    }

    /// Targets consisting of the host alone
    pub fn host_only(host: Rect) -> SnapTargets<'static> {
        SnapTargets {
            host,
            siblings: &[],
        }
    }
}
