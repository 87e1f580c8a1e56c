//! Resize engine

use tracing::{debug, trace, warn};

use super::{determine_anchor, Corner, ResizeAnchor, SizeConstraints};
use crate::config::ResizeConfig;
use crate::math::{Rect, Size, Vec2};
use crate::snap::{SnapEngine, SnapTargets};

/// Snapshot taken when a resize gesture starts
#[derive(Clone, Copy, Debug)]
struct ResizeSession {
    anchor: ResizeAnchor,
    corner: Corner,
    /// Window rect at gesture start
    origin: Rect,
    /// Legal range of the moving corner
    bounds: Rect,
}

/// Converts pointer deltas into window rects during a resize gesture
#[derive(Clone, Debug, Default)]
pub struct ResizeEngine {
    config: ResizeConfig,
    session: Option<ResizeSession>,
}

impl ResizeEngine {
    pub fn new(config: ResizeConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ResizeConfig) {
        self.config = config;
    }

    /// Anchor under `pointer` (window-local) using the configured band width
    pub fn determine_anchor(
        &self,
        pointer: Vec2,
        window_size: Size,
        constraints: &SizeConstraints,
    ) -> ResizeAnchor {
        determine_anchor(pointer, window_size, self.config.area_thickness, constraints)
    }

    /// Whether a resize gesture is in progress
    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    /// Anchor of the active gesture, `None` when idle
    pub fn anchor(&self) -> ResizeAnchor {
        self.session.map_or(ResizeAnchor::None, |s| s.anchor)
    }

    /// Legal range of the moving corner for the active gesture
    pub fn bounds(&self) -> Option<Rect> {
        self.session.map(|s| s.bounds)
    }

    /// Begin resizing `window` from `anchor`.
    ///
    /// Any previous gesture is discarded. Returns false (and stays idle)
    /// when `anchor` is [`ResizeAnchor::None`].
    pub fn start_resize(
        &mut self,
        anchor: ResizeAnchor,
        window: Rect,
        constraints: &SizeConstraints,
        host: Rect,
    ) -> bool {
        let Some(corner) = anchor.corner() else {
            self.session = None;
            return false;
        };

        let bounds = self.corner_bounds(anchor, corner, window, constraints, host);
        debug!(?anchor, ?window, ?bounds, "resize started");
        self.session = Some(ResizeSession {
            anchor,
            corner,
            origin: window,
            bounds,
        });
        true
    }

    /// End the active gesture
    pub fn end_resize(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(anchor = ?session.anchor, "resize ended");
        }
    }

    /// New window rect for a pointer `delta` measured from the gesture start.
    ///
    /// Returns `None` when no gesture is active.
    pub fn resize(
        &self,
        delta: Vec2,
        snap: &SnapEngine,
        targets: &SnapTargets<'_>,
    ) -> Option<Rect> {
        let session = self.session?;
        let dx = if session.anchor.moves_horizontally() { delta.x } else { 0.0 };
        let dy = if session.anchor.moves_vertically() { delta.y } else { 0.0 };
        let delta = Vec2::new(dx, dy);

        let rect = match session.corner {
            Corner::BottomRight => Self::resize_bottom_right(&session, delta, snap, targets),
            Corner::TopLeft => Self::resize_top_left(&session, delta, snap, targets),
            Corner::BottomLeft => Self::resize_bottom_left(&session, delta, snap, targets),
            Corner::TopRight => Self::resize_top_right(&session, delta, snap, targets),
        };
        trace!(anchor = ?session.anchor, ?delta, ?rect, "resize");
        Some(rect)
    }

    fn resize_bottom_right(
        s: &ResizeSession,
        d: Vec2,
        snap: &SnapEngine,
        targets: &SnapTargets<'_>,
    ) -> Rect {
        let o = s.origin;
        let tentative = Rect::new(o.x, o.y, o.width + d.x, o.height + d.y);
        let snapped = snap.snap_bottom_right_corner(tentative, targets);
        Self::finish(s, o.bottom_right() + d, snapped, d, o.position())
    }

    fn resize_top_left(
        s: &ResizeSession,
        d: Vec2,
        snap: &SnapEngine,
        targets: &SnapTargets<'_>,
    ) -> Rect {
        let o = s.origin;
        let tentative = Rect::new(o.x + d.x, o.y + d.y, o.width - d.x, o.height - d.y);
        let snapped = snap.snap_top_left_corner(tentative, targets);
        Self::finish(s, o.position() + d, snapped, d, o.bottom_right())
    }

    fn resize_bottom_left(
        s: &ResizeSession,
        d: Vec2,
        snap: &SnapEngine,
        targets: &SnapTargets<'_>,
    ) -> Rect {
        let o = s.origin;
        let tentative = Rect::new(o.x + d.x, o.y, o.width - d.x, o.height + d.y);
        let snapped = snap.snap_bottom_left_corner(tentative, targets);
        Self::finish(s, o.bottom_left() + d, snapped, d, o.top_right())
    }

    fn resize_top_right(
        s: &ResizeSession,
        d: Vec2,
        snap: &SnapEngine,
        targets: &SnapTargets<'_>,
    ) -> Rect {
        let o = s.origin;
        let tentative = Rect::new(o.x, o.y + d.y, o.width + d.x, o.height - d.y);
        let snapped = snap.snap_top_right_corner(tentative, targets);
        Self::finish(s, o.top_right() + d, snapped, d, o.bottom_left())
    }

    /// Shared tail of the corner routines.
    ///
    /// A zero delta axis keeps its unsnapped coordinate so snapping never
    /// drags the perpendicular edge; the corner is then clamped into the
    /// session bounds and the rect rebuilt from the fixed opposite corner.
    fn finish(s: &ResizeSession, raw: Vec2, snapped: Vec2, d: Vec2, fixed: Vec2) -> Rect {
        let mut corner = snapped;
        if d.x == 0.0 {
            corner.x = raw.x;
        }
        if d.y == 0.0 {
            corner.y = raw.y;
        }
        let corner = s.bounds.clamp_point(corner);
        Rect::from_corners(corner, fixed)
    }

    /// Legal range of the moving corner for `anchor`
    fn corner_bounds(
        &self,
        anchor: ResizeAnchor,
        corner: Corner,
        window: Rect,
        constraints: &SizeConstraints,
        host: Rect,
    ) -> Rect {
        let min_w = effective_min(constraints.min_width, self.config.fallback_min_width);
        let min_h = effective_min(constraints.min_height, self.config.fallback_min_height);
        let max_w = effective_max(constraints.max_width, min_w, "width");
        let max_h = effective_max(constraints.max_height, min_h, "height");

        let (x_lo, x_hi) = if !anchor.moves_horizontally() {
            let x = if corner.is_left() { window.x } else { window.right() };
            (x, x)
        } else if corner.is_left() {
            let fixed = window.right();
            let hi = fixed - min_w;
            let lo = max_w.map_or(host.x, |m| (fixed - m).max(host.x)).min(hi);
            (lo, hi)
        } else {
            let fixed = window.x;
            let lo = fixed + min_w;
            let hi = max_w
                .map_or(host.right(), |m| (fixed + m).min(host.right()))
                .max(lo);
            (lo, hi)
        };

        let (y_lo, y_hi) = if !anchor.moves_vertically() {
            let y = if corner.is_top() { window.y } else { window.bottom() };
            (y, y)
        } else if corner.is_top() {
            let fixed = window.bottom();
            let hi = fixed - min_h;
            let lo = max_h.map_or(host.y, |m| (fixed - m).max(host.y)).min(hi);
            (lo, hi)
        } else {
            let fixed = window.y;
            let lo = fixed + min_h;
            let hi = max_h
                .map_or(host.bottom(), |m| (fixed + m).min(host.bottom()))
                .max(lo);
            (lo, hi)
        };

        Rect::new(x_lo, y_lo, x_hi - x_lo, y_hi - y_lo)
    }
}

/// Declared minimum, or the fallback when none was declared
fn effective_min(declared: f64, fallback: f64) -> f64 {
    if declared > 0.0 {
        declared
    } else {
        fallback
    }
}

/// Declared maximum, raised to `min` when the two contradict
fn effective_max(declared: Option<f64>, min: f64, axis: &'static str) -> Option<f64> {
    declared.map(|max| {
        if max < min {
            warn!(axis, max, min, "max size below min size, using min");
            min
        } else {
            max
        }
    })
}
