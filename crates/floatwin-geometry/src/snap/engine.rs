//! Snap engine

use tracing::trace;

use super::SnapTargets;
use crate::config::SnapConfig;
use crate::math::{clamp_range, Rect, Vec2};

/// Upper bound on alternating x/y passes before giving up on snapping
const MAX_SNAP_PASSES: usize = 8;

/// One edge of a window along one axis
#[derive(Clone, Copy)]
enum Edge {
    Near,
    Far,
}

/// Edges of an obstacle along one axis
#[derive(Clone, Copy)]
struct Span {
    near: f64,
    far: f64,
}

impl Span {
    fn horizontal(r: &Rect) -> Self {
        Self {
            near: r.x,
            far: r.right(),
        }
    }

    fn vertical(r: &Rect) -> Self {
        Self {
            near: r.y,
            far: r.bottom(),
        }
    }
}

/// Snaps rectangles and corners against host and sibling edges.
///
/// A sibling only offers its edges on one axis while the window comes
/// within the snap distance of it on the other axis. When several edges are
/// within reach the closest one wins; ties go to the earlier obstacle (host
/// first, then siblings in the order supplied).
#[derive(Clone, Copy, Debug, Default)]
pub struct SnapEngine {
    config: SnapConfig,
}

impl SnapEngine {
    pub fn new(config: SnapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SnapConfig) {
        self.config = config;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Adjusted top-left for a window being dragged to `rect`.
    ///
    /// The position is first limited so that at least `margin` pixels of the
    /// window stay over the host, then each axis is snapped. Which siblings
    /// are in reach on one axis depends on the other, so the two axes are
    /// re-evaluated until they agree; if they never do, the margin-limited
    /// position is kept unsnapped. A snap that would break the margin is
    /// ignored. Applying the result a second time returns the same position.
    pub fn snap_rectangle(&self, rect: Rect, targets: &SnapTargets<'_>) -> Vec2 {
        if !self.config.enabled {
            return rect.position();
        }

        let host = targets.host;
        let x_range = self.margin_range(host.x, host.right(), rect.width);
        let y_range = self.margin_range(host.y, host.bottom(), rect.height);
        let start = Vec2::new(
            clamp_range(rect.x, x_range.0, x_range.1),
            clamp_range(rect.y, y_range.0, y_range.1),
        );

        let mut current = start;
        for _ in 0..MAX_SNAP_PASSES {
            let x = self.snap_axis(
                start.x,
                rect.width,
                Span::horizontal(&host),
                self.near_siblings(targets.siblings, current.y, rect.height, Span::vertical)
                    .map(Span::horizontal),
                x_range,
            );
            let y = self.snap_axis(
                start.y,
                rect.height,
                Span::vertical(&host),
                self.near_siblings(targets.siblings, x, rect.width, Span::horizontal)
                    .map(Span::vertical),
                y_range,
            );

            let next = Vec2::new(x, y);
            if next == current {
                trace!(from = ?rect.position(), to = ?next, "snap rectangle");
                return next;
            }
            current = next;
        }

        trace!(from = ?rect.position(), to = ?start, "snap did not settle");
        start
    }

    pub fn snap_top_left_corner(&self, rect: Rect, targets: &SnapTargets<'_>) -> Vec2 {
        self.snap_corner(rect.position(), rect, targets)
    }

    pub fn snap_top_right_corner(&self, rect: Rect, targets: &SnapTargets<'_>) -> Vec2 {
        self.snap_corner(rect.top_right(), rect, targets)
    }

    pub fn snap_bottom_left_corner(&self, rect: Rect, targets: &SnapTargets<'_>) -> Vec2 {
        self.snap_corner(rect.bottom_left(), rect, targets)
    }

    pub fn snap_bottom_right_corner(&self, rect: Rect, targets: &SnapTargets<'_>) -> Vec2 {
        self.snap_corner(rect.bottom_right(), rect, targets)
    }

    /// Snap one corner of `rect` to the nearest obstacle edge on each axis
    fn snap_corner(&self, corner: Vec2, rect: Rect, targets: &SnapTargets<'_>) -> Vec2 {
        if !self.config.enabled {
            return corner;
        }

        let host = std::iter::once(&targets.host);
        let x_lines = host
            .clone()
            .chain(self.near_siblings(targets.siblings, rect.y, rect.height, Span::vertical))
            .flat_map(|r| [r.x, r.right()]);
        let y_lines = host
            .chain(self.near_siblings(targets.siblings, rect.x, rect.width, Span::horizontal))
            .flat_map(|r| [r.y, r.bottom()]);

        let x = self.nearest_line(corner.x, x_lines);
        let y = self.nearest_line(corner.y, y_lines);
        Vec2::new(x.unwrap_or(corner.x), y.unwrap_or(corner.y))
    }

    /// Siblings that `[pos, pos + extent]` comes within the snap distance of
    /// along the axis selected by `span`
    fn near_siblings<'s>(
        &self,
        siblings: &'s [Rect],
        pos: f64,
        extent: f64,
        span: fn(&Rect) -> Span,
    ) -> impl Iterator<Item = &'s Rect> + 's {
        let reach = self.config.distance;
        siblings.iter().filter(move |s| {
            let s = span(s);
            pos <= s.far + reach && pos + extent >= s.near - reach
        })
    }

    /// Legal range for the near edge so `margin` pixels stay over the host
    fn margin_range(&self, host_near: f64, host_far: f64, extent: f64) -> (f64, f64) {
        let margin = self.config.margin.min(extent).max(0.0);
        let lo = host_near - extent + margin;
        let hi = (host_far - margin).max(lo);
        (lo, hi)
    }

    fn snap_axis(
        &self,
        pos: f64,
        extent: f64,
        host: Span,
        siblings: impl Iterator<Item = Span>,
        (lo, hi): (f64, f64),
    ) -> f64 {
        // Host edges hold the window inside; sibling edges also offer
        // flush adjacency on either side.
        let host_pairs = [(Edge::Near, host.near), (Edge::Far, host.far)];
        let sibling_pairs = siblings.flat_map(|s| {
            [
                (Edge::Near, s.far),
                (Edge::Far, s.near),
                (Edge::Near, s.near),
                (Edge::Far, s.far),
            ]
        });

        let mut best: Option<(f64, f64)> = None;
        for (edge, line) in host_pairs.into_iter().chain(sibling_pairs) {
            let candidate = match edge {
                Edge::Near => line,
                Edge::Far => line - extent,
            };
            let dist = (candidate - pos).abs();
            if dist > self.config.distance || candidate < lo || candidate > hi {
                continue;
            }
            if best.map_or(true, |(best_dist, _)| dist < best_dist) {
                best = Some((dist, candidate));
            }
        }
        best.map_or(pos, |(_, candidate)| candidate)
    }

    fn nearest_line(&self, value: f64, lines: impl Iterator<Item = f64>) -> Option<f64> {
        let mut best: Option<(f64, f64)> = None;
        for line in lines {
            let dist = (line - value).abs();
            if dist > self.config.distance {
                continue;
            }
            if best.map_or(true, |(best_dist, _)| dist < best_dist) {
                best = Some((dist, line));
            }
        }
        best.map(|(_, line)| line)
    }
}
