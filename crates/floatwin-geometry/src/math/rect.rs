//! Axis-aligned rectangle

use serde::{Deserialize, Serialize};

use super::{clamp_range, Size, Vec2};
use crate::error::{GeometryError, GeometryResult};

/// Axis-aligned rectangle
///
/// Width and height never go negative: constructors clamp negative growth
/// to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Create from position and size
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    /// Create the rectangle spanned by two corner points (in any order)
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    /// Parse a flat `[x, y, width, height, ...]` array
    pub fn from_flat(values: &[f64]) -> GeometryResult<Vec<Rect>> {
        if values.len() % 4 != 0 {
            return Err(GeometryError::MalformedRects(values.len()));
        }
        Ok(values
            .chunks_exact(4)
            .map(|r| Rect::new(r[0], r[1], r[2], r[3]))
            .collect())
    }

    /// Get position (top-left)
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.y)
    }

    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.x, self.bottom())
    }

    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    /// Get the center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Same rectangle at a different top-left
    pub fn with_position(&self, pos: Vec2) -> Rect {
        Rect::from_pos_size(pos, self.size())
    }

    /// Check if a point is inside the rectangle, edges included
    pub fn contains_inclusive(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Clamp a point into the rectangle, edges included
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            clamp_range(p.x, self.x, self.right()),
            clamp_range(p.y, self.y, self.bottom()),
        )
    }

    /// Pull the right and bottom edges in by `size`.
    ///
    /// The result is the range of legal top-left positions for an object of
    /// `size` that must stay fully inside `self`.
    pub fn shrink_far_edges(&self, size: Size) -> Rect {
        Rect::new(
            self.x,
            self.y,
            self.width - size.width,
            self.height - size.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_negative_size_clamps() {
        let r = Rect::new(0.0, 0.0, -10.0, 5.0);
        assert!((r.width - 0.0).abs() < 0.001);
        assert!((r.height - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_derived_points() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.position(), Vec2::new(10.0, 20.0));
        assert_eq!(r.top_right(), Vec2::new(110.0, 20.0));
        assert_eq!(r.bottom_left(), Vec2::new(10.0, 70.0));
        assert_eq!(r.bottom_right(), Vec2::new(110.0, 70.0));
        assert_eq!(r.center(), Vec2::new(60.0, 45.0));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains_inclusive(Vec2::new(50.0, 40.0)));
        assert!(!rect.contains_inclusive(Vec2::new(5.0, 40.0)));
        assert!(!rect.contains_inclusive(Vec2::new(110.1, 40.0)));
        assert!(rect.contains_inclusive(Vec2::new(110.0, 70.0)));
    }

    #[test]
    fn test_rect_from_corners() {
        let r = Rect::from_corners(Vec2::new(50.0, 10.0), Vec2::new(20.0, 40.0));
        assert_eq!(r, Rect::new(20.0, 10.0, 30.0, 30.0));
    }

    #[test]
    fn test_rect_from_flat() {
        let rects = Rect::from_flat(&[0.0, 0.0, 100.0, 50.0, 200.0, 10.0, 30.0, 40.0]).unwrap();
        assert_eq!(
            rects,
            vec![
                Rect::new(0.0, 0.0, 100.0, 50.0),
                Rect::new(200.0, 10.0, 30.0, 40.0),
            ]
        );
        assert!(Rect::from_flat(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_rect_from_flat_rejects_partial_rect() {
        assert_eq!(
            Rect::from_flat(&[0.0, 0.0, 100.0, 50.0, 200.0]),
            Err(GeometryError::MalformedRects(5))
        );
    }

    #[test]
    fn test_shrink_far_edges() {
        let host = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let legal = host.shrink_far_edges(Size::new(200.0, 150.0));
        assert_eq!(legal, Rect::new(0.0, 0.0, 800.0, 650.0));

        // Window larger than host collapses to the host origin
        let legal = host.shrink_far_edges(Size::new(2000.0, 150.0));
        assert!((legal.width - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_point() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(r.clamp_point(Vec2::new(-5.0, 150.0)), Vec2::new(0.0, 100.0));
        assert_eq!(r.clamp_point(Vec2::new(40.0, 60.0)), Vec2::new(40.0, 60.0));
    }
}
