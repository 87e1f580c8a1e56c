//! Start/end vector used for motion paths

use serde::{Deserialize, Serialize};

use super::{clamp_range, Rect, Vec2};

/// A directed segment from `start` to `end`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub start: Vec2,
    pub end: Vec2,
}

impl Vector {
    /// Create a new vector
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Vector starting at `start` shifted by `shift`
    pub fn from_shift(start: Vec2, shift: Vec2) -> Self {
        Self::new(start, start + shift)
    }

    /// Horizontal component
    #[inline]
    pub fn length_x(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Vertical component
    #[inline]
    pub fn length_y(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// The shift from start to end
    pub fn shift(&self) -> Vec2 {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.length_x().hypot(self.length_y())
    }

    pub fn is_zero(&self) -> bool {
        self.length_x() == 0.0 && self.length_y() == 0.0
    }

    pub fn is_horizontal(&self) -> bool {
        self.length_y() == 0.0 && self.length_x() != 0.0
    }

    pub fn is_vertical(&self) -> bool {
        self.length_x() == 0.0 && self.length_y() != 0.0
    }

    /// Scale the shift by `factor`, keeping the start fixed
    pub fn scale(&self, factor: f64) -> Vector {
        Vector::from_shift(self.start, self.shift() * factor)
    }

    /// Round the shift components to whole pixels, keeping the start fixed
    pub fn round_shift(&self) -> Vector {
        Vector::from_shift(self.start, self.shift().round())
    }

    /// Clamp the end point into `bounds` while staying on the vector's line.
    ///
    /// Axis-aligned vectors clamp only their own axis. Diagonal vectors clamp
    /// X first and recompute Y from the line through `start`; if Y is still
    /// out of range, Y is clamped and X recomputed. The result is finally
    /// clamped into `bounds` on both axes, so the returned end always lies
    /// inside `bounds` even when `start` does not.
    pub fn clamp_end_to(&self, bounds: Rect) -> Vector {
        let (left, right) = (bounds.x, bounds.right());
        let (top, bottom) = (bounds.y, bounds.bottom());
        let mut end = self.end;

        if self.is_vertical() {
            end.y = clamp_range(end.y, top, bottom);
        } else if self.is_horizontal() {
            end.x = clamp_range(end.x, left, right);
        } else if !self.is_zero() {
            let slope = self.length_y() / self.length_x();
            let mut x = clamp_range(end.x, left, right);
            let mut y = self.start.y + slope * (x - self.start.x);
            if y < top || y > bottom {
                y = clamp_range(y, top, bottom);
                x = self.start.x + (y - self.start.y) / slope;
            }
            end = Vec2::new(x, y);
        }

        Vector::new(self.start, bounds.clamp_point(end))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The clamped end always lies inside the bounds
        #[test]
        fn clamped_end_inside_bounds(
            sx in -500.0f64..1500.0, sy in -500.0f64..1500.0,
            ex in -3000.0f64..3000.0, ey in -3000.0f64..3000.0,
            w in 0.0f64..1000.0, h in 0.0f64..1000.0,
        ) {
            let bounds = Rect::new(0.0, 0.0, w, h);
            let v = Vector::new(Vec2::new(sx, sy), Vec2::new(ex, ey));
            let c = v.clamp_end_to(bounds);
            prop_assert!(bounds.contains_inclusive(c.end), "{:?} outside {:?}", c.end, bounds);
            prop_assert_eq!(c.start, v.start);
        }
    }
}
