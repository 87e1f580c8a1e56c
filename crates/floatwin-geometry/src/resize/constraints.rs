//! Per-window size constraints

use serde::{Deserialize, Serialize};

use crate::error::{Axis, GeometryError, GeometryResult};
use crate::math::Size;

/// Minimum and maximum window size
///
/// A minimum of 0 means "not declared"; a maximum of `None` means the window
/// may grow up to the host edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeConstraints {
    pub min_width: f64,
    pub max_width: Option<f64>,
    pub min_height: f64,
    pub max_height: Option<f64>,
}

impl SizeConstraints {
    /// Create from a minimum size and an optional maximum size
    pub fn new(min: Size, max: Option<Size>) -> Self {
        Self {
            min_width: min.width,
            max_width: max.map(|m| m.width),
            min_height: min.height,
            max_height: max.map(|m| m.height),
        }
    }

    /// False when the width is pinned (`min == max != 0`)
    pub fn can_resize_horizontally(&self) -> bool {
        !(self.min_width != 0.0 && self.max_width == Some(self.min_width))
    }

    /// False when the height is pinned (`min == max != 0`)
    pub fn can_resize_vertically(&self) -> bool {
        !(self.min_height != 0.0 && self.max_height == Some(self.min_height))
    }

    /// Check the constraints for contradictions.
    ///
    /// The resize engine tolerates invalid constraints by raising the
    /// maximum to the minimum; this lets a host reject them up front.
    pub fn validate(&self) -> GeometryResult<()> {
        check_axis(Axis::Horizontal, self.min_width, self.max_width)?;
        check_axis(Axis::Vertical, self.min_height, self.max_height)
    }
}

fn check_axis(axis: Axis, min: f64, max: Option<f64>) -> GeometryResult<()> {
    if !min.is_finite() {
        return Err(GeometryError::NonFinite(match axis {
            Axis::Horizontal => "min_width",
            Axis::Vertical => "min_height",
        }));
    }
    if min < 0.0 {
        return Err(GeometryError::InvalidConstraints { axis, min, max: 0.0 });
    }
    match max {
        Some(max) if max.is_nan() => Err(GeometryError::NonFinite(match axis {
            Axis::Horizontal => "max_width",
            Axis::Vertical => "max_height",
        })),
        Some(max) if max < min => Err(GeometryError::InvalidConstraints { axis, min, max }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconstrained() {
        let c = SizeConstraints::default();
        assert!(c.can_resize_horizontally());
        assert!(c.can_resize_vertically());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_pinned_axis() {
        let c = SizeConstraints::new(Size::new(300.0, 100.0), Some(Size::new(300.0, 400.0)));
        assert!(!c.can_resize_horizontally());
        assert!(c.can_resize_vertically());
    }

    #[test]
    fn test_zero_min_and_max_is_not_pinned() {
        let c = SizeConstraints::new(Size::new(0.0, 0.0), Some(Size::new(0.0, 0.0)));
        assert!(c.can_resize_horizontally());
        assert!(c.can_resize_vertically());
    }

    #[test]
    fn test_validate_rejects_min_above_max() {
        let c = SizeConstraints::new(Size::new(300.0, 100.0), Some(Size::new(200.0, 400.0)));
        assert_eq!(
            c.validate(),
            Err(GeometryError::InvalidConstraints {
                axis: Axis::Horizontal,
                min: 300.0,
                max: 200.0,
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let c = SizeConstraints {
            min_height: f64::NAN,
            ..Default::default()
        };
        assert_eq!(c.validate(), Err(GeometryError::NonFinite("min_height")));
    }

    #[test]
    fn test_deserialize_partial() {
        let c: SizeConstraints = serde_json::from_str(r#"{"min_width": 120.0}"#).unwrap();
        assert!((c.min_width - 120.0).abs() < 0.001);
        assert_eq!(c.max_width, None);
    }
}
