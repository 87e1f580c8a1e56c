//! Resize anchors and pointer zone classification

use serde::{Deserialize, Serialize};

use super::SizeConstraints;
use crate::math::{Size, Vec2};

/// Which edge or corner of a window is being dragged
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeAnchor {
    /// Pointer is not over a resize zone
    #[default]
    None,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// The four corners a resize is computed around
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// True when the corner sits on the window's left edge
    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    /// True when the corner sits on the window's top edge
    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }
}

impl ResizeAnchor {
    #[inline]
    pub fn is_none(self) -> bool {
        self == ResizeAnchor::None
    }

    /// Corner routine that services this anchor.
    ///
    /// Single edges reuse the corner on their side: top and left go through
    /// the top-left corner, bottom and right through the bottom-right one.
    pub fn corner(self) -> Option<Corner> {
        match self {
            ResizeAnchor::None => None,
            ResizeAnchor::TopLeft | ResizeAnchor::Top | ResizeAnchor::Left => {
                Some(Corner::TopLeft)
            }
            ResizeAnchor::TopRight => Some(Corner::TopRight),
            ResizeAnchor::BottomLeft => Some(Corner::BottomLeft),
            ResizeAnchor::BottomRight | ResizeAnchor::Bottom | ResizeAnchor::Right => {
                Some(Corner::BottomRight)
            }
        }
    }

    /// Whether the pointer's horizontal delta changes the window
    pub fn moves_horizontally(self) -> bool {
        !matches!(
            self,
            ResizeAnchor::None | ResizeAnchor::Top | ResizeAnchor::Bottom
        )
    }

    /// Whether the pointer's vertical delta changes the window
    pub fn moves_vertically(self) -> bool {
        !matches!(
            self,
            ResizeAnchor::None | ResizeAnchor::Left | ResizeAnchor::Right
        )
    }
}

/// Classify a pointer position against the resize bands of a window.
///
/// `pointer` is relative to the window's top-left corner. Bands are
/// `thickness` wide along each edge; an axis locked by `constraints`
/// contributes no bands. Corners win over edges.
pub fn determine_anchor(
    pointer: Vec2,
    window_size: Size,
    thickness: f64,
    constraints: &SizeConstraints,
) -> ResizeAnchor {
    let (w, h) = (window_size.width, window_size.height);
    if pointer.x < 0.0 || pointer.y < 0.0 || pointer.x > w || pointer.y > h {
        return ResizeAnchor::None;
    }

    let horizontal = constraints.can_resize_horizontally();
    let vertical = constraints.can_resize_vertically();

    let left = horizontal && pointer.x < thickness;
    let right = horizontal && pointer.x > w - thickness;
    let top = vertical && pointer.y < thickness;
    let bottom = vertical && pointer.y > h - thickness;

    if top && left {
        ResizeAnchor::TopLeft
    } else if top && right {
        ResizeAnchor::TopRight
    } else if bottom && left {
        ResizeAnchor::BottomLeft
    } else if bottom && right {
        ResizeAnchor::BottomRight
    } else if left {
        ResizeAnchor::Left
    } else if right {
        ResizeAnchor::Right
    } else if top {
        ResizeAnchor::Top
    } else if bottom {
        ResizeAnchor::Bottom
    } else {
        ResizeAnchor::None
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A pointer inside both a horizontal and a vertical band is always a corner
        #[test]
        fn corners_take_priority(
            x in 0.0f64..5.5,
            y in 0.0f64..5.5,
            far_x in proptest::bool::ANY,
            far_y in proptest::bool::ANY,
        ) {
            let size = Size::new(200.0, 150.0);
            let px = if far_x { size.width - x } else { x };
            let py = if far_y { size.height - y } else { y };
            let anchor =
                determine_anchor(Vec2::new(px, py), size, 6.0, &SizeConstraints::default());

            let expected = match (far_x, far_y) {
                (false, false) => ResizeAnchor::TopLeft,
                (true, false) => ResizeAnchor::TopRight,
                (false, true) => ResizeAnchor::BottomLeft,
                (true, true) => ResizeAnchor::BottomRight,
            };
            prop_assert_eq!(anchor, expected);
        }

        /// Classification is a pure function of its inputs
        #[test]
        fn anchor_is_deterministic(x in -10.0f64..210.0, y in -10.0f64..160.0) {
            let size = Size::new(200.0, 150.0);
            let c = SizeConstraints::default();
            let a = determine_anchor(Vec2::new(x, y), size, 6.0, &c);
            let b = determine_anchor(Vec2::new(x, y), size, 6.0, &c);
            prop_assert_eq!(a, b);
        }
    }
}
