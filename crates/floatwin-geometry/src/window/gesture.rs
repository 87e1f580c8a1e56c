//! Pointer gesture state

use crate::math::Vec2;
use crate::resize::ResizeAnchor;

/// In-flight pointer gesture on a window
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Dragging the window by its body
    Move {
        /// Pointer position relative to the window top-left at press
        offset: Vec2,
    },
    /// Dragging an edge or corner
    Resize {
        anchor: ResizeAnchor,
        /// Pointer position at press, in host coordinates
        start_pointer: Vec2,
    },
}

impl Gesture {
    pub fn is_move(&self) -> bool {
        matches!(self, Gesture::Move { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_kind() {
        let m = Gesture::Move {
            offset: Vec2::new(5.0, 5.0),
        };
        assert!(m.is_move());

        let r = Gesture::Resize {
            anchor: ResizeAnchor::Left,
            start_pointer: Vec2::ZERO,
        };
        assert!(!r.is_move());
    }
}
