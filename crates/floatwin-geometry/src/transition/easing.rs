//! Easing functions for animations

use serde::{Deserialize, Serialize};

/// Easing curve attached to an animation descriptor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Fast start, smooth deceleration
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
    Linear,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] through the curve
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::EaseOutCubic => ease_out_cubic(t),
            Easing::EaseInOutCubic => ease_in_out(t),
            Easing::Linear => linear(t),
        }
    }

    /// CSS-style name of the curve
    pub fn name(self) -> &'static str {
        match self {
            Easing::EaseOutCubic => "ease-out-cubic",
            Easing::EaseInOutCubic => "ease-in-out-cubic",
            Easing::Linear => "linear",
        }
    }
}

/// Ease-in-out cubic function
#[inline]
pub fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Ease-out cubic function
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Linear interpolation (no easing)
#[inline]
pub fn linear(t: f64) -> f64 {
    t
}
