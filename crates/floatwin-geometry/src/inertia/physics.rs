//! Constant-deceleration coast model

use crate::config::InertiaConfig;

/// Sliding friction model: a body launched at `v0` decelerates at `μ·g`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoastPhysics {
    /// Deceleration in m/s²
    pub deceleration: f64,
}

impl CoastPhysics {
    pub fn new(config: &InertiaConfig) -> Self {
        Self {
            deceleration: config.deceleration(),
        }
    }

    /// Distance in meters travelled before stopping: `v0² / 2a`
    pub fn stopping_distance(&self, v0: f64) -> f64 {
        v0 * v0 / (2.0 * self.deceleration)
    }

    /// Time in seconds until the body stops: `2d / v0`
    pub fn stopping_time(&self, v0: f64) -> f64 {
        if v0 <= 0.0 {
            return 0.0;
        }
        2.0 * self.stopping_distance(v0) / v0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Stopping distance is quadratic in launch velocity
        #[test]
        fn distance_scales_with_v0_squared(v0 in 0.001f64..50.0, k in 1.0f64..4.0) {
            let p = CoastPhysics::new(&InertiaConfig::default());
            let ratio = p.stopping_distance(v0 * k) / p.stopping_distance(v0);
            prop_assert!((ratio - k * k).abs() < 1e-6 * k * k);
        }
    }
}
