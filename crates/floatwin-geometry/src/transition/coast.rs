//! Inertial coast animation descriptor

use serde::{Deserialize, Serialize};

use super::Easing;
use crate::math::Vec2;

/// Decelerating motion applied to a window after a drag release
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InertialMotion {
    /// Window top-left at release
    pub start_position: Vec2,
    /// Window top-left when the coast ends
    pub end_position: Vec2,
    /// Length of the coast in seconds
    pub duration_seconds: f64,
    /// Release time (ms)
    pub start_time: f64,
    /// Easing curve, ease-out cubic unless configured otherwise
    pub easing: Easing,
}

impl InertialMotion {
    /// Duration in milliseconds
    pub fn duration_ms(&self) -> f64 {
        self.duration_seconds * 1000.0
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self, now: f64) -> f64 {
        let duration = self.duration_ms();
        if duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) / duration).clamp(0.0, 1.0)
    }

    /// Check if the coast has finished
    pub fn is_complete(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Window top-left at time `now`
    pub fn position_at(&self, now: f64) -> Vec2 {
        let t = self.easing.apply(self.progress(now));
        self.start_position + (self.end_position - self.start_position) * t
    }

    /// Distance covered by the whole coast in pixels
    pub fn distance(&self) -> f64 {
        self.start_position.distance(self.end_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion() -> InertialMotion {
        InertialMotion {
            start_position: Vec2::new(100.0, 100.0),
            end_position: Vec2::new(300.0, 100.0),
            duration_seconds: 0.5,
            start_time: 1000.0,
            easing: Easing::EaseOutCubic,
        }
    }

    #[test]
    fn test_coast_endpoints() {
        let m = motion();
        assert_eq!(m.position_at(1000.0), Vec2::new(100.0, 100.0));
        assert_eq!(m.position_at(1500.0), Vec2::new(300.0, 100.0));
        assert!((m.distance() - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_coast_decelerates() {
        let m = motion();
        // Ease-out covers more than half the distance at half time
        assert!(m.position_at(1250.0).x > 200.0);
    }

    #[test]
    fn test_coast_completes() {
        let m = motion();
        assert!(!m.is_complete(1499.0));
        assert!(m.is_complete(1500.0));
        assert!(m.is_complete(2000.0));
    }

    #[test]
    fn test_zero_duration_is_complete_immediately() {
        let m = InertialMotion {
            duration_seconds: 0.0,
            ..motion()
        };
        assert!(m.is_complete(1000.0));
        assert_eq!(m.position_at(1000.0), m.end_position);
    }
}
