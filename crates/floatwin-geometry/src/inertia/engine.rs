//! Inertia engine

use tracing::{debug, trace};

use super::{CoastPhysics, MotionSample, SampleHistory};
use crate::config::{InertiaConfig, MIN_ELAPSED_SECONDS};
use crate::math::{Rect, Vec2, Vector};
use crate::transition::InertialMotion;

/// Tracks a drag and computes the coast to apply on release
///
/// `Idle → Tracking` on [`start_motion`](Self::start_motion); samples are
/// recorded while tracking and [`inertial_motion`](Self::inertial_motion)
/// turns them into a coast. Querying does not consume the history.
#[derive(Clone, Debug, Default)]
pub struct InertiaEngine {
    config: InertiaConfig,
    history: SampleHistory,
}

impl InertiaEngine {
    pub fn new(config: InertiaConfig) -> Self {
        Self {
            config,
            history: SampleHistory::new(),
        }
    }

    pub fn config(&self) -> &InertiaConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: InertiaConfig) {
        self.config = config;
    }

    /// Recorded samples, oldest first
    pub fn history(&self) -> &SampleHistory {
        &self.history
    }

    /// Whether a drag is being tracked
    pub fn is_tracking(&self) -> bool {
        !self.history.is_empty()
    }

    /// Begin tracking a new drag at `point`, discarding any previous one
    pub fn start_motion(&mut self, point: Vec2, now_ms: f64) {
        self.history.clear();
        self.history.push(MotionSample::new(point, now_ms));
        debug!(?point, "inertia tracking started");
    }

    /// Record the window position observed on a pointer move
    pub fn record_point(&mut self, point: Vec2, now_ms: f64) {
        self.history.push(MotionSample::new(point, now_ms));
    }

    /// Return to idle
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Coast to apply when the drag is released at `now_ms`.
    ///
    /// `window` supplies the window size; `host` the canvas it must stay in.
    /// Returns `None` when fewer than two samples were recorded, when the
    /// window did not move, or when it sat still for longer than the
    /// stationary threshold before release.
    pub fn inertial_motion(&self, host: Rect, window: Rect, now_ms: f64) -> Option<InertialMotion> {
        if self.history.len() < 2 {
            trace!(samples = self.history.len(), "no coast: not enough samples");
            return None;
        }
        let first = *self.history.oldest()?;
        let last = *self.history.newest()?;

        let idle_ms = now_ms - last.timestamp_ms;
        let drag = Vector::new(first.position, last.position);
        if idle_ms >= self.config.stationary_threshold_ms || drag.is_zero() {
            debug!(idle_ms, moved = !drag.is_zero(), "no coast");
            return None;
        }

        let elapsed = ((last.timestamp_ms - first.timestamp_ms) / 1000.0).max(MIN_ELAPSED_SECONDS);
        let distance = drag.length() / self.config.pixels_per_meter();
        let v0 = distance / elapsed;

        let physics = CoastPhysics::new(&self.config);
        let expected_distance = physics.stopping_distance(v0);
        let expected_time = physics.stopping_time(v0);

        let coast = Vector::from_shift(last.position, drag.shift())
            .scale(expected_distance / distance)
            .round_shift();

        // Keep the window fully inside the host if it started there,
        // otherwise only keep its top-left inside the host.
        let legal = host.shrink_far_edges(window.size());
        let bounds = if legal.contains_inclusive(last.position) {
            legal
        } else {
            host
        };
        let clamped = coast.clamp_end_to(bounds);

        let full_length = coast.length();
        let duration_seconds = if full_length > 0.0 {
            expected_time * clamped.length() / full_length
        } else {
            0.0
        };

        let motion = InertialMotion {
            start_position: last.position,
            end_position: clamped.end,
            duration_seconds,
            start_time: now_ms,
            easing: self.config.easing,
        };
        debug!(
            v0,
            expected_distance,
            expected_time,
            end = ?motion.end_position,
            duration = motion.duration_seconds,
            easing = motion.easing.name(),
            "coast computed"
        );
        Some(motion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::Easing;

    fn host() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 800.0)
    }

    fn big_host() -> Rect {
        Rect::new(-1.0e6, -1.0e6, 2.0e6, 2.0e6)
    }

    fn window() -> Rect {
        Rect::new(100.0, 100.0, 200.0, 150.0)
    }

    fn engine_with(samples: &[(f64, f64, f64)]) -> InertiaEngine {
        engine_with_config(InertiaConfig::default(), samples)
    }

    fn engine_with_config(config: InertiaConfig, samples: &[(f64, f64, f64)]) -> InertiaEngine {
        let mut engine = InertiaEngine::new(config);
        let (x, y, t) = samples[0];
        engine.start_motion(Vec2::new(x, y), t);
        for &(x, y, t) in &samples[1..] {
            engine.record_point(Vec2::new(x, y), t);
        }
        engine
    }

    #[test]
    fn test_single_sample_no_motion() {
        let engine = engine_with(&[(100.0, 100.0, 0.0)]);
        assert!(engine.inertial_motion(host(), window(), 10.0).is_none());
    }

    #[test]
    fn test_idle_engine_no_motion() {
        let engine = InertiaEngine::default();
        assert!(!engine.is_tracking());
        assert!(engine.inertial_motion(host(), window(), 0.0).is_none());
    }

    #[test]
    fn test_stationary_before_release_no_motion() {
        let engine = engine_with(&[(100.0, 100.0, 0.0), (140.0, 100.0, 50.0)]);
        assert!(engine.inertial_motion(host(), window(), 150.0).is_none());
        assert!(engine.inertial_motion(host(), window(), 149.0).is_some());
    }

    #[test]
    fn test_zero_displacement_no_motion() {
        let engine = engine_with(&[
            (100.0, 100.0, 0.0),
            (120.0, 100.0, 20.0),
            (100.0, 100.0, 40.0),
        ]);
        assert!(engine.inertial_motion(host(), window(), 45.0).is_none());
    }

    #[test]
    fn test_coast_continues_in_drag_direction() {
        let engine = engine_with(&[(100.0, 100.0, 0.0), (140.0, 100.0, 50.0)]);
        let m = engine.inertial_motion(host(), window(), 55.0).unwrap();

        // 40px in 50ms: v0 ≈ 0.2117 m/s, stopping distance ≈ 575.4px
        assert_eq!(m.start_position, Vec2::new(140.0, 100.0));
        assert_eq!(m.end_position, Vec2::new(715.0, 100.0));
        assert!((m.duration_seconds - 1.4384).abs() < 0.001);
        assert_eq!(m.easing, Easing::EaseOutCubic);
        assert!((m.start_time - 55.0).abs() < 1e-12);
    }

    #[test]
    fn test_coast_carries_configured_easing() {
        let config = InertiaConfig {
            easing: Easing::Linear,
            ..Default::default()
        };
        let engine = engine_with_config(config, &[(100.0, 100.0, 0.0), (140.0, 100.0, 50.0)]);
        let m = engine.inertial_motion(host(), window(), 55.0).unwrap();
        assert_eq!(m.easing, Easing::Linear);
        let halfway = m.position_at(55.0 + m.duration_ms() / 2.0);
        assert!((halfway.x - 427.5).abs() < 1e-6);
        assert!((halfway.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_coast_clamped_to_host_shortens_duration() {
        let engine = engine_with(&[(500.0, 100.0, 0.0), (540.0, 100.0, 50.0)]);
        let free = engine.inertial_motion(big_host(), window(), 55.0).unwrap();
        let m = engine.inertial_motion(host(), window(), 55.0).unwrap();

        // Legal range for the top-left is x <= 1000 - 200
        assert_eq!(m.end_position, Vec2::new(800.0, 100.0));
        let ratio = (800.0 - 540.0) / (free.end_position.x - 540.0);
        assert!((m.duration_seconds - free.duration_seconds * ratio).abs() < 1e-9);
    }

    #[test]
    fn test_diagonal_coast_stays_on_line() {
        let engine = engine_with(&[(400.0, 300.0, 0.0), (440.0, 320.0, 20.0)]);
        let m = engine.inertial_motion(host(), window(), 25.0).unwrap();
        let legal = host().shrink_far_edges(window().size());
        assert!(legal.contains_inclusive(m.end_position));

        // Direction (2, 1) is preserved up to pixel rounding
        let shift = m.end_position - m.start_position;
        assert!((shift.y / shift.x - 0.5).abs() < 0.01);
        assert!((m.end_position.x - 800.0).abs() < 1e-9);
    }

    #[test]
    fn test_window_outside_legal_range_uses_raw_host() {
        // Top-left at x = 900 is already past 1000 - 200
        let engine = engine_with(&[(860.0, 100.0, 0.0), (900.0, 100.0, 50.0)]);
        let m = engine.inertial_motion(host(), window(), 55.0).unwrap();
        assert_eq!(m.end_position, Vec2::new(1000.0, 100.0));
    }

    #[test]
    fn test_only_last_four_samples_count() {
        let engine = engine_with(&[
            (0.0, 0.0, 0.0),
            (100.0, 100.0, 10.0),
            (110.0, 100.0, 20.0),
            (120.0, 100.0, 30.0),
            (130.0, 100.0, 40.0),
        ]);
        assert_eq!(engine.history().len(), 4);
        assert_eq!(engine.history().oldest().unwrap().position, Vec2::new(100.0, 100.0));
        let m = engine.inertial_motion(big_host(), window(), 41.0).unwrap();
        // Motion was purely horizontal within the retained window
        assert!((m.end_position.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_start_motion_discards_previous_drag() {
        let mut engine = engine_with(&[(100.0, 100.0, 0.0), (140.0, 100.0, 50.0)]);
        engine.start_motion(Vec2::new(10.0, 10.0), 60.0);
        assert_eq!(engine.history().len(), 1);
        assert!(engine.inertial_motion(host(), window(), 61.0).is_none());
    }

    #[test]
    fn test_query_is_repeatable() {
        let engine = engine_with(&[(100.0, 100.0, 0.0), (130.0, 110.0, 30.0)]);
        let a = engine.inertial_motion(host(), window(), 35.0);
        let b = engine.inertial_motion(host(), window(), 35.0);
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn test_simultaneous_samples_use_time_floor() {
        let engine = engine_with(&[(100.0, 100.0, 10.0), (101.0, 100.0, 10.0)]);
        let m = engine.inertial_motion(host(), window(), 10.0).unwrap();
        // 1px in the 1ms floor is fast enough to reach the right limit
        assert_eq!(m.end_position, Vec2::new(800.0, 100.0));
    }
}
