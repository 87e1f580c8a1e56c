//! Window controller

use tracing::{debug, trace};

use super::Gesture;
use crate::config::GeometryConfig;
use crate::inertia::InertiaEngine;
use crate::math::{Rect, Size, Vec2};
use crate::resize::{ResizeAnchor, ResizeEngine, SizeConstraints};
use crate::snap::{SnapEngine, SnapTargets};
use crate::transition::InertialMotion;

/// Gesture state machine for a single window.
///
/// The host forwards pointer events in host coordinates and applies the
/// rects it gets back. The controller never holds the window rect itself;
/// callers pass the current one on press and release.
#[derive(Clone, Debug, Default)]
pub struct WindowController {
    snap: SnapEngine,
    resize: ResizeEngine,
    inertia: InertiaEngine,
    gesture: Option<Gesture>,
}

impl WindowController {
    pub fn new(config: GeometryConfig) -> Self {
        Self {
            snap: SnapEngine::new(config.snap),
            resize: ResizeEngine::new(config.resize),
            inertia: InertiaEngine::new(config.inertia),
            gesture: None,
        }
    }

    /// Current configuration of all three engines
    pub fn config(&self) -> GeometryConfig {
        GeometryConfig {
            snap: *self.snap.config(),
            resize: *self.resize.config(),
            inertia: *self.inertia.config(),
        }
    }

    /// Replace the configuration. An in-flight gesture keeps going.
    pub fn set_config(&mut self, config: GeometryConfig) {
        self.snap.set_config(config.snap);
        self.resize.set_config(config.resize);
        self.inertia.set_config(config.inertia);
    }

    pub fn snap_engine_mut(&mut self) -> &mut SnapEngine {
        &mut self.snap
    }

    pub fn resize_engine(&self) -> &ResizeEngine {
        &self.resize
    }

    pub fn inertia_engine(&self) -> &InertiaEngine {
        &self.inertia
    }

    /// Active gesture, if any
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Resize anchor under `pointer` (host coordinates) without starting a gesture.
    ///
    /// Hosts use this to pick a cursor while hovering.
    pub fn hover_anchor(
        &self,
        window: Rect,
        pointer: Vec2,
        constraints: &SizeConstraints,
    ) -> ResizeAnchor {
        self.resize
            .determine_anchor(pointer - window.position(), window.size(), constraints)
    }

    /// Start dragging `window` by its body
    pub fn begin_move(&mut self, window: Rect, pointer: Vec2, now_ms: f64) {
        self.resize.end_resize();
        let offset = pointer - window.position();
        self.inertia.start_motion(window.position(), now_ms);
        self.gesture = Some(Gesture::Move { offset });
        debug!(?offset, "move gesture started");
    }

    /// Start resizing `window` from the zone under `pointer`.
    ///
    /// Returns the anchor that was grabbed. When the pointer is over no
    /// resize zone the controller ends up idle and `ResizeAnchor::None` is
    /// returned.
    pub fn begin_resize(
        &mut self,
        window: Rect,
        pointer: Vec2,
        constraints: &SizeConstraints,
        host: Rect,
    ) -> ResizeAnchor {
        self.inertia.reset();
        self.gesture = None;

        let anchor = self.hover_anchor(window, pointer, constraints);
        if !self.resize.start_resize(anchor, window, constraints, host) {
            trace!(?pointer, "press outside resize zones");
            return ResizeAnchor::None;
        }

        self.gesture = Some(Gesture::Resize {
            anchor,
            start_pointer: pointer,
        });
        debug!(?anchor, ?pointer, "resize gesture started");
        anchor
    }

    /// Window rect for the pointer at `pointer`, or `None` when idle.
    ///
    /// Moves keep `window_size` and snap the whole rectangle; resizes derive
    /// the rect from the pointer travel since the press.
    pub fn pointer_move(
        &mut self,
        pointer: Vec2,
        window_size: Size,
        targets: &SnapTargets<'_>,
        now_ms: f64,
    ) -> Option<Rect> {
        match self.gesture? {
            Gesture::Move { offset } => {
                let raw = Rect::from_pos_size(pointer - offset, window_size);
                let pos = self.snap.snap_rectangle(raw, targets);
                self.inertia.record_point(pos, now_ms);
                Some(raw.with_position(pos))
            }
            Gesture::Resize { start_pointer, .. } => {
                self.resize.resize(pointer - start_pointer, &self.snap, targets)
            }
        }
    }

    /// End the gesture. A released move may hand back a coast to animate.
    pub fn pointer_up(&mut self, window: Rect, host: Rect, now_ms: f64) -> Option<InertialMotion> {
        let gesture = self.gesture.take()?;
        match gesture {
            Gesture::Move { .. } => {
                let motion = self.inertia.inertial_motion(host, window, now_ms);
                self.inertia.reset();
                debug!(coasting = motion.is_some(), "move gesture ended");
                motion
            }
            Gesture::Resize { .. } => {
                self.resize.end_resize();
                None
            }
        }
    }

    /// Abandon the gesture without producing a coast
    pub fn cancel(&mut self) {
        if let Some(gesture) = self.gesture.take() {
            debug!(?gesture, "gesture cancelled");
        }
        self.resize.end_resize();
        self.inertia.reset();
    }
}
