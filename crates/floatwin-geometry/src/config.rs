//! Tunables for the snap, resize and inertia engines
//!
//! Every section has a `Default` matching the stock window behavior and
//! deserializes with `#[serde(default)]`, so a host can load a partial JSON
//! document and only override what it cares about.

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};
use crate::transition::Easing;

/// Default snap threshold in pixels
pub const DEFAULT_SNAP_DISTANCE: f64 = 10.0;

/// Default minimum visible overlap with the host in pixels
pub const DEFAULT_SNAP_MARGIN: f64 = 20.0;

/// Default width of the resize band along window edges
pub const DEFAULT_RESIZE_THICKNESS: f64 = 6.0;

/// Minimum width substituted when a window declares a minimum of 0
pub const DEFAULT_MIN_WIDTH: f64 = 20.0;

/// Screen density used to convert pixels to meters
pub const DEFAULT_PIXELS_PER_INCH: f64 = 96.0;

/// Meters per inch
pub const METERS_PER_INCH: f64 = 0.0254;

/// Coulomb sliding friction coefficient for the coast
pub const DEFAULT_FRICTION: f64 = 0.015;

/// Standard gravity in m/s²
pub const GRAVITY: f64 = 9.81;

/// A pointer idle for this long before release does not coast
pub const DEFAULT_STATIONARY_THRESHOLD_MS: f64 = 100.0;

/// Floor for the sampled drag duration
pub const MIN_ELAPSED_SECONDS: f64 = 0.001;

/// Snap alignment settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Whether snapping and margin enforcement run at all
    pub enabled: bool,
    /// Edges closer than this many pixels are pulled flush
    pub distance: f64,
    /// Pixels of the window that must stay over the host
    pub margin: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            distance: DEFAULT_SNAP_DISTANCE,
            margin: DEFAULT_SNAP_MARGIN,
        }
    }
}

/// Resize gesture settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Width of the grab band along each window edge
    pub area_thickness: f64,
    /// Minimum width used when the window declares 0
    pub fallback_min_width: f64,
    /// Minimum height used when the window declares 0
    pub fallback_min_height: f64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            area_thickness: DEFAULT_RESIZE_THICKNESS,
            fallback_min_width: DEFAULT_MIN_WIDTH,
            fallback_min_height: 0.0,
        }
    }
}

/// Inertial coast settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InertiaConfig {
    /// Sliding friction coefficient (μ)
    pub friction: f64,
    /// Gravitational acceleration in m/s²
    pub gravity: f64,
    /// Pixels per inch of the host surface
    pub pixels_per_inch: f64,
    /// Idle time before release that cancels the coast
    pub stationary_threshold_ms: f64,
    /// Curve the host should animate the coast with
    pub easing: Easing,
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            gravity: GRAVITY,
            pixels_per_inch: DEFAULT_PIXELS_PER_INCH,
            stationary_threshold_ms: DEFAULT_STATIONARY_THRESHOLD_MS,
            easing: Easing::default(),
        }
    }
}

impl InertiaConfig {
    /// Pixels per meter at the configured density
    #[inline]
    pub fn pixels_per_meter(&self) -> f64 {
        self.pixels_per_inch / METERS_PER_INCH
    }

    /// Constant deceleration `μ·g` in m/s²
    #[inline]
    pub fn deceleration(&self) -> f64 {
        self.friction * self.gravity
    }
}

/// Configuration for every engine owned by a window
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub snap: SnapConfig,
    pub resize: ResizeConfig,
    pub inertia: InertiaConfig,
}

impl GeometryConfig {
    /// Reject values the engines cannot work with
    pub fn validate(&self) -> GeometryResult<()> {
        let fields = [
            ("snap.distance", self.snap.distance),
            ("snap.margin", self.snap.margin),
            ("resize.area_thickness", self.resize.area_thickness),
            ("resize.fallback_min_width", self.resize.fallback_min_width),
            ("resize.fallback_min_height", self.resize.fallback_min_height),
            ("inertia.stationary_threshold_ms", self.inertia.stationary_threshold_ms),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite(field));
            }
            if value < 0.0 {
                return Err(GeometryError::InvalidConfig {
                    field,
                    reason: "must not be negative",
                });
            }
        }

        let positive = [
            ("inertia.friction", self.inertia.friction),
            ("inertia.gravity", self.inertia.gravity),
            ("inertia.pixels_per_inch", self.inertia.pixels_per_inch),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite(field));
            }
            if value <= 0.0 {
                return Err(GeometryError::InvalidConfig {
                    field,
                    reason: "must be positive",
                });
            }
        }
        Ok(())
    }
}
