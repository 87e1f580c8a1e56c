//! Window Geometry for Floating Canvas Windows
//!
//! This crate provides the pure geometry behind interactive windows that
//! float on a bounded canvas:
//! - Snapping a dragged window to canvas and sibling edges
//! - Edge and corner resizing under min/max constraints
//! - Inertial coasting after a fast drag is released
//!
//! ## Architecture
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`, `Vector`)
//! - [`snap`]: Edge alignment against the host and sibling windows
//! - [`resize`]: Anchor detection and constrained resizing
//! - [`inertia`]: Drag sampling and the sliding-friction coast
//! - [`transition`]: Easing curves and the coast animation descriptor
//! - [`window`]: Per-window gesture controller composing the engines
//! - [`config`]: Serializable tunables for every engine
//!
//! ## Example
//!
//! ```rust
//! use floatwin_geometry::{GeometryConfig, Rect, SnapTargets, Vec2, WindowController};
//!
//! let host = Rect::new(0.0, 0.0, 1000.0, 800.0);
//! let window = Rect::new(100.0, 100.0, 200.0, 150.0);
//! let mut controller = WindowController::new(GeometryConfig::default());
//!
//! controller.begin_move(window, Vec2::new(150.0, 110.0), 0.0);
//! let moved = controller
//!     .pointer_move(Vec2::new(56.0, 310.0), window.size(), &SnapTargets::host_only(host), 16.0)
//!     .unwrap();
//! assert_eq!(moved.position(), Vec2::new(0.0, 300.0));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Data in, data out**: engines never own window state or animate; the host applies results
//! 2. **Time Abstraction**: timestamps are passed in by the caller for deterministic testing
//! 3. **No failures mid-gesture**: absence is expressed with `Option`, validation is explicit

pub mod config;
pub mod error;
pub mod inertia;
pub mod math;
pub mod resize;
pub mod snap;
pub mod transition;
pub mod window;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use config::{GeometryConfig, InertiaConfig, ResizeConfig, SnapConfig};
pub use error::{Axis, GeometryError, GeometryResult};
pub use inertia::{InertiaEngine, MotionSample};
pub use math::{Rect, Size, Vec2, Vector};
pub use resize::{ResizeAnchor, ResizeEngine, SizeConstraints};
pub use snap::{SnapEngine, SnapTargets};
pub use transition::{Easing, InertialMotion};
pub use window::{Gesture, WindowController};
