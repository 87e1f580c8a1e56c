//! Animation descriptors produced by the engines
//!
//! The engines never animate anything themselves. They hand back a
//! descriptor (currently only the inertial coast) that the host can feed to
//! its own animation system or sample frame by frame with
//! [`InertialMotion::position_at`].

mod coast;
pub mod easing;

pub use coast::InertialMotion;
pub use easing::Easing;
