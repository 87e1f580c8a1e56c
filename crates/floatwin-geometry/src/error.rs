//! Error types for the window geometry engines
//!
//! Engine calls made during a live drag never fail; they express "nothing to
//! do" through `Option`. These errors are returned only by the explicit
//! validation entry points that hosts may call when loading constraints or
//! configuration.

/// Axis a constraint applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Width / X axis
    Horizontal,
    /// Height / Y axis
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Errors reported by geometry validation
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Minimum size is larger than maximum size on one axis
    InvalidConstraints {
        /// Offending axis
        axis: Axis,
        /// Declared minimum
        min: f64,
        /// Declared maximum
        max: f64,
    },

    /// A value that must be finite was NaN or infinite
    NonFinite(&'static str),

    /// A configuration field is out of its legal range
    InvalidConfig {
        /// Field name
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// A flat `[x, y, w, h, ...]` array whose length is not a multiple of 4
    MalformedRects(usize),
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConstraints { axis, min, max } => {
                write!(f, "invalid {} constraints: min {} > max {}", axis, min, max)
            }
            Self::NonFinite(what) => write!(f, "non-finite value: {}", what),
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::MalformedRects(len) => {
                write!(f, "rect array length {} is not a multiple of 4", len)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Result type alias for geometry validation
pub type GeometryResult<T> = Result<T, GeometryError>;
