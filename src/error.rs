//! Error types for building and addressing a web.

use core::fmt;

/// Errors that can occur while configuring or building a web.
#[derive(Debug, Clone, PartialEq)]
pub enum WebError {
    /// At least one ring (arm beyond the first) is required.
    InvalidRingCount,
    /// At least one radial point per arm is required.
    InvalidSpokeCount,
    /// Radial spacing must be positive and finite.
    InvalidSpacing,
    /// At least one relaxation pass per frame is required.
    InvalidIterations,
    /// The integration time step must be positive and finite.
    InvalidTimeStep,
    /// Damping must be in [0, 1].
    InvalidDamping,
    /// Force rounding resolution must be positive and finite.
    InvalidForceResolution,
    /// Drawing surface must have a positive, finite size.
    InvalidSurface,
    /// Point index is out of bounds.
    PointOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::InvalidRingCount => write!(f, "web needs at least one ring"),
            WebError::InvalidSpokeCount => write!(f, "web needs at least one point per spoke"),
            WebError::InvalidSpacing => write!(f, "spacing must be positive and finite"),
            WebError::InvalidIterations => write!(f, "at least one relaxation pass is required"),
            WebError::InvalidTimeStep => write!(f, "time step must be positive and finite"),
            WebError::InvalidDamping => write!(f, "damping must be in [0, 1]"),
            WebError::InvalidForceResolution => {
                write!(f, "force resolution must be positive and finite")
            }
            WebError::InvalidSurface => write!(f, "surface size must be positive and finite"),
            WebError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
