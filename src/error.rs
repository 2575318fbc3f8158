//! Error types for the simulation.
//!
//! Geometry failures (zero-length projections), infeasible placements and
//! configuration problems all surface as [`SimError`].

use std::fmt;

/// Errors that can occur while building or stepping a simulation.
#[derive(Debug)]
pub enum SimError {
    /// Projection onto a zero-length vector.
    ZeroProjection,
    /// Two bodies share the exact same center, so no line of contact exists.
    CoincidentCenters { first: usize, second: usize },
    /// Rejection sampling ran out of attempts before all bodies were placed.
    PlacementInfeasible {
        placed: usize,
        requested: usize,
        attempts: u32,
    },
    /// Bounds must have positive, finite extents.
    InvalidBounds { width: f32, height: f32 },
    /// Settings failed validation.
    InvalidSettings(String),
    /// Failed to read a settings file.
    Io(std::io::Error),
    /// Failed to parse or emit JSON.
    Json(serde_json::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::ZeroProjection => write!(f, "Cannot project onto a zero-length vector"),
            SimError::CoincidentCenters { first, second } => write!(
                f,
                "Bodies {} and {} have coincident centers; no contact normal exists",
                first, second
            ),
            SimError::PlacementInfeasible {
                placed,
                requested,
                attempts,
            } => write!(
                f,
                "Placed {} of {} bodies before giving up after {} attempts; bounds are too crowded",
                placed, requested, attempts
            ),
            SimError::InvalidBounds { width, height } => {
                write!(f, "Invalid bounds {}x{}: extents must be positive", width, height)
            }
            SimError::InvalidSettings(msg) => write!(f, "Invalid settings: {}", msg),
            SimError::Io(e) => write!(f, "I/O error: {}", e),
            SimError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io(e) => Some(e),
            SimError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        SimError::Io(e)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Json(e)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimError>;
