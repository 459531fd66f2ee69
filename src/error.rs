//! Error type shared by every fallible operation in the crate.
//!
//! Construction-time problems (bad colliders, bad mass, bad configuration)
//! and container exhaustion are reported as [`PhysicsError`]. The stepper
//! itself never fails: degenerate geometry inside a tick falls back to
//! "no collision" or "no impulse".

use core::fmt;

/// Unified error type for physics operations.
#[derive(Clone, Debug, PartialEq)]
pub enum PhysicsError {
    /// A bounded container is full.
    CapacityExceeded {
        /// What resource was exhausted
        resource: &'static str,
        /// The limit that was hit
        limit: usize,
    },
    /// A collider needs at least three vertices.
    TooFewVertices { count: usize },
    /// A collider has more vertices than [`crate::collider::MAX_COLLIDER_VERTICES`].
    TooManyVertices { count: usize, limit: usize },
    /// A collider vertex has a NaN or infinite coordinate.
    NonFiniteVertex { index: usize },
    /// Mass must be positive and finite.
    InvalidMass { mass: f64 },
    /// Invalid configuration parameter.
    InvalidConfiguration {
        /// Description of the invalid configuration
        reason: &'static str,
    },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { resource, limit } => {
                write!(f, "{resource} capacity exceeded (limit={limit})")
            }
            Self::TooFewVertices { count } => {
                write!(f, "collider needs at least 3 vertices, got {count}")
            }
            Self::TooManyVertices { count, limit } => {
                write!(f, "collider has {count} vertices (limit={limit})")
            }
            Self::NonFiniteVertex { index } => {
                write!(f, "collider vertex {index} is not finite")
            }
            Self::InvalidMass { mass } => {
                write!(f, "mass must be positive and finite, got {mass}")
            }
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PhysicsError {}
