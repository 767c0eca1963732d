//! # Error Types
//!
//! Errors returned by the validating `try_*` constructors and queries. The
//! plain `new` constructors never fail.
//!
//! ## Error Policy
//!
//! - Zero dimensions are accepted; they collapse results to zero
//! - Negative, NaN and infinite dimensions are rejected
//! - Errors carry the offending values for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors describing non-physical shape input.
///
/// ## Example
///
/// ```rust
/// use geo_shapes::{ShapeError, Sphere};
///
/// match Sphere::try_new(-1.0) {
///     Ok(sphere) => println!("volume {}", sphere.volume()),
///     Err(ShapeError::InvalidDimension { name, value, .. }) => {
///         eprintln!("bad {name}: {value}")
///     }
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A dimension is negative, NaN or infinite.
    #[error("{shape} {name} must be finite and non-negative, got {value}")]
    InvalidDimension {
        /// Shape being constructed, e.g. `"Cylinder"`.
        shape: &'static str,
        /// Name of the offending dimension, e.g. `"radius"`.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The three sides cannot form a triangle.
    ///
    /// Degenerate (collinear) triangles are not reported here; only sides
    /// where one exceeds the sum of the other two.
    #[error("sides ({a}, {b}, {c}) violate the triangle inequality")]
    InvalidTriangle {
        /// First side.
        a: f64,
        /// Second side.
        b: f64,
        /// Third side.
        c: f64,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for shape construction.
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Checks that `value` is a usable length for `shape`'s `name` dimension.
pub(crate) fn check_dimension(
    shape: &'static str,
    name: &'static str,
    value: f64,
) -> ShapeResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        tracing::debug!(shape, name, value, "rejected dimension");
        Err(ShapeError::InvalidDimension { shape, name, value })
    }
}

// =============================================================================
// TESTS
// =============================================================================
