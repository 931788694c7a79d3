//! Error types for the geometry kernel.
//!
//! Degenerate geometry (parallel lines, empty overlaps) is never an error and is
//! reported through `Option`. These variants only describe broken preconditions,
//! returned by the `try_` twins of the panicking accessors.

/// Errors raised when a geometric precondition does not hold.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Error for grid access outside the field.
    /// This variant is returned when a point cannot be mapped to a row-major grid index.
    OutOfBounds(&'static str),
    /// Error for a zero length divisor.
    /// This variant is returned when a vector is normalized by a length of zero.
    ZeroLength(&'static str),
}

impl core::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GeometryError::OutOfBounds(msg) => write!(f, "Point out of bounds: {}", msg),
            GeometryError::ZeroLength(msg) => write!(f, "Zero length: {}", msg),
        }
    }
}

impl core::error::Error for GeometryError {}
