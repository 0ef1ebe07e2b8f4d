//! Validation errors for geometric inputs.

use thiserror::Error;

/// Errors raised when constructing rays or primitives from invalid values.
///
/// A ray that misses is never an error; these only guard the inputs that
/// would otherwise poison the intersection math with NaNs.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("Ray direction must be finite and non-zero")]
    DegenerateDirection,

    #[error("Ray origin must be finite")]
    NonFiniteOrigin,

    #[error("Ray time must be finite, got {0}")]
    NonFiniteTime(f32),

    #[error("Sphere center must be finite")]
    NonFiniteCenter,

    #[error("Invalid radius: {0} (must be finite and >= 0)")]
    InvalidRadius(f32),

    #[error("Invalid interval [{min}, {max}] (bounds must be finite with min <= max)")]
    InvertedInterval { min: f32, max: f32 },
}

/// Result type for geometry construction.
pub type GeometryResult<T> = Result<T, GeometryError>;
