use crate::{GeometryError, GeometryResult, Vec3};

/// A ray in 3D space with origin, direction, and time.
///
/// The `time` field selects where moving primitives are when the ray is
/// traced. The direction is never zero-length, which keeps the quadratic
/// term of every intersection solve non-zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    time: f32,
}

impl Ray {
    /// Create a new ray.
    ///
    /// The direction does not need to be normalized, but it must be finite
    /// and non-zero. The origin and time must be finite.
    pub fn new(origin: Vec3, direction: Vec3, time: f32) -> GeometryResult<Self> {
        if !origin.is_finite() {
            return Err(GeometryError::NonFiniteOrigin);
        }
        if !time.is_finite() {
            return Err(GeometryError::NonFiniteTime(time));
        }
        if !direction.is_finite() || direction.length_squared() <= 0.0 {
            return Err(GeometryError::DegenerateDirection);
        }
        Ok(Self {
            origin,
            direction,
            time,
        })
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the time value of the ray (used for motion blur).
    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
