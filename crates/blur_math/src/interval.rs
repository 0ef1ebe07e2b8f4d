use crate::{GeometryError, GeometryResult};

/// A closed interval `[min, max]` over `f32`.
///
/// Used both for ray parameter ranges and for time windows (shutter and
/// per-primitive motion).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Create an interval, rejecting non-finite bounds and `min > max`.
    ///
    /// Zero-length intervals are accepted.
    pub fn try_new(min: f32, max: f32) -> GeometryResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(GeometryError::InvertedInterval { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    ///
    /// An empty interval has nothing to clamp to and returns x unchanged.
    pub fn clamp(&self, x: f32) -> f32 {
        if self.min.is_nan() || self.max.is_nan() || self.min > self.max {
            return x;
        }
        x.clamp(self.min, self.max)
    }

    /// Relative position of x within the interval: 0 at min, 1 at max.
    ///
    /// Not clamped, so values outside the interval map outside [0, 1].
    /// A zero-length (or empty) interval has no meaningful position and
    /// always yields 0.
    pub fn fraction(&self, x: f32) -> f32 {
        let size = self.size();
        if size > 0.0 {
            (x - self.min) / size
        } else {
            0.0
        }
    }

    /// Expands the interval by delta/2 on each side.
    pub fn expand(&self, delta: f32) -> Interval {
        let padding = delta / 2.0;
        Interval::new(self.min - padding, self.max + padding)
    }

    /// Creates an interval that surrounds two other intervals.
    pub fn surrounding(a: &Interval, b: &Interval) -> Interval {
        Interval::new(a.min.min(b.min), a.max.max(b.max))
    }

    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// A universe interval (contains everything).
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    /// The unit interval [0, 1], used to clamp interpolation fractions.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };
}
