//! Material handles shared between primitives.
//!
//! Primitives never own their material outright: every primitive holds a
//! [`MaterialRef`], and many primitives may point at the same material.
//! Shading lives outside this crate, so the trait only exposes surface data.

use std::fmt;
use std::sync::Arc;

use blur_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Shared, thread-safe handle to a material.
pub type MaterialRef = Arc<dyn Material>;

/// Trait for surface materials attached to primitives.
pub trait Material: Send + Sync + fmt::Debug {
    /// Base reflectance of the surface.
    fn albedo(&self) -> Color;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    /// Create a Lambertian material already wrapped in a shared handle.
    pub fn shared(albedo: Color) -> MaterialRef {
        Arc::new(Self::new(albedo))
    }
}

impl Material for Lambertian {
    fn albedo(&self) -> Color {
        self.albedo
    }
}
