//! Blur renderer - motion-blurred primitives for CPU ray tracing.
//!
//! Provides the intersection side of a path tracer: spheres that can move
//! linearly over a motion window, a BVH whose boxes cover a whole shutter
//! interval, and parallel batch intersection. Shading and image output live
//! elsewhere.

mod batch;
mod bvh;
mod hittable;
mod material;
mod moving_sphere;
pub mod scene;
mod sphere;

pub use batch::intersect_batch;
pub use bvh::BvhNode;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Lambertian, Material, MaterialRef};
pub use moving_sphere::MovingSphere;
pub use scene::{SceneDesc, SceneError};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from blur_math
pub use blur_math::{Aabb, GeometryError, Interval, Ray, Vec3};
