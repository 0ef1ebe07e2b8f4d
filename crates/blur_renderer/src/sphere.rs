//! Stationary sphere primitive and the shared ray/sphere solve.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, MaterialRef, Ray,
};
use blur_math::{Aabb, GeometryError, GeometryResult, Interval, Vec3};

/// A sphere primitive.
#[derive(Debug)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: MaterialRef,
    bbox: Aabb,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Fails if the radius is negative or not finite, or the center is not finite.
    pub fn new(center: Vec3, radius: f32, material: MaterialRef) -> GeometryResult<Self> {
        let radius = validate_radius(radius)?;
        if !center.is_finite() {
            return Err(GeometryError::NonFiniteCenter);
        }
        let rvec = Vec3::splat(radius);
        let bbox = Aabb::from_points(center - rvec, center + rvec);

        Ok(Self {
            center,
            radius,
            material,
            bbox,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &MaterialRef {
        &self.material
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        hit_sphere(self.center, self.radius, self.material.as_ref(), ray, ray_t)
    }

    fn bounding_box(&self, _time_start: f32, _time_end: f32) -> Aabb {
        self.bbox
    }
}

/// Reject radii that would break the intersection math.
pub(crate) fn validate_radius(radius: f32) -> GeometryResult<f32> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(GeometryError::InvalidRadius(radius));
    }
    if radius == 0.0 {
        log::warn!("Sphere with zero radius has no surface and will never be hit");
    }
    Ok(radius)
}

/// Intersect a ray with the sphere `|x - center| = radius`.
///
/// Solves `|O + tD - C|^2 = r^2` using the half-b form of the quadratic and
/// returns the smaller root in `ray_t`, falling back to the larger one.
pub(crate) fn hit_sphere<'a>(
    center: Vec3,
    radius: f32,
    material: &'a dyn Material,
    ray: &Ray,
    ray_t: Interval,
) -> Option<HitRecord<'a>> {
    // A point has no surface to report a normal for
    if radius <= 0.0 {
        return None;
    }

    let oc = center - ray.origin();
    let a = ray.direction().length_squared();
    let h = ray.direction().dot(oc);
    let c = oc.length_squared() - radius * radius;

    let discriminant = h * h - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();

    // Find the nearest root in the acceptable range
    let root = [(h - sqrtd) / a, (h + sqrtd) / a]
        .into_iter()
        .find(|&root| ray_t.contains(root))?;

    let p = ray.at(root);
    let outward_normal = (p - center) / radius;
    Some(HitRecord::new(ray, root, outward_normal, material))
}
