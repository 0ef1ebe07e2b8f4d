//! Sphere whose center travels linearly over a motion window.
//!
//! The center sits at `center_start` up to the start of the window, slides
//! linearly to `center_end` across it, and stays there afterwards. Rays are
//! intersected against the sphere at the ray's own time, which is what
//! produces motion blur when ray times are spread over a shutter interval.

use crate::{
    hittable::{HitRecord, Hittable},
    sphere::{hit_sphere, validate_radius},
    MaterialRef, Ray,
};
use blur_math::{Aabb, GeometryError, GeometryResult, Interval, Vec3};

/// A sphere moving linearly between two centers.
#[derive(Debug)]
pub struct MovingSphere {
    center_start: Vec3,
    center_end: Vec3,
    motion: Interval,
    radius: f32,
    material: MaterialRef,
}

impl MovingSphere {
    /// Create a new moving sphere.
    ///
    /// `motion` is the time window `[t0, t1]` over which the center moves
    /// from `center_start` to `center_end`. A zero-length window is allowed
    /// and pins the sphere at `center_start`.
    pub fn new(
        center_start: Vec3,
        center_end: Vec3,
        radius: f32,
        motion: Interval,
        material: MaterialRef,
    ) -> GeometryResult<Self> {
        let radius = validate_radius(radius)?;
        let motion = Interval::try_new(motion.min, motion.max)?;
        if !center_start.is_finite() || !center_end.is_finite() {
            return Err(GeometryError::NonFiniteCenter);
        }
        if motion.size() == 0.0 && center_start != center_end {
            log::warn!(
                "Moving sphere has a zero-length motion window at t={}; it stays at {}",
                motion.min,
                center_start
            );
        }

        Ok(Self {
            center_start,
            center_end,
            motion,
            radius,
            material,
        })
    }

    /// Center of the sphere at the given time.
    pub fn center(&self, time: f32) -> Vec3 {
        let t = Interval::UNIT.clamp(self.motion.fraction(time));
        self.center_start + t * (self.center_end - self.center_start)
    }

    pub fn center_start(&self) -> Vec3 {
        self.center_start
    }

    pub fn center_end(&self) -> Vec3 {
        self.center_end
    }

    pub fn motion(&self) -> Interval {
        self.motion
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &MaterialRef {
        &self.material
    }

    /// Box around the sphere at a single instant.
    fn box_at(&self, time: f32) -> Aabb {
        let center = self.center(time);
        let rvec = Vec3::splat(self.radius);
        Aabb::from_points(center - rvec, center + rvec)
    }
}

impl Hittable for MovingSphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let center = self.center(ray.time());
        hit_sphere(center, self.radius, self.material.as_ref(), ray, ray_t)
    }

    /// Union of the boxes at both ends of the window.
    ///
    /// The center moves along a straight line, so its extremes over any
    /// window are reached at the window's ends and two boxes suffice.
    fn bounding_box(&self, time_start: f32, time_end: f32) -> Aabb {
        Aabb::surrounding(&self.box_at(time_start), &self.box_at(time_end))
    }
}
