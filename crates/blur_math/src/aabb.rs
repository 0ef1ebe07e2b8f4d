use crate::{Interval, Ray, Vec3};

/// Minimum extent of any box axis, so flat boxes still register slab hits.
const MIN_EXTENT: f32 = 0.0001;

/// Axis-Aligned Bounding Box for spatial acceleration structures (BVH).
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create an AABB from two corner points, in any order.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        let min = a.min(b);
        let max = a.max(b);

        let mut aabb = Self {
            x: Interval::new(min.x, max.x),
            y: Interval::new(min.y, max.y),
            z: Interval::new(min.z, max.z),
        };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&box0.x, &box1.x),
            y: Interval::surrounding(&box0.y, &box1.y),
            z: Interval::surrounding(&box0.z, &box1.z),
        }
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Returns true if the point lies inside or on the box.
    pub fn contains(&self, p: Vec3) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y) && self.z.contains(p.z)
    }

    /// Test if a ray intersects this AABB within the given interval.
    ///
    /// Uses the slab method - efficient ray-box intersection test.
    pub fn hit(&self, r: &Ray, mut ray_t: Interval) -> bool {
        let ray_orig = r.origin();
        let ray_dir = r.direction();

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let adinv = 1.0 / ray_dir[axis];

            let mut t0 = (slab.min - ray_orig[axis]) * adinv;
            let mut t1 = (slab.max - ray_orig[axis]) * adinv;
            if adinv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            ray_t.min = t0.max(ray_t.min);
            ray_t.max = t1.min(ray_t.max);
            if ray_t.max <= ray_t.min {
                return false;
            }
        }

        true
    }

    /// Pad intervals to avoid zero-width AABBs (degenerate cases).
    fn pad_to_minimums(&mut self) {
        if self.x.size() < MIN_EXTENT {
            self.x = self.x.expand(MIN_EXTENT);
        }
        if self.y.size() < MIN_EXTENT {
            self.y = self.y.expand(MIN_EXTENT);
        }
        if self.z.size() < MIN_EXTENT {
            self.z = self.z.expand(MIN_EXTENT);
        }
    }

    /// Returns the index (0=X, 1=Y, 2=Z) of the axis with the longest extent.
    pub fn longest_axis(&self) -> usize {
        let x_size = self.x.size();
        let y_size = self.y.size();
        let z_size = self.z.size();

        if x_size > y_size && x_size > z_size {
            0
        } else if y_size > z_size {
            1
        } else {
            2
        }
    }

    /// Returns the center point of the bounding box.
    pub fn centroid(&self) -> Vec3 {
        Vec3::new(
            (self.x.min + self.x.max) * 0.5,
            (self.y.min + self.y.max) * 0.5,
            (self.z.min + self.z.max) * 0.5,
        )
    }

    /// Per-axis extent of the box.
    pub fn extent(&self) -> Vec3 {
        Vec3::new(self.x.size(), self.y.size(), self.z.size())
    }

    /// The box that contains nothing; the identity for `surrounding`.
    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_points() {
        let aabb = Aabb::from_points(Vec3::new(10.0, 0.0, 10.0), Vec3::new(0.0, 10.0, 0.0));

        assert_eq!(aabb.x, Interval::new(0.0, 10.0));
        assert_eq!(aabb.y, Interval::new(0.0, 10.0));
        assert_eq!(aabb.z, Interval::new(0.0, 10.0));
    }

    #[test]
    fn test_aabb_from_points_pads_flat_axis() {
        let aabb = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0));

        assert!(aabb.y.size() > 0.0);
        assert!(aabb.y.contains(0.0));
        assert_eq!(aabb.x.size(), 1.0);
    }

    #[test]
    fn test_aabb_surrounding() {
        let box1 = Aabb::from_points(Vec3::ZERO, Vec3::new(5.0, 5.0, 5.0));
        let box2 = Aabb::from_points(Vec3::new(3.0, -2.0, 3.0), Vec3::new(10.0, 4.0, 10.0));
        let surrounding = Aabb::surrounding(&box1, &box2);

        assert_eq!(surrounding.x, Interval::new(0.0, 10.0));
        assert_eq!(surrounding.y, Interval::new(-2.0, 5.0));
        assert_eq!(Aabb::surrounding(&Aabb::EMPTY, &box1), box1);
    }

    #[test]
    fn test_aabb_contains() {
        let aabb = Aabb::from_points(Vec3::splat(-1.0), Vec3::splat(1.0));

        assert!(aabb.contains(Vec3::ZERO));
        assert!(aabb.contains(Vec3::new(1.0, -1.0, 1.0)));
        assert!(!aabb.contains(Vec3::new(1.1, 0.0, 0.0)));
        assert!(!Aabb::EMPTY.contains(Vec3::ZERO));
    }

    #[test]
    fn test_aabb_hit() {
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));

        // Ray pointing at center
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0), 0.0).unwrap();
        assert!(aabb.hit(&ray, Interval::new(0.0, 100.0)));

        // Ray pointing away
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0), 0.0).unwrap();
        assert!(!aabb.hit(&ray, Interval::new(0.0, 100.0)));

        // Ray missing the box
        let ray = Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0), 0.0).unwrap();
        assert!(!aabb.hit(&ray, Interval::new(0.0, 100.0)));

        // Box lies beyond the allowed range
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0), 0.0).unwrap();
        assert!(!aabb.hit(&ray, Interval::new(0.0, 3.0)));
    }

    #[test]
    fn test_aabb_centroid_and_extent() {
        let aabb = Aabb::from_points(Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 4.0, 2.0));

        assert_eq!(aabb.centroid(), Vec3::new(5.0, 2.0, 1.0));
        assert_eq!(aabb.extent(), Vec3::new(10.0, 4.0, 2.0));
    }

    #[test]
    fn test_aabb_longest_axis() {
        let aabb_x = Aabb::from_points(Vec3::ZERO, Vec3::new(10.0, 1.0, 1.0));
        assert_eq!(aabb_x.longest_axis(), 0);

        let aabb_y = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 10.0, 1.0));
        assert_eq!(aabb_y.longest_axis(), 1);

        let aabb_z = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 1.0, 10.0));
        assert_eq!(aabb_z.longest_axis(), 2);
    }
}
