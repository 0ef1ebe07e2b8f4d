//! Bounding Volume Hierarchy (BVH) acceleration structure.
//!
//! Uses a binary tree structure for efficient ray-scene intersection testing.
//! Boxes are built over a shutter window, so moving primitives are enclosed
//! for every ray time the window can produce.

use std::fmt;

use crate::{HitRecord, Hittable, Ray};
use blur_math::{Aabb, Interval};

/// Maximum primitives per leaf node before splitting.
const LEAF_MAX_SIZE: usize = 4;

/// BVH node - either a branch with two children or a leaf with primitives.
pub enum BvhNode {
    /// Internal node with two children.
    Branch {
        left: Box<BvhNode>,
        right: Box<BvhNode>,
        bbox: Aabb,
    },
    /// Leaf node with a small number of primitives.
    Leaf {
        objects: Vec<Box<dyn Hittable>>,
        bbox: Aabb,
    },
    /// Empty node (for edge cases).
    Empty,
}

impl BvhNode {
    /// Create a BVH from a list of hittable objects.
    ///
    /// Every node box covers its objects over `[time_start, time_end]`; rays
    /// with times outside that window may be culled incorrectly.
    pub fn new(objects: Vec<Box<dyn Hittable>>, time_start: f32, time_end: f32) -> Self {
        if objects.is_empty() {
            return BvhNode::Empty;
        }

        let count = objects.len();
        let boxed = objects
            .into_iter()
            .map(|object| {
                let bbox = object.bounding_box(time_start, time_end);
                (object, bbox)
            })
            .collect();

        let bvh = Self::build(boxed);
        log::debug!(
            "Built BVH over {} objects for shutter [{}, {}], depth {}",
            count,
            time_start,
            time_end,
            bvh.depth()
        );
        bvh
    }

    /// Recursive BVH construction.
    ///
    /// Simple median-split approach: sort objects by centroid on longest axis,
    /// split in half, recurse.
    fn build(mut objects: Vec<(Box<dyn Hittable>, Aabb)>) -> Self {
        let bounds = objects
            .iter()
            .fold(Aabb::EMPTY, |acc, (_, b)| Aabb::surrounding(&acc, b));

        if objects.len() <= LEAF_MAX_SIZE {
            return BvhNode::Leaf {
                objects: objects.into_iter().map(|(object, _)| object).collect(),
                bbox: bounds,
            };
        }

        // Choose split axis based on centroid spread
        let centroid_bounds = objects.iter().fold(Aabb::EMPTY, |acc, (_, b)| {
            let c = b.centroid();
            Aabb::surrounding(&acc, &Aabb::from_points(c, c))
        });
        let axis = centroid_bounds.longest_axis();

        objects.sort_unstable_by(|(_, a), (_, b)| {
            let a_val = a.centroid()[axis];
            let b_val = b.centroid()[axis];
            a_val
                .partial_cmp(&b_val)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mid = objects.len() / 2;
        let right_objects = objects.split_off(mid);
        let left_objects = objects;

        BvhNode::Branch {
            left: Box::new(Self::build(left_objects)),
            right: Box::new(Self::build(right_objects)),
            bbox: bounds,
        }
    }

    /// Depth of the tree (a lone leaf has depth 1).
    pub fn depth(&self) -> usize {
        match self {
            BvhNode::Empty => 0,
            BvhNode::Leaf { .. } => 1,
            BvhNode::Branch { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn bbox(&self) -> Aabb {
        match self {
            BvhNode::Empty => Aabb::EMPTY,
            BvhNode::Leaf { bbox, .. } => *bbox,
            BvhNode::Branch { bbox, .. } => *bbox,
        }
    }
}

impl fmt::Debug for BvhNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BvhNode::Empty => f.write_str("BvhNode::Empty"),
            BvhNode::Leaf { objects, bbox } => f
                .debug_struct("BvhNode::Leaf")
                .field("objects", &objects.len())
                .field("bbox", bbox)
                .finish(),
            BvhNode::Branch { bbox, .. } => f
                .debug_struct("BvhNode::Branch")
                .field("depth", &self.depth())
                .field("bbox", bbox)
                .finish(),
        }
    }
}

impl Hittable for BvhNode {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            BvhNode::Empty => None,

            BvhNode::Leaf { objects, bbox } => {
                if !bbox.hit(ray, ray_t) {
                    return None;
                }

                let mut closest: Option<HitRecord<'_>> = None;
                for obj in objects {
                    let max = closest.as_ref().map_or(ray_t.max, |rec| rec.t);
                    if let Some(rec) = obj.hit(ray, Interval::new(ray_t.min, max)) {
                        closest = Some(rec);
                    }
                }
                closest
            }

            BvhNode::Branch { left, right, bbox } => {
                if !bbox.hit(ray, ray_t) {
                    return None;
                }

                let hit_left = left.hit(ray, ray_t);

                // Only check right up to closest hit
                let right_max = hit_left.as_ref().map_or(ray_t.max, |rec| rec.t);
                let hit_right = right.hit(ray, Interval::new(ray_t.min, right_max));

                hit_right.or(hit_left)
            }
        }
    }

    /// Box computed at build time over the build shutter window.
    fn bounding_box(&self, _time_start: f32, _time_end: f32) -> Aabb {
        self.bbox()
    }
}
