//! Parallel intersection of ray batches.
//!
//! Primitives are immutable and `Sync`, so a whole batch can be traced
//! against one shared scene from many threads using rayon, without locks.

use crate::{HitRecord, Hittable, Ray};
use blur_math::Interval;
use rayon::prelude::*;

/// Intersect every ray in `rays` against `world` in parallel.
///
/// Results are returned in the same order as the input rays.
pub fn intersect_batch<'a>(
    world: &'a dyn Hittable,
    rays: &[Ray],
    ray_t: Interval,
) -> Vec<Option<HitRecord<'a>>> {
    rays.par_iter().map(|ray| world.hit(ray, ray_t)).collect()
}
