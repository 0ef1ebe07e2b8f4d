// Re-export glam for convenience
pub use glam::*;

// Blur math types
mod aabb;
mod error;
mod interval;
mod ray;

pub use aabb::Aabb;
pub use error::{GeometryError, GeometryResult};
pub use interval::Interval;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(0.5 * (b - a), Vec3::splat(1.5));
    }

    #[test]
    fn test_unit_interval_clamps_fractions() {
        let window = Interval::new(10.0, 20.0);

        assert_eq!(Interval::UNIT.clamp(window.fraction(5.0)), 0.0);
        assert_eq!(Interval::UNIT.clamp(window.fraction(15.0)), 0.5);
        assert_eq!(Interval::UNIT.clamp(window.fraction(25.0)), 1.0);
    }
}
