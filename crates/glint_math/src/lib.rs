// Re-export glam for convenience
pub use glam::*;

/// Real-valued 3-vector used for positions, directions and linear RGB.
pub type Vec3 = DVec3;

// Glint math types
mod basis;
mod interval;
mod ray;

pub use basis::{reflect, tangent_basis};
pub use interval::Interval;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_is_double_precision() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let x: f64 = v.x;
        assert_eq!(x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
    }
}
