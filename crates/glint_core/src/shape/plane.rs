//! Infinite plane primitive.

use glint_math::{tangent_basis, Ray, Vec3};

use super::Surface;

/// The plane `normal · x = distance`.
///
/// The tangent axes used for pattern mapping are derived from the normal
/// once, at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vec3,
    distance: f64,
    u_axis: Vec3,
    v_axis: Vec3,
    pub surface: Surface,
}

impl Plane {
    /// Create a new plane. `normal` is normalized here and must be non-zero.
    pub fn new(normal: Vec3, distance: f64, surface: Surface) -> Self {
        let normal = normal.normalize();
        let (u_axis, v_axis) = tangent_basis(normal);

        Self {
            normal,
            distance,
            u_axis,
            v_axis,
            surface,
        }
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Tangent axes (U, V).
    #[inline]
    pub fn axes(&self) -> (Vec3, Vec3) {
        (self.u_axis, self.v_axis)
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let denom = self.normal.dot(ray.direction);
        if denom == 0.0 {
            return None;
        }

        let t = (self.distance - self.normal.dot(ray.origin)) / denom;
        (t > 0.0).then_some(t)
    }

    /// The normal is the same everywhere on the plane.
    pub fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    /// Project `point` back onto the plane, then onto the tangent axes.
    pub fn uv_map(&self, point: Vec3, scale: f64) -> (f64, f64) {
        let on_plane = point - (point.dot(self.normal) - self.distance) * self.normal;
        (
            on_plane.dot(self.u_axis) * scale,
            on_plane.dot(self.v_axis) * scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Material};

    fn plane(normal: Vec3, distance: f64) -> Plane {
        Plane::new(
            normal,
            distance,
            Surface::new(Color::uniform(Vec3::splat(0.5)), Material::new(50.0, 0.2)),
        )
    }

    #[test]
    fn test_plane_hit() {
        let floor = plane(Vec3::Y, -1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Y);

        let t = floor.intersect(&ray).expect("ray should hit the floor");
        assert!((t - 1.0).abs() < 1e-12);
        assert_eq!(floor.normal(ray.at(t)), Vec3::Y);
    }

    #[test]
    fn test_parallel_ray_misses() {
        for distance in [-3.0, 0.0, 2.5] {
            let floor = plane(Vec3::Y, distance);
            let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 1.0).normalize());
            assert_eq!(floor.intersect(&ray), None);
        }
    }

    #[test]
    fn test_plane_behind_origin_misses() {
        let floor = plane(Vec3::Y, -1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(floor.intersect(&ray), None);
    }

    #[test]
    fn test_normal_is_normalized_and_constant() {
        let tilted = plane(Vec3::new(0.0, 2.0, 2.0), 1.0);
        let n = tilted.normal(Vec3::ZERO);

        assert!((n.length() - 1.0).abs() < 1e-12);
        assert_eq!(n, tilted.normal(Vec3::new(10.0, -4.0, 3.0)));
    }

    #[test]
    fn test_axes_orthonormal() {
        let tilted = plane(Vec3::new(1.0, 1.0, 0.0), 0.0);
        let n = tilted.normal(Vec3::ZERO);
        let (u, v) = tilted.axes();

        assert!(u.dot(v).abs() < 1e-12);
        assert!(u.dot(n).abs() < 1e-12);
        assert!(v.dot(n).abs() < 1e-12);
    }

    #[test]
    fn test_uv_map_ignores_normal_offset() {
        let floor = plane(Vec3::Y, -1.0);
        let on_surface = Vec3::new(0.3, -1.0, 0.7);
        let lifted = on_surface + 1e-5 * Vec3::Y;

        let (u0, v0) = floor.uv_map(on_surface, 5.0);
        let (u1, v1) = floor.uv_map(lifted, 5.0);
        assert!((u0 - u1).abs() < 1e-12);
        assert!((v0 - v1).abs() < 1e-12);
    }

    #[test]
    fn test_uv_map_scale() {
        let floor = plane(Vec3::Y, 0.0);
        let point = Vec3::new(0.25, 0.0, -0.5);

        let (u1, v1) = floor.uv_map(point, 1.0);
        let (u4, v4) = floor.uv_map(point, 4.0);
        assert!((u4 - 4.0 * u1).abs() < 1e-12);
        assert!((v4 - 4.0 * v1).abs() < 1e-12);
    }
}
