//! Sphere primitive.

use std::f64::consts::{PI, TAU};

use glint_math::{Ray, Vec3};

use super::Surface;

/// A sphere given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    pub surface: Surface,
}

impl Sphere {
    /// Create a new sphere. `radius` must be positive; the scene loader
    /// rejects anything else.
    pub fn new(center: Vec3, radius: f64, surface: Surface) -> Self {
        Self {
            center,
            radius,
            surface,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Solve `t² + b·t + c = 0` for a unit-direction ray.
    ///
    /// A hit is reported only when both roots lie in front of the origin, so
    /// a ray starting inside the sphere sees nothing.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let oc = ray.origin - self.center;
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b - sqrtd) / 2.0;
        let t2 = (-b + sqrtd) / 2.0;

        if t1 > 0.0 && t2 > 0.0 {
            Some(t1.min(t2))
        } else {
            None
        }
    }

    pub fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }

    /// Spherical coordinates of `point`, each mapped onto `[0, scale)`.
    ///
    /// `u` follows the azimuth around +Y starting from -X, `v` the polar
    /// angle down from +Y (the south pole itself lands on `scale`).
    pub fn uv_map(&self, point: Vec3, scale: f64) -> (f64, f64) {
        let p = point - self.center;

        // The hit point may sit a rounding error outside the surface
        let polar = (p.y / self.radius).clamp(-1.0, 1.0).acos();
        let azimuth = p.z.atan2(p.x);

        let u = ((azimuth + PI) / TAU).rem_euclid(1.0) * scale;
        let v = polar / PI * scale;
        (u, v)
    }
}
