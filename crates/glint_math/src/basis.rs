//! Small vector helpers shared by the geometry and the tracer.

use crate::Vec3;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Build two tangent axes spanning the plane perpendicular to `normal`.
///
/// The world up axis is the reference; when `normal` is (nearly) parallel to
/// it, +X is used instead. `normal` must be unit length.
pub fn tangent_basis(normal: Vec3) -> (Vec3, Vec3) {
    let up = if normal.dot(Vec3::Y).abs() > 0.999 {
        Vec3::X
    } else {
        Vec3::Y
    };

    let u = up.cross(normal).normalize();
    let v = normal.cross(u);
    (u, v)
}
