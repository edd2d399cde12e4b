//! Phong shading of one surface point against point lights.

use std::f64::consts::PI;

use glint_core::{Color, Light, Shape};
use glint_math::Vec3;

use crate::query::occluded;
use crate::Rgb;

/// Extinction coefficient of air.
pub const ALPHA_AIR: f64 = 1e-5;

/// Light distances are divided by this before attenuation.
pub const ATTENUATION_DISTANCE_SCALING: f64 = 25.0;

/// Offset along the normal applied to secondary ray origins.
///
/// Fixed and scene-scale dependent; very large or very small scenes may
/// show acne or light leaks.
pub const SHADOW_EPSILON: f64 = 1e-5;

/// Falloff for a light `distance` away: exponential extinction over the
/// inverse square law, both on the scaled distance.
#[inline]
pub fn attenuation(distance: f64) -> f64 {
    let scaled = distance / ATTENUATION_DISTANCE_SCALING;
    (-ALPHA_AIR * scaled).exp() / (4.0 * PI * scaled * scaled)
}

/// What the shading engine needs to know about a hit.
#[derive(Debug, Clone, Copy)]
pub struct SurfacePoint {
    /// Exact intersection
    pub point: Vec3,
    /// Unit surface normal at `point`
    pub normal: Vec3,
    /// `point` pushed off the surface by [`SHADOW_EPSILON`]
    pub offset_point: Vec3,
    /// Surface color at `point`, after any pattern
    pub color: Color,
    /// Phong exponent
    pub luster: f64,
}

impl SurfacePoint {
    pub fn new(shape: &Shape, point: Vec3) -> Self {
        let normal = shape.normal(point);
        Self {
            point,
            normal,
            offset_point: point + SHADOW_EPSILON * normal,
            color: shape.surface_color(point),
            luster: shape.material().luster,
        }
    }
}

/// Contribution of a single light, or zero when the light is blocked.
///
/// Neither the diffuse nor the specular cosine is clamped, so a light behind
/// the surface subtracts energy and a negative specular cosine raised to a
/// fractional luster yields NaN.
pub fn shade_light(
    shapes: &[Shape],
    surface: &SurfacePoint,
    light: &Light,
    camera_position: Vec3,
) -> Rgb {
    let to_light = (light.position() - surface.offset_point).normalize();
    let distance = (light.position() - surface.point).length();

    if occluded(shapes, surface.offset_point, to_light, distance) {
        return Rgb::ZERO;
    }

    let color = &surface.color;
    let ambient = color.ambient * light.ambient();
    let diffuse = color.diffuse * light.diffuse() * to_light.dot(surface.normal);

    let to_camera = (camera_position - surface.point).normalize();
    let half_angle = (to_light + to_camera).normalize();
    let specular =
        color.specular * light.specular() * surface.normal.dot(half_angle).powf(surface.luster);

    (ambient + diffuse + specular) * attenuation(distance)
}

/// Sum of every light's contribution at a surface point.
pub fn shade(shapes: &[Shape], surface: &SurfacePoint, lights: &[Light], camera_position: Vec3) -> Rgb {
    lights
        .iter()
        .map(|light| shade_light(shapes, surface, light, camera_position))
        .sum()
}
