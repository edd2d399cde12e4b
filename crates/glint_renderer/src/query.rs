//! Nearest-hit scan over the scene's shapes.
//!
//! There is no acceleration structure: every query tests every shape.

use glint_core::Shape;
use glint_math::{Interval, Ray, Vec3};

/// The closest shape along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub shape: &'a Shape,
    /// Distance from the ray origin (the ray direction is unit length)
    pub distance: f64,
}

/// Find the nearest shape hit strictly in front of the ray origin.
///
/// When two shapes are hit at the same distance the one listed first wins.
pub fn nearest<'a>(shapes: &'a [Shape], ray: &Ray) -> Option<Hit<'a>> {
    let mut hit = None;
    let mut ray_t = Interval::POSITIVE;

    for shape in shapes {
        let Some(t) = shape.intersect(ray) else {
            continue;
        };
        // Strict bound, so an equal distance later in the list loses
        if ray_t.surrounds(t) {
            ray_t.max = t;
            hit = Some(Hit { shape, distance: t });
        }
    }

    hit
}

/// Whether anything lies between `origin` and a light `light_distance` away
/// in direction `to_light`.
///
/// `origin` should already be pushed off the surface along its normal.
pub fn occluded(shapes: &[Shape], origin: Vec3, to_light: Vec3, light_distance: f64) -> bool {
    nearest(shapes, &Ray::new(origin, to_light))
        .is_some_and(|hit| hit.distance < light_distance)
}
