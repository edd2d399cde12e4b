//! The bounce loop.
//!
//! A camera ray is followed from surface to surface by mirror reflection.
//! Each surface it meets is shaded against all lights, scaled by the energy
//! still carried by the ray, which shrinks by the surface's reflectivity at
//! every bounce. The loop stops when the ray escapes or after `depth`
//! bounces.

use glint_core::{Light, Shape};
use glint_math::{reflect, Ray, Vec3};

use crate::query::nearest;
use crate::shading::{shade, SurfacePoint};
use crate::Rgb;

/// One visited surface along a traced path.
#[derive(Debug, Clone, Copy)]
pub struct Bounce {
    /// Where the ray hit
    pub point: Vec3,
    /// Unit surface normal at `point`
    pub normal: Vec3,
    /// Fraction of energy carried into this bounce
    pub weight: f64,
    /// Weighted light reflected towards the previous ray
    pub radiance: Rgb,
}

/// Iterator over the bounces of a single camera ray.
pub struct Bounces<'a> {
    shapes: &'a [Shape],
    lights: &'a [Light],
    camera_position: Vec3,
    ray: Ray,
    weight: f64,
    remaining: u32,
}

impl<'a> Bounces<'a> {
    /// Start a path at `ray`, which must have a unit direction.
    ///
    /// # Panics
    ///
    /// Debug builds panic on a non-unit direction. Release builds do not
    /// check it, and distances along such a ray are scaled by its length.
    pub fn new(
        ray: Ray,
        depth: u32,
        shapes: &'a [Shape],
        lights: &'a [Light],
        camera_position: Vec3,
    ) -> Self {
        debug_assert!(
            (ray.direction.length_squared() - 1.0).abs() < 1e-9,
            "ray direction must be unit length"
        );

        Self {
            shapes,
            lights,
            camera_position,
            ray,
            weight: 1.0,
            remaining: depth,
        }
    }
}

impl Iterator for Bounces<'_> {
    type Item = Bounce;

    fn next(&mut self) -> Option<Bounce> {
        if self.remaining == 0 {
            return None;
        }

        let Some(hit) = nearest(self.shapes, &self.ray) else {
            // Escaped; nothing further can be hit
            self.remaining = 0;
            return None;
        };
        self.remaining -= 1;

        let point = self.ray.at(hit.distance);
        let surface = SurfacePoint::new(hit.shape, point);
        let weight = self.weight;
        let radiance = weight * shade(self.shapes, &surface, self.lights, self.camera_position);

        self.weight *= hit.shape.material().reflectivity;
        self.ray = Ray::new(
            surface.offset_point,
            reflect(self.ray.direction, surface.normal),
        );

        Some(Bounce {
            point,
            normal: surface.normal,
            weight,
            radiance,
        })
    }
}

/// Color seen along `ray`, following up to `depth` mirror bounces.
///
/// The result is unbounded linear RGB; tone mapping is up to the caller.
/// `ray` must have a unit direction, checked in debug builds only (see
/// [`Bounces::new`]).
pub fn trace_ray(
    ray: Ray,
    depth: u32,
    shapes: &[Shape],
    lights: &[Light],
    camera_position: Vec3,
) -> Rgb {
    Bounces::new(ray, depth, shapes, lights, camera_position)
        .map(|bounce| bounce.radiance)
        .sum()
}
