//! Analytic primitives the tracer can hit.
//!
//! The set of primitives is closed, so `Shape` is an enum that forwards
//! each capability to its variant.

mod plane;
mod sphere;

pub use plane::Plane;
pub use sphere::Sphere;

use glint_math::{Ray, Vec3};

use crate::{Color, Material, Pattern};

/// Appearance shared by every primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub color: Color,
    pub material: Material,
    /// Procedural override for `color`
    pub pattern: Option<Pattern>,
}

impl Surface {
    pub fn new(color: Color, material: Material) -> Self {
        Self {
            color,
            material,
            pattern: None,
        }
    }
}

/// A scene primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Shape {
    /// Create a sphere. `radius` must be positive.
    pub fn sphere(center: Vec3, radius: f64, color: Color, material: Material) -> Self {
        Shape::Sphere(Sphere::new(center, radius, Surface::new(color, material)))
    }

    /// Create a plane `normal · x = distance`. `normal` must be non-zero.
    pub fn plane(normal: Vec3, distance: f64, color: Color, material: Material) -> Self {
        Shape::Plane(Plane::new(normal, distance, Surface::new(color, material)))
    }

    /// Attach a pattern that overrides the fixed color.
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.surface_mut().pattern = Some(pattern);
        self
    }

    pub fn surface(&self) -> &Surface {
        match self {
            Shape::Sphere(sphere) => &sphere.surface,
            Shape::Plane(plane) => &plane.surface,
        }
    }

    fn surface_mut(&mut self) -> &mut Surface {
        match self {
            Shape::Sphere(sphere) => &mut sphere.surface,
            Shape::Plane(plane) => &mut plane.surface,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.surface().color
    }

    #[inline]
    pub fn material(&self) -> Material {
        self.surface().material
    }

    #[inline]
    pub fn pattern(&self) -> Option<Pattern> {
        self.surface().pattern
    }

    /// Distance to the nearest hit in front of the ray origin, if any.
    ///
    /// The ray direction must be unit length.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Plane(plane) => plane.intersect(ray),
        }
    }

    /// Unit surface normal at `point`.
    pub fn normal(&self, point: Vec3) -> Vec3 {
        match self {
            Shape::Sphere(sphere) => sphere.normal(point),
            Shape::Plane(plane) => plane.normal(point),
        }
    }

    /// Pattern coordinates of `point`, stretched by `scale`.
    pub fn uv_map(&self, point: Vec3, scale: f64) -> (f64, f64) {
        match self {
            Shape::Sphere(sphere) => sphere.uv_map(point, scale),
            Shape::Plane(plane) => plane.uv_map(point, scale),
        }
    }

    /// Color at `point`, taken from the pattern when one is attached.
    pub fn surface_color(&self, point: Vec3) -> Color {
        match self.pattern() {
            Some(pattern) => pattern.color_at(self, point),
            None => self.color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey() -> Color {
        Color::new(Vec3::splat(0.1), Vec3::splat(0.5), Vec3::ONE)
    }

    #[test]
    fn test_surface_color_without_pattern() {
        let shape = Shape::sphere(Vec3::ZERO, 1.0, grey(), Material::new(50.0, 0.2));
        assert_eq!(shape.surface_color(Vec3::new(0.0, 1.0, 0.0)), grey());
        assert_eq!(shape.pattern(), None);
    }

    #[test]
    fn test_surface_color_with_pattern() {
        let shape = Shape::plane(Vec3::Y, 0.0, grey(), Material::new(50.0, 0.2))
            .with_pattern(Pattern::checkerboard(1.0));

        let color = shape.surface_color(Vec3::ZERO);
        assert!(color == Color::CHECKER_WHITE || color == Color::CHECKER_BLACK);
        // Fixed color is kept but no longer used
        assert_eq!(shape.color(), grey());
    }

    #[test]
    fn test_dispatch_matches_variant() {
        let sphere = Sphere::new(
            Vec3::ZERO,
            2.0,
            Surface::new(grey(), Material::new(100.0, 0.75)),
        );
        let shape = Shape::Sphere(sphere);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);

        assert_eq!(shape.intersect(&ray), sphere.intersect(&ray));
        assert_eq!(shape.material().luster, 100.0);
    }
}
