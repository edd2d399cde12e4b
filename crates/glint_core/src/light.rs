//! Point lights.

use glint_math::Vec3;

use crate::Color;

/// A point light. Its color components are pre-scaled by the intensity
/// given at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    position: Vec3,
    color: Color,
}

impl Light {
    pub fn new(position: Vec3, color: Color, intensity: f64) -> Self {
        Self {
            position,
            color: color.scaled(intensity),
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn ambient(&self) -> Vec3 {
        self.color.ambient
    }

    #[inline]
    pub fn diffuse(&self) -> Vec3 {
        self.color.diffuse
    }

    #[inline]
    pub fn specular(&self) -> Vec3 {
        self.color.specular
    }
}
