//! Phong surface coefficients.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// Ambient, diffuse and specular reflectance of a surface (or emission of a
/// light), each a per-channel RGB triple.
///
/// Channels are expected in [0, 1] but nothing enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Color {
    /// White checkerboard tile.
    pub const CHECKER_WHITE: Color = Color {
        ambient: Vec3::ONE,
        diffuse: Vec3::ONE,
        specular: Vec3::ONE,
    };

    /// Black checkerboard tile. Specular stays white so highlights still show.
    pub const CHECKER_BLACK: Color = Color {
        ambient: Vec3::ZERO,
        diffuse: Vec3::ZERO,
        specular: Vec3::ONE,
    };

    pub fn new(ambient: Vec3, diffuse: Vec3, specular: Vec3) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
        }
    }

    /// Same RGB value for all three components.
    pub fn uniform(rgb: Vec3) -> Self {
        Self::new(rgb, rgb, rgb)
    }

    /// Scale every component by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.ambient * factor,
            self.diffuse * factor,
            self.specular * factor,
        )
    }
}

/// How a surface reflects: highlight sharpness and mirror energy retention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Phong specular exponent (positive)
    pub luster: f64,
    /// Fraction of energy kept per mirror bounce, nominally in [0, 1]
    pub reflectivity: f64,
}

impl Material {
    pub fn new(luster: f64, reflectivity: f64) -> Self {
        Self {
            luster,
            reflectivity,
        }
    }
}
