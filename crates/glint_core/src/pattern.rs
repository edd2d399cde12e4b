//! Procedural surface patterns.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::{Color, Shape};

/// Default number of checker tiles per unit of UV space.
pub const DEFAULT_CHECKER_SCALE: f64 = 5.0;

fn default_checker_scale() -> f64 {
    DEFAULT_CHECKER_SCALE
}

/// A procedural color override attached to a shape.
///
/// Patterns only decide *which* color applies at a point; the shape supplies
/// the UV mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Pattern {
    /// Alternating white and black tiles.
    Checkerboard {
        #[serde(default = "default_checker_scale")]
        scale: f64,
    },
}

impl Pattern {
    pub fn checkerboard(scale: f64) -> Self {
        Pattern::Checkerboard { scale }
    }

    pub fn color_at(&self, shape: &Shape, point: Vec3) -> Color {
        match *self {
            Pattern::Checkerboard { scale } => {
                let (u, v) = shape.uv_map(point, scale);
                checker(u, v)
            }
        }
    }
}

/// Tile color for UV coordinates: white on even lattice parity, black on odd.
pub fn checker(u: f64, v: f64) -> Color {
    if (u.floor() + v.floor()).rem_euclid(2.0) == 0.0 {
        Color::CHECKER_WHITE
    } else {
        Color::CHECKER_BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Material;

    #[test]
    fn test_checker_parity() {
        assert_eq!(checker(0.5, 0.5), Color::CHECKER_WHITE);
        assert_eq!(checker(1.5, 0.5), Color::CHECKER_BLACK);
        assert_eq!(checker(0.5, 1.5), Color::CHECKER_BLACK);
        assert_eq!(checker(1.5, 1.5), Color::CHECKER_WHITE);
    }

    #[test]
    fn test_checker_negative_coordinates() {
        // floor(-0.5) = -1, so this tile is odd
        assert_eq!(checker(-0.5, 0.5), Color::CHECKER_BLACK);
        assert_eq!(checker(-0.5, -0.5), Color::CHECKER_WHITE);
        assert_eq!(checker(-1.5, 0.5), Color::CHECKER_WHITE);
    }

    #[test]
    fn test_checker_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(checker(3.2, 7.9), checker(3.2, 7.9));
        }
        assert_eq!(checker(3.2, 7.9), checker(3.9, 7.1));
    }

    #[test]
    fn test_black_tile_keeps_specular() {
        let black = checker(1.5, 0.0);
        assert_eq!(black.ambient, Vec3::ZERO);
        assert_eq!(black.diffuse, Vec3::ZERO);
        assert_eq!(black.specular, Vec3::ONE);
    }

    #[test]
    fn test_color_at_uses_shape_mapping() {
        let floor = Shape::plane(
            Vec3::Y,
            0.0,
            Color::uniform(Vec3::splat(0.5)),
            Material::new(50.0, 0.2),
        );
        let pattern = Pattern::checkerboard(1.0);
        let (u_axis, _) = match floor {
            Shape::Plane(plane) => plane.axes(),
            Shape::Sphere(_) => unreachable!(),
        };

        let a = pattern.color_at(&floor, 0.5 * u_axis);
        let b = pattern.color_at(&floor, 1.5 * u_axis);
        assert_ne!(a, b);
    }

    #[test]
    fn test_deserialize_default_scale() {
        let pattern: Pattern = serde_json::from_str(r#"{"type": "checkerboard"}"#).unwrap();
        assert_eq!(pattern, Pattern::checkerboard(DEFAULT_CHECKER_SCALE));
    }
}
