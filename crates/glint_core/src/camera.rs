//! Pinhole camera looking through a rectangular screen.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// Screen rectangle bounds in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Screen {
    /// Two units wide, centred on the axis, height set by the aspect ratio.
    pub fn for_aspect(aspect_ratio: f64) -> Self {
        Self {
            left: -1.0,
            top: 1.0 / aspect_ratio,
            right: 1.0,
            bottom: -1.0 / aspect_ratio,
        }
    }
}

/// Eye position plus an axis-aligned screen in the plane `z = screen_z`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub screen: Screen,
    #[serde(default)]
    pub screen_z: f64,
}

impl Camera {
    pub fn new(position: Vec3, screen: Screen, screen_z: f64) -> Self {
        Self {
            position,
            screen,
            screen_z,
        }
    }

    /// Camera one unit in front of the origin looking down -Z at a screen
    /// through the origin.
    pub fn looking_down_z(aspect_ratio: f64) -> Self {
        Self::new(Vec3::new(0.0, 0.0, 1.0), Screen::for_aspect(aspect_ratio), 0.0)
    }

    /// Camera for an image of the given size.
    pub fn for_image(width: u32, height: u32) -> Self {
        Self::looking_down_z(width as f64 / height as f64)
    }
}
