//! Serde mirror of the scene description format.
//!
//! These types are what the JSON deserializes into; nothing here is
//! validated yet. See [`super::loader`] for resolution into scene types.

use std::collections::HashMap;

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::{Camera, Color, Material, Pattern};

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const DEFAULT_DEPTH: u32 = 3;

fn default_depth() -> u32 {
    DEFAULT_DEPTH
}

fn default_intensity() -> f64 {
    1.0
}

/// Top-level document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    #[serde(default)]
    pub palette: PaletteDescription,
    /// Defaults to [`Camera::for_image`] when absent
    #[serde(default)]
    pub camera: Option<Camera>,
    #[serde(default)]
    pub image: ImageDescription,
    #[serde(default = "default_depth")]
    pub depth: u32,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
    #[serde(default)]
    pub shapes: Vec<ShapeDescription>,
}

/// Named entries added on top of the built-in palette.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteDescription {
    #[serde(default)]
    pub colors: HashMap<String, Color>,
    #[serde(default)]
    pub materials: HashMap<String, Material>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageDescription {
    pub width: u32,
    pub height: u32,
}

impl Default for ImageDescription {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// A color given by palette name or spelled out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorRef {
    Named(String),
    Inline(Color),
}

/// A material given by palette name or spelled out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaterialRef {
    Named(String),
    Inline(Material),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightDescription {
    pub position: Vec3,
    pub color: ColorRef,
    #[serde(default = "default_intensity")]
    pub intensity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDescription {
    Sphere {
        center: Vec3,
        radius: f64,
        color: ColorRef,
        material: MaterialRef,
        #[serde(default)]
        pattern: Option<Pattern>,
    },
    Plane {
        normal: Vec3,
        distance: f64,
        color: ColorRef,
        material: MaterialRef,
        #[serde(default)]
        pattern: Option<Pattern>,
    },
}
