//! Fully resolved scene handed to the renderer.

use crate::{Camera, Light, Shape};

/// Everything a render needs. Built once, then only read.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub shapes: Vec<Shape>,
    /// Maximum number of mirror bounces per camera ray (at least 1)
    pub depth: u32,
}

impl Scene {
    pub fn new(camera: Camera, depth: u32) -> Self {
        Self {
            camera,
            lights: Vec::new(),
            shapes: Vec::new(),
            depth,
        }
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
