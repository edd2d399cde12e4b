//! Scene description loading.
//!
//! Parses a JSON scene description, resolves palette aliases and checks the
//! geometry the renderer assumes (positive radii, non-degenerate normals,
//! positive luster, a camera that can see its screen). The result is a
//! ready-to-render [`Scene`].

use std::path::Path;

use thiserror::Error;

use super::palette::Palette;
use super::types::{LightDescription, SceneDescription, ShapeDescription};
use crate::{Camera, Light, Material, Pattern, Scene, Shape};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown color '{0}'")]
    UnknownColor(String),

    #[error("Unknown material '{0}'")]
    UnknownMaterial(String),

    #[error("Shape {index}: sphere radius must be positive, got {radius}")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("Shape {index}: plane normal must be non-zero")]
    DegenerateNormal { index: usize },

    #[error("Shape {index}: luster must be positive, got {luster}")]
    InvalidLuster { index: usize, luster: f64 },

    #[error("Shape {index}: checkerboard scale must be positive, got {scale}")]
    InvalidPatternScale { index: usize, scale: f64 },

    #[error("Reflection depth must be at least 1")]
    InvalidDepth,

    #[error("Invalid image size {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },

    #[error("Degenerate camera: {0}")]
    DegenerateCamera(&'static str),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// A loaded scene together with the image size it asks for.
#[derive(Debug, Clone)]
pub struct SceneFile {
    pub scene: Scene,
    pub width: u32,
    pub height: u32,
    /// The camera was derived from the image size rather than given in the file
    pub default_camera: bool,
}

/// Load a scene description from a JSON file.
///
/// # Example
///
/// ```ignore
/// use glint_core::load_scene;
///
/// let file = load_scene("scenes/spheres.json")?;
/// println!("{}x{}, {} shapes", file.width, file.height, file.scene.shape_count());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneFile> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;

    let file = load_scene_from_str(&text)?;
    log::info!(
        "Loaded {}: {} shapes, {} lights, depth {}",
        path.display(),
        file.scene.shape_count(),
        file.scene.light_count(),
        file.scene.depth
    );
    Ok(file)
}

/// Load a scene description from JSON text.
pub fn load_scene_from_str(text: &str) -> LoadResult<SceneFile> {
    let description: SceneDescription = serde_json::from_str(text)?;
    resolve(&description)
}

/// Turn a parsed description into a validated scene.
pub fn resolve(description: &SceneDescription) -> LoadResult<SceneFile> {
    let image = description.image;
    if image.width == 0 || image.height == 0 {
        return Err(LoadError::InvalidImageSize {
            width: image.width,
            height: image.height,
        });
    }
    if description.depth == 0 {
        return Err(LoadError::InvalidDepth);
    }

    let mut palette = Palette::builtin();
    palette.extend(&description.palette);

    let camera = match description.camera {
        Some(camera) => check_camera(camera)?,
        None => Camera::for_image(image.width, image.height),
    };

    let mut scene = Scene::new(camera, description.depth);

    for light in &description.lights {
        scene.lights.push(resolve_light(&palette, light)?);
    }
    if scene.lights.is_empty() {
        log::warn!("Scene has no lights; every pixel will be black");
    }

    for (index, shape) in description.shapes.iter().enumerate() {
        scene.shapes.push(resolve_shape(&palette, index, shape)?);
    }

    Ok(SceneFile {
        scene,
        width: image.width,
        height: image.height,
        default_camera: description.camera.is_none(),
    })
}

/// Every primary ray leaves the eye towards a point on the screen, so the
/// eye must sit off the screen plane and the screen must span an area.
fn check_camera(camera: Camera) -> LoadResult<Camera> {
    let screen = camera.screen;
    let finite = camera.position.is_finite()
        && camera.screen_z.is_finite()
        && [screen.left, screen.top, screen.right, screen.bottom]
            .iter()
            .all(|v| v.is_finite());
    if !finite {
        return Err(LoadError::DegenerateCamera("values must be finite"));
    }
    if camera.position.z == camera.screen_z {
        return Err(LoadError::DegenerateCamera("eye lies in the screen plane"));
    }
    if screen.left == screen.right || screen.top == screen.bottom {
        return Err(LoadError::DegenerateCamera("screen has zero area"));
    }
    Ok(camera)
}

fn resolve_light(palette: &Palette, light: &LightDescription) -> LoadResult<Light> {
    let color = palette.resolve_color(&light.color)?;
    Ok(Light::new(light.position, color, light.intensity))
}

fn resolve_shape(palette: &Palette, index: usize, shape: &ShapeDescription) -> LoadResult<Shape> {
    let (resolved, pattern) = match shape {
        ShapeDescription::Sphere {
            center,
            radius,
            color,
            material,
            pattern,
        } => {
            if !radius.is_finite() || *radius <= 0.0 {
                return Err(LoadError::InvalidRadius {
                    index,
                    radius: *radius,
                });
            }
            let material = check_material(index, palette.resolve_material(material)?)?;
            let shape = Shape::sphere(*center, *radius, palette.resolve_color(color)?, material);
            (shape, pattern)
        }
        ShapeDescription::Plane {
            normal,
            distance,
            color,
            material,
            pattern,
        } => {
            if normal.length_squared() == 0.0 || !normal.is_finite() {
                return Err(LoadError::DegenerateNormal { index });
            }
            let material = check_material(index, palette.resolve_material(material)?)?;
            let shape = Shape::plane(*normal, *distance, palette.resolve_color(color)?, material);
            (shape, pattern)
        }
    };

    match pattern {
        Some(pattern) => Ok(resolved.with_pattern(check_pattern(index, *pattern)?)),
        None => Ok(resolved),
    }
}

fn check_material(index: usize, material: Material) -> LoadResult<Material> {
    if material.luster.is_nan() || material.luster <= 0.0 {
        return Err(LoadError::InvalidLuster {
            index,
            luster: material.luster,
        });
    }
    if !(0.0..=1.0).contains(&material.reflectivity) {
        log::warn!(
            "Shape {}: reflectivity {} is outside [0, 1]",
            index,
            material.reflectivity
        );
    }
    Ok(material)
}

fn check_pattern(index: usize, pattern: Pattern) -> LoadResult<Pattern> {
    match pattern {
        Pattern::Checkerboard { scale } if scale.is_nan() || scale <= 0.0 => {
            Err(LoadError::InvalidPatternScale { index, scale })
        }
        _ => Ok(pattern),
    }
}
