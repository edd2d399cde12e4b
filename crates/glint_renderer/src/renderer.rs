//! Whole-image rendering and display conversion.
//!
//! Implements:
//! - Per-pixel tracing through the kernel
//! - Parallel bucket rendering with rayon
//! - Tone mapping of the unbounded result to 8-bit RGB

use std::time::Instant;

use glint_core::Scene;
use glint_math::Interval;
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::camera::pixel_ray;
use crate::tracer::trace_ray;
use crate::Rgb;

/// Operator compressing unbounded radiance into [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToneMap {
    /// `c / (1 + c)` per channel
    #[default]
    Reinhard,
    /// Hard clip to [0, 1]
    Clamp,
}

impl ToneMap {
    pub fn apply(self, color: Rgb) -> Rgb {
        match self {
            ToneMap::Reinhard => Rgb::new(reinhard(color.x), reinhard(color.y), reinhard(color.z)),
            ToneMap::Clamp => Rgb::new(
                clamp_tonemap(color.x),
                clamp_tonemap(color.y),
                clamp_tonemap(color.z),
            ),
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Edge length of a render bucket in pixels
    pub bucket_size: u32,
    /// Operator used when converting to 8-bit
    pub tone_map: ToneMap,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bucket_size: DEFAULT_BUCKET_SIZE,
            tone_map: ToneMap::Reinhard,
        }
    }
}

/// Reinhard operator for one channel.
///
/// Negative values (lights behind a surface) and NaN map to black.
#[inline]
pub fn reinhard(c: f64) -> f64 {
    if c > 0.0 {
        c / (1.0 + c)
    } else {
        0.0
    }
}

/// Clip one channel to [0, 1]; NaN maps to black.
#[inline]
pub fn clamp_tonemap(c: f64) -> f64 {
    if c.is_nan() {
        0.0
    } else {
        Interval::new(0.0, 1.0).clamp(c)
    }
}

/// Convert an already tone-mapped color to 8-bit RGB.
pub fn color_to_rgb8(color: Rgb) -> [u8; 3] {
    let intensity = Interval::new(0.0, 0.999);
    let to_byte = |c: f64| (256.0 * intensity.clamp(c)) as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z)]
}

/// Trace the single camera ray of pixel (x, y).
pub fn render_pixel(scene: &Scene, width: u32, height: u32, x: u32, y: u32) -> Rgb {
    let ray = pixel_ray(&scene.camera, width, height, x, y);
    trace_ray(
        ray,
        scene.depth,
        &scene.shapes,
        &scene.lights,
        scene.camera.position,
    )
}

/// Image buffer of unbounded linear colors.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::ZERO; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.offset(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        let mut colors = result.pixels.iter();

        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                if let Some(color) = colors.next() {
                    self.set(bucket.x + local_x, bucket.y + local_y, *color);
                }
            }
        }
    }

    /// Tone map and quantize every pixel.
    pub fn to_rgb8(&self, tone_map: ToneMap) -> Vec<[u8; 3]> {
        self.pixels
            .iter()
            .map(|color| color_to_rgb8(tone_map.apply(*color)))
            .collect()
    }
}

/// Render the entire scene, one rayon task per bucket.
///
/// Output is identical to [`render_sequential`].
pub fn render(scene: &Scene, width: u32, height: u32, config: &RenderConfig) -> ImageBuffer {
    let start = Instant::now();
    let buckets = generate_buckets(width, height, config.bucket_size);
    log::info!(
        "Rendering {}x{} at depth {} in {} buckets on {} threads",
        width,
        height,
        scene.depth,
        buckets.len(),
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .into_par_iter()
        .map(|bucket| {
            let pixels = render_bucket(&bucket, scene, width, height);
            log::debug!("Bucket {} done ({} px)", bucket.index, pixels.len());
            BucketResult::new(bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    image
}

/// Render the entire scene on the calling thread, row by row.
pub fn render_sequential(scene: &Scene, width: u32, height: u32) -> ImageBuffer {
    let mut image = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            image.set(x, y, render_pixel(scene, width, height, x, y));
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Camera, Color, Light, Material, Shape};
    use glint_math::Vec3;

    fn test_scene() -> Scene {
        let green = Color::new(Vec3::new(0.0, 0.1, 0.0), Vec3::new(0.0, 0.7, 0.0), Vec3::ONE);
        let grey = Color::new(Vec3::splat(0.1), Vec3::splat(0.5), Vec3::ONE);

        Scene::new(Camera::for_image(24, 18), 3)
            .with_light(Light::new(Vec3::new(5.0, 5.0, 5.0), Color::uniform(Vec3::ONE), 1.0))
            .with_shape(Shape::sphere(
                Vec3::new(-0.2, 0.0, -1.0),
                0.7,
                green,
                Material::new(100.0, 0.75),
            ))
            .with_shape(Shape::plane(Vec3::Y, -0.7, grey, Material::new(50.0, 0.2)))
    }

    #[test]
    fn test_reinhard() {
        assert_eq!(reinhard(0.0), 0.0);
        assert_eq!(reinhard(1.0), 0.5);
        assert!((reinhard(3.0) - 0.75).abs() < 1e-12);
        assert_eq!(reinhard(-2.0), 0.0);
        assert_eq!(reinhard(f64::NAN), 0.0);
        assert!(reinhard(1e12) < 1.0);
    }

    #[test]
    fn test_clamp_tonemap() {
        assert_eq!(clamp_tonemap(-1.0), 0.0);
        assert_eq!(clamp_tonemap(0.25), 0.25);
        assert_eq!(clamp_tonemap(7.0), 1.0);
        assert_eq!(clamp_tonemap(f64::NAN), 0.0);
    }

    #[test]
    fn test_color_to_rgb8() {
        assert_eq!(color_to_rgb8(Rgb::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb8(Rgb::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb8(Rgb::new(0.5, 2.0, -1.0)), [128, 255, 0]);
    }

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(4, 3);
        assert_eq!(image.pixels.len(), 12);

        image.set(3, 2, Rgb::ONE);
        assert_eq!(image.get(3, 2), Rgb::ONE);
        assert_eq!(image.pixels[11], Rgb::ONE);
        assert_eq!(image.get(0, 0), Rgb::ZERO);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scene = test_scene();
        let config = RenderConfig {
            bucket_size: 5,
            ..Default::default()
        };

        let parallel = render(&scene, 24, 18, &config);
        let sequential = render_sequential(&scene, 24, 18);
        assert_eq!(parallel.pixels, sequential.pixels);
    }

    #[test]
    fn test_render_hits_something() {
        let scene = test_scene();
        let image = render(&scene, 24, 18, &RenderConfig::default());

        // Center pixel looks at the sphere
        let center = image.get(12, 9);
        assert!(center.y > 0.0);
        assert!(center.y > center.x);
    }

    #[test]
    fn test_to_rgb8_len() {
        let image = ImageBuffer::new(5, 2);
        let bytes = image.to_rgb8(ToneMap::Reinhard);
        assert_eq!(bytes.len(), 10);
        assert!(bytes.iter().all(|p| *p == [0, 0, 0]));
    }
}
