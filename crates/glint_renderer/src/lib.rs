//! Glint Renderer - Phong ray tracing on the CPU
//!
//! One ray per pixel, followed through a fixed number of mirror bounces.
//! Every bounce is shaded against every point light with hard shadows and
//! distance attenuation.
//!
//! The kernel ([`trace_ray`]) is a pure function over an immutable scene, so
//! pixels can be traced from any number of threads. [`render`] does exactly
//! that with rayon, one bucket per task.

mod bucket;
mod camera;
mod output;
mod query;
mod renderer;
mod shading;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::pixel_ray;
pub use output::{ExportError, ExportResult};
pub use query::{nearest, occluded, Hit};
pub use renderer::{
    clamp_tonemap, color_to_rgb8, reinhard, render, render_pixel, render_sequential,
    ImageBuffer, RenderConfig, ToneMap,
};
pub use shading::{
    attenuation, shade, shade_light, SurfacePoint, ALPHA_AIR, ATTENUATION_DISTANCE_SCALING,
    SHADOW_EPSILON,
};
pub use tracer::{trace_ray, Bounce, Bounces};

/// Re-export scene types from glint_core
pub use glint_core::{Camera, Color, Light, Material, Pattern, Scene, Shape};
/// Re-export math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};

/// Linear RGB radiance, unbounded.
pub type Rgb = Vec3;
