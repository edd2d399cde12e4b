//! Glint Core - Scene data model and scene description loading.
//!
//! This crate provides:
//!
//! - **Surface types**: `Color` (ambient/diffuse/specular triple), `Material`
//! - **Scene entities**: `Light`, `Shape` (sphere, plane), `Pattern`, `Camera`
//! - **Scene descriptions**: JSON loading with named color/material aliases
//!
//! Everything here is built once before rendering and only read afterwards.
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let file = load_scene("scene.json")?;
//! println!("Loaded {} shapes, {} lights",
//!     file.scene.shape_count(),
//!     file.scene.light_count());
//! ```

pub mod camera;
pub mod color;
pub mod description;
pub mod light;
pub mod pattern;
pub mod scene;
pub mod shape;

// Re-export commonly used types
pub use camera::{Camera, Screen};
pub use color::{Color, Material};
pub use description::{load_scene, load_scene_from_str, LoadError, LoadResult, Palette, SceneFile};
pub use light::Light;
pub use pattern::Pattern;
pub use scene::Scene;
pub use shape::{Plane, Shape, Sphere, Surface};
