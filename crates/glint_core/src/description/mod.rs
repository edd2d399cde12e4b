//! Scene description files.
//!
//! A description is a JSON document listing lights and shapes. Anywhere a
//! color or material is expected it may be given inline or by name; names
//! resolve against a [`Palette`] made of the built-in entries plus the
//! file's own `palette` section.

pub mod loader;
pub mod palette;
pub mod types;

pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult, SceneFile};
pub use palette::Palette;
