//! Named colors and materials.

use std::collections::HashMap;

use glint_math::Vec3;

use super::types::{ColorRef, MaterialRef, PaletteDescription};
use super::{LoadError, LoadResult};
use crate::{Color, Material};

/// Lookup table for color and material aliases.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: HashMap<String, Color>,
    materials: HashMap<String, Material>,
}

impl Palette {
    /// An empty palette with no names at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stock palette every scene file starts from.
    pub fn builtin() -> Self {
        let mut palette = Self::empty();

        let white = Vec3::ONE;
        palette.add_color(
            "green",
            Color::new(Vec3::new(0.0, 0.1, 0.0), Vec3::new(0.0, 0.7, 0.0), white),
        );
        palette.add_color(
            "grey",
            Color::new(Vec3::splat(0.1), Vec3::splat(0.5), white),
        );
        palette.add_color(
            "purple",
            Color::new(Vec3::new(0.07, 0.0, 0.1), Vec3::new(0.7, 0.0, 1.0), white),
        );
        palette.add_color("white", Color::uniform(white));
        palette.add_color(
            "soft_white",
            Color::new(Vec3::new(1.0, 0.8, 0.8), Vec3::new(1.0, 0.8, 0.8), white),
        );
        palette.add_color(
            "cyan",
            Color::new(Vec3::new(0.0, 1.0, 1.0), Vec3::new(0.0, 0.1, 0.1), white),
        );

        palette.add_material("shiny", Material::new(100.0, 0.75));
        palette.add_material("matte", Material::new(50.0, 0.2));

        palette
    }

    pub fn add_color(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }

    pub fn add_material(&mut self, name: impl Into<String>, material: Material) {
        self.materials.insert(name.into(), material);
    }

    /// Add (or override) every entry of a file's palette section.
    pub fn extend(&mut self, description: &PaletteDescription) {
        for (name, color) in &description.colors {
            if self.colors.insert(name.clone(), *color).is_some() {
                log::debug!("Palette color '{}' overridden by scene file", name);
            }
        }
        for (name, material) in &description.materials {
            if self.materials.insert(name.clone(), *material).is_some() {
                log::debug!("Palette material '{}' overridden by scene file", name);
            }
        }
    }

    pub fn color(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    pub fn material(&self, name: &str) -> Option<Material> {
        self.materials.get(name).copied()
    }

    pub fn resolve_color(&self, color: &ColorRef) -> LoadResult<Color> {
        match color {
            ColorRef::Inline(color) => Ok(*color),
            ColorRef::Named(name) => self
                .color(name)
                .ok_or_else(|| LoadError::UnknownColor(name.clone())),
        }
    }

    pub fn resolve_material(&self, material: &MaterialRef) -> LoadResult<Material> {
        match material {
            MaterialRef::Inline(material) => Ok(*material),
            MaterialRef::Named(name) => self
                .material(name)
                .ok_or_else(|| LoadError::UnknownMaterial(name.clone())),
        }
    }
}
