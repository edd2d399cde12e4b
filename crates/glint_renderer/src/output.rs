//! Writing rendered images to disk.

use std::path::Path;

use thiserror::Error;

use crate::renderer::{ImageBuffer, ToneMap};

/// Errors that can occur while exporting an image.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

impl ImageBuffer {
    /// Tone map into an 8-bit RGB image.
    pub fn to_image(&self, tone_map: ToneMap) -> ExportResult<image::RgbImage> {
        let pixels = self.to_rgb8(tone_map);
        let bytes: Vec<u8> = bytemuck::cast_slice(&pixels).to_vec();

        image::RgbImage::from_raw(self.width, self.height, bytes).ok_or(ExportError::BufferSize {
            width: self.width,
            height: self.height,
        })
    }

    /// Save the image; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P, tone_map: ToneMap) -> ExportResult<()> {
        let path = path.as_ref();
        self.to_image(tone_map)?.save(path)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}
