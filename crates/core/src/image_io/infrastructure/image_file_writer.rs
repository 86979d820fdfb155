use std::path::Path;

use image::{DynamicImage, RgbImage, RgbaImage};

use crate::image_io::domain::image_writer::ImageWriter;
use crate::shared::frame::Frame;

/// Writes a frame to an image file using the `image` crate.
///
/// The format follows the path's extension. RGBA frames written to a format
/// without alpha support (e.g. JPEG) are flattened to RGB first.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn to_dynamic(frame: &Frame) -> Result<DynamicImage, Box<dyn std::error::Error>> {
    let (w, h) = (frame.width(), frame.height());
    let data = frame.data().to_vec();
    match frame.channels() {
        3 => RgbImage::from_raw(w, h, data)
            .map(DynamicImage::ImageRgb8)
            .ok_or_else(|| "Failed to create image from frame data".into()),
        4 => RgbaImage::from_raw(w, h, data)
            .map(DynamicImage::ImageRgba8)
            .ok_or_else(|| "Failed to create image from frame data".into()),
        n => Err(format!("Cannot encode frame with {n} channels").into()),
    }
}

fn supports_alpha(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    matches!(ext.as_deref(), Some("png" | "tiff" | "tif" | "webp"))
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        // Ensure parent directory exists (infrastructure concern)
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut img = to_dynamic(frame)?;
        if img.color().has_alpha() && !supports_alpha(path) {
            img = DynamicImage::ImageRgb8(img.into_rgb8());
        }

        img.save(path)?;
        Ok(())
    }
}
