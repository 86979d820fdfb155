use std::path::Path;

use crate::image_io::domain::image_reader::ImageReader;
use crate::shared::frame::Frame;

/// Decodes image files with the `image` crate.
///
/// Sources with an alpha channel become 4-channel RGBA frames; everything
/// else becomes 3-channel RGB, so the output keeps the photo's format.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>> {
        let img = image::open(path)?;
        let frame = if img.color().has_alpha() {
            let rgba = img.into_rgba8();
            let (w, h) = rgba.dimensions();
            Frame::new(rgba.into_raw(), w, h, 4)
        } else {
            let rgb = img.into_rgb8();
            let (w, h) = rgb.dimensions();
            Frame::new(rgb.into_raw(), w, h, 3)
        };
        log::debug!(
            "Decoded {} ({}x{}, {} channels)",
            path.display(),
            frame.width(),
            frame.height(),
            frame.channels()
        );
        Ok(frame)
    }
}
