use image::RgbaImage;

/// A read-only RGBA emoji bitmap. Both dimensions are non-zero.
#[derive(Clone, Debug, PartialEq)]
pub struct EmojiGraphic {
    pixels: RgbaImage,
}

impl EmojiGraphic {
    /// Returns `None` for an empty bitmap.
    pub fn new(pixels: RgbaImage) -> Option<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return None;
        }
        Some(Self { pixels })
    }

    /// For bitmaps drawn in-crate whose size is already known to be non-zero.
    pub(crate) fn from_drawn(pixels: RgbaImage) -> Self {
        debug_assert!(pixels.width() > 0 && pixels.height() > 0);
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}
