use thiserror::Error;

use crate::emoji::domain::emoji_graphic::EmojiGraphic;
use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

#[derive(Error, Debug, PartialEq)]
pub enum CompositeError {
    #[error("face bounds are degenerate: {0:?}")]
    DegenerateFace(FaceBox),
    #[error("emoji would be drawn at {width}x{height} pixels")]
    DegenerateEmoji { width: u32, height: u32 },
    #[error("emoji for a face {face_width} pixels wide is too large to draw")]
    EmojiTooLarge { face_width: f32 },
    #[error("unsupported pixel format: {0} channels (expected 3 or 4)")]
    UnsupportedChannels(u8),
}

/// Domain interface for drawing an emoji over one face.
///
/// Returns a new frame; `base` is left untouched so callers can thread the
/// result of one face into the next.
pub trait FaceCompositor: Send {
    fn composite(
        &self,
        base: &Frame,
        emoji: &EmojiGraphic,
        face: &FaceBox,
    ) -> Result<Frame, CompositeError>;
}
