use serde::{Deserialize, Serialize};

use crate::shared::constants::EMOJI_SCALE_FACTOR;
use crate::shared::face_box::FaceBox;

/// How the scale factor is applied to emoji height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightScaling {
    /// Height follows the aspect-scaled width and is then scaled again,
    /// so it ends up at `scale²` relative to the face width.
    #[default]
    Compatible,
    /// Height follows the emoji's aspect ratio exactly.
    AspectPreserving,
}

/// Emoji size and placement relative to a face box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmojiSizing {
    pub scale_factor: f64,
    pub height_scaling: HeightScaling,
}

impl Default for EmojiSizing {
    fn default() -> Self {
        Self {
            scale_factor: EMOJI_SCALE_FACTOR,
            height_scaling: HeightScaling::Compatible,
        }
    }
}

impl EmojiSizing {
    /// Target `(width, height)` of the emoji for a face `face_width` wide.
    ///
    /// `width = round(face_width * s)`;
    /// `height = round(emoji_height * width / emoji_width [* s])`.
    /// `None` when either side does not fit in a `u32`.
    pub fn emoji_size(
        &self,
        face_width: f32,
        emoji_width: u32,
        emoji_height: u32,
    ) -> Option<(u32, u32)> {
        let width = (f64::from(face_width) * self.scale_factor).round().max(0.0);
        let mut height = f64::from(emoji_height) * (width / f64::from(emoji_width.max(1)));
        if self.height_scaling == HeightScaling::Compatible {
            height *= self.scale_factor;
        }
        let height = height.round().max(0.0);
        let limit = f64::from(u32::MAX);
        if !(width <= limit && height <= limit) {
            return None;
        }
        Some((width as u32, height as u32))
    }

    /// Top-left pixel of an emoji `width`x`height` placed on `face`.
    ///
    /// Horizontally centered; vertically the face center sits one third of
    /// the way down the emoji. The offsets are whole-pixel quotients
    /// (`width / 2`, `height / 3`).
    pub fn emoji_origin(face: &FaceBox, width: u32, height: u32) -> (i64, i64) {
        let (cx, cy) = face.center();
        let x = cx - f64::from(width / 2);
        let y = cy - f64::from(height / 3);
        (x.round() as i64, y.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::square_emoji(100.0, 64, 64, (90, 81))]
    #[case::tall_emoji(200.0, 50, 100, (180, 324))]
    #[case::wide_emoji(80.0, 120, 60, (72, 32))]
    #[case::fractional_face(33.3, 10, 10, (30, 27))]
    fn test_compatible_size(
        #[case] face_width: f32,
        #[case] ew: u32,
        #[case] eh: u32,
        #[case] expected: (u32, u32),
    ) {
        assert_eq!(
            EmojiSizing::default().emoji_size(face_width, ew, eh),
            Some(expected)
        );
    }

    #[test]
    fn test_compatible_height_matches_rounded_formula() {
        let sizing = EmojiSizing::default();
        for face_width in [40.0f32, 77.0, 123.0, 512.0] {
            for (ew, eh) in [(64u32, 64u32), (72, 96), (150, 100)] {
                let w = (f64::from(face_width) * 0.9).round();
                let h = (f64::from(eh) * (w / f64::from(ew)) * 0.9).round();
                assert_eq!(
                    sizing.emoji_size(face_width, ew, eh),
                    Some((w as u32, h as u32)),
                    "face_width={face_width} emoji={ew}x{eh}"
                );
            }
        }
    }

    #[test]
    fn test_aspect_preserving_scales_height_once() {
        let sizing = EmojiSizing {
            height_scaling: HeightScaling::AspectPreserving,
            ..EmojiSizing::default()
        };
        assert_eq!(sizing.emoji_size(100.0, 64, 64), Some((90, 90)));
        assert_eq!(sizing.emoji_size(200.0, 50, 100), Some((180, 360)));
    }

    #[test]
    fn test_tiny_face_rounds_to_zero() {
        assert_eq!(EmojiSizing::default().emoji_size(0.4, 64, 64), Some((0, 0)));
    }

    #[test]
    fn test_oversized_face_has_no_size() {
        let sizing = EmojiSizing::default();
        assert_eq!(sizing.emoji_size(1e12, 128, 128), None);
        // Width fits but the tall emoji pushes height past u32::MAX.
        assert_eq!(sizing.emoji_size(4e9, 1, 4), None);
    }

    #[test]
    fn test_origin_centers_horizontally_and_biases_up() {
        // Face center (150, 140); emoji 90x81 → x = 150 - 45, y = 140 - 27
        let face = FaceBox::new(100.0, 80.0, 100.0, 120.0);
        assert_eq!(EmojiSizing::emoji_origin(&face, 90, 81), (105, 113));
    }

    #[test]
    fn test_origin_may_be_negative() {
        let face = FaceBox::new(-20.0, -20.0, 40.0, 40.0);
        assert_eq!(EmojiSizing::emoji_origin(&face, 36, 30), (-18, -10));
    }

    #[test]
    fn test_origin_uses_whole_pixel_offsets() {
        // 83 / 3 = 27, so y = 50 - 27 rather than round(50 - 27.67)
        let face = FaceBox::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(EmojiSizing::emoji_origin(&face, 90, 83), (5, 23));
        // 91 / 2 = 45
        assert_eq!(EmojiSizing::emoji_origin(&face, 91, 81), (5, 23));
    }
}
