use ndarray::{s, ArrayViewMut1};

use crate::compositing::domain::emoji_sizing::EmojiSizing;
use crate::compositing::domain::face_compositor::{CompositeError, FaceCompositor};
use crate::emoji::domain::emoji_graphic::EmojiGraphic;
use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// CPU compositor: nearest-neighbour scaling and source-over alpha blend.
///
/// The emoji is clipped to the frame, so faces near an edge get a partial
/// emoji rather than an error. Only the visible window is sampled; the
/// scaled emoji is never materialized.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmojiOverlayCompositor {
    sizing: EmojiSizing,
}

impl EmojiOverlayCompositor {
    pub fn new(sizing: EmojiSizing) -> Self {
        Self { sizing }
    }

    pub fn sizing(&self) -> EmojiSizing {
        self.sizing
    }
}

impl FaceCompositor for EmojiOverlayCompositor {
    fn composite(
        &self,
        base: &Frame,
        emoji: &EmojiGraphic,
        face: &FaceBox,
    ) -> Result<Frame, CompositeError> {
        let channels = base.channels();
        if channels != 3 && channels != 4 {
            return Err(CompositeError::UnsupportedChannels(channels));
        }
        if face.is_degenerate() {
            return Err(CompositeError::DegenerateFace(*face));
        }

        let (width, height) = self
            .sizing
            .emoji_size(face.width, emoji.width(), emoji.height())
            .ok_or(CompositeError::EmojiTooLarge {
                face_width: face.width,
            })?;
        if width == 0 || height == 0 {
            return Err(CompositeError::DegenerateEmoji { width, height });
        }

        let (x, y) = EmojiSizing::emoji_origin(face, width, height);
        log::debug!("Drawing {width}x{height} emoji at ({x}, {y})");

        let mut output = base.clone();
        draw_over(&mut output, emoji, (x, y), (width, height));
        Ok(output)
    }
}

/// Blends `emoji`, scaled to `size` and placed at `origin`, over the part of
/// `frame` it covers.
fn draw_over(frame: &mut Frame, emoji: &EmojiGraphic, origin: (i64, i64), size: (u32, u32)) {
    let (origin_x, origin_y) = origin;
    let (width, height) = size;
    let x0 = origin_x.max(0);
    let y0 = origin_y.max(0);
    let x1 = (origin_x + i64::from(width)).min(i64::from(frame.width()));
    let y1 = (origin_y + i64::from(height)).min(i64::from(frame.height()));
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let has_alpha = frame.channels() == 4;
    let source = emoji.pixels();
    let mut pixels = frame.as_ndarray_mut();
    for y in y0..y1 {
        let sy = nearest_index(y - origin_y, height, emoji.height());
        for x in x0..x1 {
            let sx = nearest_index(x - origin_x, width, emoji.width());
            let src = source.get_pixel(sx, sy).0;
            let dst = pixels.slice_mut(s![y as usize, x as usize, ..]);
            blend_source_over(src, dst, has_alpha);
        }
    }
}

/// Source index sampled by `offset` in a span of `target` pixels scaled from
/// `source` pixels. Samples at pixel centers.
fn nearest_index(offset: i64, target: u32, source: u32) -> u32 {
    let scaled = (offset as f64 + 0.5) * f64::from(source) / f64::from(target);
    (scaled as u32).min(source - 1)
}

fn blend_source_over(src: [u8; 4], mut dst: ArrayViewMut1<'_, u8>, has_alpha: bool) {
    let src_a = f32::from(src[3]) / 255.0;
    if src_a == 0.0 {
        return;
    }

    if has_alpha {
        let dst_a = f32::from(dst[3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        for c in 0..3 {
            let v = (f32::from(src[c]) * src_a + f32::from(dst[c]) * dst_a * (1.0 - src_a)) / out_a;
            dst[c] = v.round() as u8;
        }
        dst[3] = (out_a * 255.0).round() as u8;
    } else {
        for c in 0..3 {
            let v = f32::from(src[c]) * src_a + f32::from(dst[c]) * (1.0 - src_a);
            dst[c] = v.round() as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositing::domain::emoji_sizing::HeightScaling;
    use image::{Rgba, RgbaImage};

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn make_frame(width: u32, height: u32, channels: u8, value: u8) -> Frame {
        let data = vec![value; (width * height) as usize * channels as usize];
        Frame::new(data, width, height, channels)
    }

    fn solid_emoji(w: u32, h: u32, px: [u8; 4]) -> EmojiGraphic {
        EmojiGraphic::new(RgbaImage::from_pixel(w, h, Rgba(px))).unwrap()
    }

    fn pixel(frame: &Frame, x: u32, y: u32) -> Vec<u8> {
        let c = frame.channels() as usize;
        let i = (y * frame.width() + x) as usize * c;
        frame.data()[i..i + c].to_vec()
    }

    /// Bounding box (x0, y0, x1, y1) of pixels equal to `rgb`, exclusive end.
    fn bounds_of(frame: &Frame, rgb: [u8; 3]) -> Option<(u32, u32, u32, u32)> {
        let mut found: Option<(u32, u32, u32, u32)> = None;
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                if pixel(frame, x, y)[..3] == rgb {
                    found = Some(match found {
                        None => (x, y, x + 1, y + 1),
                        Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1)),
                    });
                }
            }
        }
        found
    }

    #[test]
    fn test_emoji_size_and_position() {
        let base = make_frame(200, 200, 3, 0);
        let face = FaceBox::new(0.0, 0.0, 100.0, 100.0);
        let out = EmojiOverlayCompositor::default()
            .composite(&base, &solid_emoji(10, 10, RED), &face)
            .unwrap();

        // 90x81 emoji; origin (50 - 45, 50 - 27)
        assert_eq!(bounds_of(&out, [255, 0, 0]), Some((5, 23, 95, 104)));
    }

    #[test]
    fn test_aspect_preserving_sizing() {
        let base = make_frame(200, 200, 3, 0);
        let face = FaceBox::new(0.0, 0.0, 100.0, 100.0);
        let compositor = EmojiOverlayCompositor::new(EmojiSizing {
            height_scaling: HeightScaling::AspectPreserving,
            ..EmojiSizing::default()
        });
        let out = compositor
            .composite(&base, &solid_emoji(10, 10, RED), &face)
            .unwrap();

        // 90x90 emoji; origin (5, 50 - 30)
        assert_eq!(bounds_of(&out, [255, 0, 0]), Some((5, 20, 95, 110)));
    }

    #[test]
    fn test_pixels_outside_emoji_unchanged() {
        let base = make_frame(100, 100, 3, 77);
        let face = FaceBox::new(40.0, 40.0, 20.0, 20.0);
        let out = EmojiOverlayCompositor::default()
            .composite(&base, &solid_emoji(4, 4, RED), &face)
            .unwrap();
        assert_eq!(pixel(&out, 0, 0), vec![77, 77, 77]);
        assert_eq!(pixel(&out, 99, 99), vec![77, 77, 77]);
        assert_eq!(pixel(&out, 50, 50), vec![255, 0, 0]);
    }

    #[test]
    fn test_base_frame_not_mutated() {
        let base = make_frame(50, 50, 3, 10);
        let original = base.clone();
        let face = FaceBox::new(10.0, 10.0, 30.0, 30.0);
        EmojiOverlayCompositor::default()
            .composite(&base, &solid_emoji(8, 8, RED), &face)
            .unwrap();
        assert_eq!(base, original);
    }

    #[test]
    fn test_transparent_emoji_leaves_base_intact() {
        let base = make_frame(60, 60, 3, 90);
        let face = FaceBox::new(10.0, 10.0, 40.0, 40.0);
        let out = EmojiOverlayCompositor::default()
            .composite(&base, &solid_emoji(8, 8, [255, 255, 255, 0]), &face)
            .unwrap();
        assert_eq!(out, base);
    }

    #[test]
    fn test_half_alpha_blends_over_rgb() {
        let base = make_frame(60, 60, 3, 0);
        let face = FaceBox::new(10.0, 10.0, 40.0, 40.0);
        let out = EmojiOverlayCompositor::default()
            .composite(&base, &solid_emoji(8, 8, [255, 255, 255, 128]), &face)
            .unwrap();
        assert_eq!(pixel(&out, 30, 30), vec![128, 128, 128]);
    }

    #[test]
    fn test_rgba_base_keeps_format_and_gains_coverage() {
        let base = make_frame(60, 60, 4, 0); // fully transparent black
        let face = FaceBox::new(10.0, 10.0, 40.0, 40.0);
        let out = EmojiOverlayCompositor::default()
            .composite(&base, &solid_emoji(8, 8, [200, 100, 50, 255]), &face)
            .unwrap();
        assert_eq!(out.channels(), 4);
        assert_eq!(pixel(&out, 30, 30), vec![200, 100, 50, 255]);
        assert_eq!(pixel(&out, 0, 0), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_nearest_neighbour_introduces_no_new_colors() {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, Rgba(RED));
        img.put_pixel(1, 0, Rgba(BLUE));
        img.put_pixel(0, 1, Rgba(BLUE));
        img.put_pixel(1, 1, Rgba(RED));
        let emoji = EmojiGraphic::new(img).unwrap();

        let base = make_frame(120, 120, 3, 0);
        let face = FaceBox::new(10.0, 10.0, 100.0, 100.0);
        let out = EmojiOverlayCompositor::default()
            .composite(&base, &emoji, &face)
            .unwrap();

        for y in 0..120 {
            for x in 0..120 {
                let p = pixel(&out, x, y);
                assert!(
                    p == [0, 0, 0] || p == RED[..3] || p == BLUE[..3],
                    "unexpected color {p:?} at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_emoji_clipped_at_frame_edge() {
        let base = make_frame(40, 40, 3, 0);
        let face = FaceBox::new(-30.0, -30.0, 60.0, 60.0);
        let out = EmojiOverlayCompositor::default()
            .composite(&base, &solid_emoji(5, 5, RED), &face)
            .unwrap();
        // 54x49 emoji at (0 - 27, 0 - 16.33) → (-27, -16): visible up to x=27, y=33
        assert_eq!(bounds_of(&out, [255, 0, 0]), Some((0, 0, 27, 33)));
    }

    #[test]
    fn test_emoji_entirely_off_frame_is_noop() {
        let base = make_frame(40, 40, 3, 5);
        let face = FaceBox::new(500.0, 500.0, 50.0, 50.0);
        let out = EmojiOverlayCompositor::default()
            .composite(&base, &solid_emoji(5, 5, RED), &face)
            .unwrap();
        assert_eq!(out, base);
    }

    #[test]
    fn test_degenerate_face_rejected() {
        let base = make_frame(40, 40, 3, 0);
        let face = FaceBox::new(0.0, 0.0, 0.0, 20.0);
        let err = EmojiOverlayCompositor::default()
            .composite(&base, &solid_emoji(5, 5, RED), &face)
            .unwrap_err();
        assert_eq!(err, CompositeError::DegenerateFace(face));
    }

    #[test]
    fn test_emoji_rounding_to_zero_rejected() {
        let base = make_frame(40, 40, 3, 0);
        let face = FaceBox::new(0.0, 0.0, 0.4, 0.4);
        let err = EmojiOverlayCompositor::default()
            .composite(&base, &solid_emoji(5, 5, RED), &face)
            .unwrap_err();
        assert_eq!(err, CompositeError::DegenerateEmoji { width: 0, height: 0 });
    }

    #[test]
    fn test_unrepresentable_emoji_size_rejected() {
        let base = make_frame(100, 100, 3, 0);
        let face = FaceBox::new(0.0, 0.0, 1e12, 1e12);
        let err = EmojiOverlayCompositor::default()
            .composite(&base, &solid_emoji(128, 128, RED), &face)
            .unwrap_err();
        assert_eq!(err, CompositeError::EmojiTooLarge { face_width: 1e12 });
    }

    #[test]
    fn test_huge_face_covers_frame_without_scaling_whole_emoji() {
        // 900000000x810000000 emoji; only the 100x100 visible window is drawn.
        let base = make_frame(100, 100, 3, 0);
        let face = FaceBox::new(-5e8, -5e8, 1e9, 1e9);
        let out = EmojiOverlayCompositor::default()
            .composite(&base, &solid_emoji(4, 4, RED), &face)
            .unwrap();
        assert_eq!(bounds_of(&out, [255, 0, 0]), Some((0, 0, 100, 100)));
    }

    #[test]
    fn test_nearest_index_samples_pixel_centers() {
        // 2 source pixels stretched over 5
        let picks: Vec<u32> = (0..5).map(|i| nearest_index(i, 5, 2)).collect();
        assert_eq!(picks, vec![0, 0, 1, 1, 1]);
        // 4 source pixels shrunk to 2
        assert_eq!(nearest_index(0, 2, 4), 1);
        assert_eq!(nearest_index(1, 2, 4), 3);
    }

    #[test]
    fn test_grayscale_frame_rejected() {
        let base = make_frame(10, 10, 1, 0);
        let face = FaceBox::new(0.0, 0.0, 10.0, 10.0);
        let err = EmojiOverlayCompositor::default()
            .composite(&base, &solid_emoji(5, 5, RED), &face)
            .unwrap_err();
        assert_eq!(err, CompositeError::UnsupportedChannels(1));
    }
}
