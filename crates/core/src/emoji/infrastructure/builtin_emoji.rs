//! Procedural emoji set used when no asset directory is configured.
//!
//! Each face is a yellow disc with two eyes (an upright oval when open, a
//! flat bar when closed) and a parabolic mouth that bows down for a smile
//! and up for a frown. Eye placement is in image space: the "left" eye is
//! drawn on the left half of the bitmap.

use image::{Rgba, RgbaImage};

use crate::emoji::domain::emoji_graphic::EmojiGraphic;
use crate::expression::domain::emoji_category::EmojiCategory;

pub const MIN_BUILTIN_SIZE: u32 = 16;

const FACE: Rgba<u8> = Rgba([255, 204, 77, 255]);
const FEATURE: Rgba<u8> = Rgba([102, 69, 0, 255]);

const EYE_Y: f64 = 0.38;
const LEFT_EYE_X: f64 = 0.34;
const RIGHT_EYE_X: f64 = 0.66;

/// Draws the emoji for `category` on a transparent `size`x`size` canvas.
///
/// Sizes below [`MIN_BUILTIN_SIZE`] are raised to it.
pub fn draw(category: EmojiCategory, size: u32) -> EmojiGraphic {
    let size = size.max(MIN_BUILTIN_SIZE);
    let s = size as f64;
    let center = s / 2.0;
    let radius = s / 2.0 - 0.5;

    let mut img = RgbaImage::new(size, size);
    for (x, y, px) in img.enumerate_pixels_mut() {
        // Sample at pixel centers.
        let fx = x as f64 + 0.5;
        let fy = y as f64 + 0.5;
        if !in_ellipse(fx, fy, center, center, radius, radius) {
            continue;
        }
        *px = if is_feature(category, fx, fy, s) {
            FEATURE
        } else {
            FACE
        };
    }
    EmojiGraphic::from_drawn(img)
}

fn is_feature(category: EmojiCategory, x: f64, y: f64, s: f64) -> bool {
    eye(x, y, s * LEFT_EYE_X, s * EYE_Y, s, category.left_eye_closed())
        || eye(x, y, s * RIGHT_EYE_X, s * EYE_Y, s, category.right_eye_closed())
        || mouth(x, y, s, category.is_smiling())
}

fn eye(x: f64, y: f64, cx: f64, cy: f64, s: f64, closed: bool) -> bool {
    if closed {
        (x - cx).abs() <= s * 0.09 && (y - cy).abs() <= s * 0.02
    } else {
        in_ellipse(x, y, cx, cy, s * 0.06, s * 0.09)
    }
}

fn mouth(x: f64, y: f64, s: f64, smiling: bool) -> bool {
    let half_width = s * 0.22;
    let dx = (x - s * 0.5) / half_width;
    if dx.abs() > 1.0 {
        return false;
    }
    let bow = s * 0.1 * (1.0 - dx * dx);
    let curve_y = if smiling {
        s * 0.66 + bow
    } else {
        s * 0.78 - bow
    };
    (y - curve_y).abs() <= s * 0.025
}

fn in_ellipse(x: f64, y: f64, cx: f64, cy: f64, semi_a: f64, semi_b: f64) -> bool {
    let dx = (x - cx) / semi_a;
    let dy = (y - cy) / semi_b;
    dx * dx + dy * dy <= 1.0
}
