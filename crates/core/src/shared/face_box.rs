use serde::{Deserialize, Serialize};

/// Axis-aligned face bounds in image pixel coordinates.
///
/// Floating point because face-analysis services report sub-pixel geometry.
/// The position may lie partly outside the image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FaceBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.x) + f64::from(self.width) / 2.0,
            f64::from(self.y) + f64::from(self.height) / 2.0,
        )
    }

    /// True when the box cannot be drawn over: non-finite coordinates or
    /// a non-positive width or height.
    pub fn is_degenerate(&self) -> bool {
        let finite = self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        !finite || self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_center() {
        let b = FaceBox::new(10.0, 20.0, 100.0, 60.0);
        let (cx, cy) = b.center();
        assert_relative_eq!(cx, 60.0);
        assert_relative_eq!(cy, 50.0);
    }

    #[test]
    fn test_center_with_negative_origin() {
        let b = FaceBox::new(-40.0, -10.0, 50.0, 50.0);
        let (cx, cy) = b.center();
        assert_relative_eq!(cx, -15.0);
        assert_relative_eq!(cy, 15.0);
    }

    #[rstest]
    #[case::zero_width(FaceBox::new(0.0, 0.0, 0.0, 10.0))]
    #[case::zero_height(FaceBox::new(0.0, 0.0, 10.0, 0.0))]
    #[case::negative_width(FaceBox::new(0.0, 0.0, -5.0, 10.0))]
    #[case::nan_width(FaceBox::new(0.0, 0.0, f32::NAN, 10.0))]
    #[case::infinite_x(FaceBox::new(f32::INFINITY, 0.0, 10.0, 10.0))]
    fn test_degenerate(#[case] b: FaceBox) {
        assert!(b.is_degenerate());
    }

    #[test]
    fn test_regular_box_not_degenerate() {
        assert!(!FaceBox::new(-3.0, 4.0, 0.5, 0.5).is_degenerate());
    }
}
