use serde::{Deserialize, Serialize};

use super::face_box::FaceBox;

/// One detected face as reported by the external face-analysis service.
///
/// Probabilities are nominally in `0.0..=1.0` but are never validated or
/// clamped; classification is total over any finite value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceObservation {
    pub smiling_probability: f32,
    pub left_eye_open_probability: f32,
    pub right_eye_open_probability: f32,
    pub bounds: FaceBox,
}

impl FaceObservation {
    pub fn new(smile: f32, left_eye_open: f32, right_eye_open: f32, bounds: FaceBox) -> Self {
        Self {
            smiling_probability: smile,
            left_eye_open_probability: left_eye_open,
            right_eye_open_probability: right_eye_open,
            bounds,
        }
    }
}
