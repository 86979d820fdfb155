use serde::{Deserialize, Serialize};

use crate::expression::domain::emoji_category::EmojiCategory;
use crate::shared::constants::{EYE_OPEN_PROB_THRESHOLD, SMILING_PROB_THRESHOLD};
use crate::shared::face_observation::FaceObservation;

/// Decision thresholds. Both comparisons are exclusive:
/// `smile > smile_threshold` is smiling, `eye < eye_open` is closed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifierThresholds {
    pub smile: f32,
    pub eye_open: f32,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            smile: SMILING_PROB_THRESHOLD,
            eye_open: EYE_OPEN_PROB_THRESHOLD,
        }
    }
}

/// Maps smile and eye-open probabilities to an [`EmojiCategory`].
///
/// Pure and total: no clamping, no validation, no state between calls.
/// Non-finite scores fall through every comparison (not smiling, eye open).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExpressionClassifier {
    thresholds: ClassifierThresholds,
}

impl ExpressionClassifier {
    pub fn new(thresholds: ClassifierThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> ClassifierThresholds {
        self.thresholds
    }

    pub fn classify(&self, smile: f32, left_eye_open: f32, right_eye_open: f32) -> EmojiCategory {
        let smiling = smile > self.thresholds.smile;
        let left_closed = left_eye_open < self.thresholds.eye_open;
        let right_closed = right_eye_open < self.thresholds.eye_open;

        let category = match (smiling, left_closed, right_closed) {
            (true, true, false) => EmojiCategory::LeftWinkSmile,
            (true, false, true) => EmojiCategory::RightWinkSmile,
            (true, true, true) => EmojiCategory::EyesClosedSmile,
            (true, false, false) => EmojiCategory::Smile,
            (false, true, false) => EmojiCategory::LeftWinkFrown,
            (false, false, true) => EmojiCategory::RightWinkFrown,
            (false, true, true) => EmojiCategory::EyesClosedFrown,
            (false, false, false) => EmojiCategory::Frown,
        };

        log::debug!(
            "smiling={smile:.3} left_eye_open={left_eye_open:.3} \
             right_eye_open={right_eye_open:.3} -> {category}"
        );
        category
    }

    pub fn classify_face(&self, face: &FaceObservation) -> EmojiCategory {
        self.classify(
            face.smiling_probability,
            face.left_eye_open_probability,
            face.right_eye_open_probability,
        )
    }
}

/// Classifies with the default thresholds.
pub fn classify(smile: f32, left_eye_open: f32, right_eye_open: f32) -> EmojiCategory {
    ExpressionClassifier::default().classify(smile, left_eye_open, right_eye_open)
}
