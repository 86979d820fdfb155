use crate::detection::domain::face_analyzer::FaceAnalyzer;
use crate::shared::face_observation::FaceObservation;
use crate::shared::frame::Frame;

/// Returns the same observations for every frame.
///
/// For callers that already ran analysis in-process and hold the results.
pub struct StaticFaceAnalyzer {
    faces: Vec<FaceObservation>,
}

impl StaticFaceAnalyzer {
    pub fn new(faces: Vec<FaceObservation>) -> Self {
        Self { faces }
    }
}

impl FaceAnalyzer for StaticFaceAnalyzer {
    fn analyze(&mut self, _frame: &Frame) -> Result<Vec<FaceObservation>, Box<dyn std::error::Error>> {
        Ok(self.faces.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::face_box::FaceBox;

    #[test]
    fn test_returns_configured_faces() {
        let face = FaceObservation::new(0.5, 0.9, 0.9, FaceBox::new(1.0, 2.0, 3.0, 4.0));
        let mut analyzer = StaticFaceAnalyzer::new(vec![face]);
        let frame = Frame::new(vec![0; 3], 1, 1, 3);
        assert_eq!(analyzer.analyze(&frame).unwrap(), vec![face]);
        assert_eq!(analyzer.analyze(&frame).unwrap(), vec![face]);
    }
}
