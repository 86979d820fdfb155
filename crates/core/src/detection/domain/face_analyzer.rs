use crate::shared::face_observation::FaceObservation;
use crate::shared::frame::Frame;

/// Domain interface for the external face-analysis step.
///
/// Detection itself is out of this crate's hands; implementations only
/// surface what an analysis service reported for the frame.
pub trait FaceAnalyzer: Send {
    fn analyze(&mut self, frame: &Frame) -> Result<Vec<FaceObservation>, Box<dyn std::error::Error>>;
}
