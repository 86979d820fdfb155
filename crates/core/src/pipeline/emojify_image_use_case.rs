use std::path::Path;

use crate::compositing::domain::face_compositor::{CompositeError, FaceCompositor};
use crate::detection::domain::face_analyzer::FaceAnalyzer;
use crate::emoji::domain::emoji_source::EmojiSource;
use crate::expression::domain::emoji_category::EmojiCategory;
use crate::expression::domain::expression_classifier::ExpressionClassifier;
use crate::image_io::domain::image_reader::ImageReader;
use crate::image_io::domain::image_writer::ImageWriter;
use crate::pipeline::notifier::Notifier;
use crate::shared::face_observation::FaceObservation;
use crate::shared::frame::Frame;

/// Outcome of one emojify pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmojifyReport {
    pub faces: usize,
    /// Chosen category per face, in observation order.
    pub categories: Vec<EmojiCategory>,
}

/// Classifies each face and composites its emoji onto the frame.
///
/// The frame is threaded through the faces in order: each composite starts
/// from the previous one's output. With no faces, `frame` is returned as is.
pub fn emojify_frame(
    frame: Frame,
    faces: &[FaceObservation],
    emojis: &dyn EmojiSource,
    compositor: &dyn FaceCompositor,
    classifier: &ExpressionClassifier,
) -> Result<(Frame, Vec<EmojiCategory>), CompositeError> {
    let mut result = frame;
    let mut categories = Vec::with_capacity(faces.len());
    for face in faces {
        let category = classifier.classify_face(face);
        result = compositor.composite(&result, emojis.graphic(category), &face.bounds)?;
        categories.push(category);
    }
    Ok((result, categories))
}

/// Single-photo pipeline: read → analyze → classify → composite → write.
pub struct EmojifyImageUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    analyzer: Box<dyn FaceAnalyzer>,
    emojis: Box<dyn EmojiSource>,
    compositor: Box<dyn FaceCompositor>,
    classifier: ExpressionClassifier,
    notifier: Box<dyn Notifier>,
}

impl EmojifyImageUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        analyzer: Box<dyn FaceAnalyzer>,
        emojis: Box<dyn EmojiSource>,
        compositor: Box<dyn FaceCompositor>,
        classifier: ExpressionClassifier,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            reader,
            writer,
            analyzer,
            emojis,
            compositor,
            classifier,
            notifier,
        }
    }

    /// Reads a photo, overlays an emoji on every reported face, and writes
    /// the result. A photo with no faces is written unchanged.
    pub fn execute(
        &mut self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<EmojifyReport, Box<dyn std::error::Error>> {
        let frame = self.reader.read(input_path)?;
        let faces = self.analyzer.analyze(&frame)?;

        if faces.is_empty() {
            self.notifier.no_faces();
        } else {
            self.notifier.faces_detected(faces.len());
        }

        let (result, categories) = emojify_frame(
            frame,
            &faces,
            self.emojis.as_ref(),
            self.compositor.as_ref(),
            &self.classifier,
        )?;
        self.writer.write(output_path, &result)?;

        Ok(EmojifyReport {
            faces: faces.len(),
            categories,
        })
    }
}
