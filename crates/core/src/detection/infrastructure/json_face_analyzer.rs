use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::detection::domain::face_analyzer::FaceAnalyzer;
use crate::shared::face_observation::FaceObservation;
use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum FaceAnalysisError {
    #[error("failed to read face observations from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid face observations in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ObservationFile {
    Bare(Vec<FaceObservation>),
    Wrapped { faces: Vec<FaceObservation> },
}

impl ObservationFile {
    fn into_faces(self) -> Vec<FaceObservation> {
        match self {
            ObservationFile::Bare(faces) | ObservationFile::Wrapped { faces } => faces,
        }
    }
}

/// Parses an analysis result: either a bare array of faces or
/// `{"faces": [...]}`.
pub fn parse_observations(json: &str) -> Result<Vec<FaceObservation>, serde_json::Error> {
    serde_json::from_str::<ObservationFile>(json).map(ObservationFile::into_faces)
}

/// Reads observations exported by an external face-analysis service.
///
/// The file is re-read on every call so a long-lived analyzer picks up a
/// fresh export.
pub struct JsonFaceAnalyzer {
    path: PathBuf,
}

impl JsonFaceAnalyzer {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<Vec<FaceObservation>, FaceAnalysisError> {
        let json = fs::read_to_string(&self.path).map_err(|source| FaceAnalysisError::Read {
            path: self.path.clone(),
            source,
        })?;
        parse_observations(&json).map_err(|source| FaceAnalysisError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl FaceAnalyzer for JsonFaceAnalyzer {
    fn analyze(&mut self, frame: &Frame) -> Result<Vec<FaceObservation>, Box<dyn std::error::Error>> {
        let faces = self.load()?;
        log::debug!(
            "Loaded {} face observations for {}x{} frame from {}",
            faces.len(),
            frame.width(),
            frame.height(),
            self.path.display()
        );
        Ok(faces)
    }
}
