pub mod json_face_analyzer;
pub mod static_face_analyzer;
