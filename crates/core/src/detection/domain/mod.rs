pub mod face_analyzer;
