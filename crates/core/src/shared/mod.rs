pub mod constants;
pub mod face_box;
pub mod face_observation;
pub mod frame;
