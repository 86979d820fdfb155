pub mod emoji_sizing;
pub mod face_compositor;
