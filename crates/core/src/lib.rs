pub mod compositing;
pub mod config;
pub mod detection;
pub mod emoji;
pub mod expression;
pub mod image_io;
pub mod pipeline;
pub mod shared;
