pub mod emoji_graphic;
pub mod emoji_source;
