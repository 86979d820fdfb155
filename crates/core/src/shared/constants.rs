/// Smile probability strictly above this counts as smiling.
pub const SMILING_PROB_THRESHOLD: f32 = 0.12;

/// Eye-open probability strictly below this counts as closed.
pub const EYE_OPEN_PROB_THRESHOLD: f32 = 0.6;

/// Emoji width relative to face width.
pub const EMOJI_SCALE_FACTOR: f64 = 0.9;

/// Edge length of the procedurally drawn emoji set.
pub const DEFAULT_EMOJI_SIZE: u32 = 128;

pub const EMOJI_ASSET_EXTENSION: &str = "png";

pub const CONFIG_DIR_NAME: &str = "Emojify";
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
