use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compositing::domain::emoji_sizing::{EmojiSizing, HeightScaling};
use crate::emoji::infrastructure::builtin_emoji::MIN_BUILTIN_SIZE;
use crate::expression::domain::expression_classifier::{ClassifierThresholds, ExpressionClassifier};
use crate::shared::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_EMOJI_SIZE, EMOJI_SCALE_FACTOR,
    EYE_OPEN_PROB_THRESHOLD, SMILING_PROB_THRESHOLD,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("scale factor must be greater than 0, got {0}")]
    ScaleFactor(f64),
    #[error("emoji size must be at least {min}, got {0}", min = MIN_BUILTIN_SIZE)]
    EmojiSize(u32),
}

/// Tunables for a pass. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojifyConfig {
    pub smile_threshold: f32,
    pub eye_open_threshold: f32,
    pub scale_factor: f64,
    pub height_scaling: HeightScaling,
    /// Directory of `<asset_name>.png` files; the builtin set when `None`.
    pub emoji_dir: Option<PathBuf>,
    /// Edge length of the builtin set.
    pub emoji_size: u32,
}

impl Default for EmojifyConfig {
    fn default() -> Self {
        Self {
            smile_threshold: SMILING_PROB_THRESHOLD,
            eye_open_threshold: EYE_OPEN_PROB_THRESHOLD,
            scale_factor: EMOJI_SCALE_FACTOR,
            height_scaling: HeightScaling::Compatible,
            emoji_dir: None,
            emoji_size: DEFAULT_EMOJI_SIZE,
        }
    }
}

impl EmojifyConfig {
    /// `<platform config dir>/Emojify/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads from `path` when given; errors are reported.
    ///
    /// Without a path, the default location is tried and a missing file
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::from_file(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("smile threshold", f64::from(self.smile_threshold)),
            ("eye-open threshold", f64::from(self.eye_open_threshold)),
            ("scale factor", self.scale_factor),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        if self.scale_factor <= 0.0 {
            return Err(ConfigError::ScaleFactor(self.scale_factor));
        }
        if self.emoji_size < MIN_BUILTIN_SIZE {
            return Err(ConfigError::EmojiSize(self.emoji_size));
        }
        Ok(())
    }

    pub fn classifier(&self) -> ExpressionClassifier {
        ExpressionClassifier::new(ClassifierThresholds {
            smile: self.smile_threshold,
            eye_open: self.eye_open_threshold,
        })
    }

    pub fn sizing(&self) -> EmojiSizing {
        EmojiSizing {
            scale_factor: self.scale_factor,
            height_scaling: self.height_scaling,
        }
    }
}
