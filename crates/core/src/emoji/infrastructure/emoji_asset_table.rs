use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::emoji::domain::emoji_graphic::EmojiGraphic;
use crate::emoji::domain::emoji_source::EmojiSource;
use crate::expression::domain::emoji_category::EmojiCategory;
use crate::shared::constants::EMOJI_ASSET_EXTENSION;

use super::builtin_emoji;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("no emoji graphic for category '{0}'")]
    Missing(EmojiCategory),
    #[error("emoji asset not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to decode emoji asset {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("emoji asset {0} has zero width or height")]
    Empty(PathBuf),
}

/// Immutable category-to-graphic table, built once at startup.
///
/// Holds exactly one graphic per [`EmojiCategory`], indexed by
/// [`EmojiCategory::index`].
#[derive(Clone, Debug)]
pub struct EmojiAssetTable {
    graphics: Vec<EmojiGraphic>,
}

impl EmojiAssetTable {
    /// Builds a table from an explicit map. Every category must be present.
    pub fn from_graphics(
        mut graphics: HashMap<EmojiCategory, EmojiGraphic>,
    ) -> Result<Self, AssetError> {
        let ordered = EmojiCategory::ALL
            .iter()
            .map(|&c| graphics.remove(&c).ok_or(AssetError::Missing(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { graphics: ordered })
    }

    /// Loads `<asset_name>.png` for every category from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, AssetError> {
        let mut graphics = HashMap::with_capacity(EmojiCategory::ALL.len());
        for category in EmojiCategory::ALL {
            let path = dir
                .join(category.asset_name())
                .with_extension(EMOJI_ASSET_EXTENSION);
            if !path.exists() {
                return Err(AssetError::NotFound(path));
            }
            let pixels = image::open(&path)
                .map_err(|source| AssetError::Decode {
                    path: path.clone(),
                    source,
                })?
                .into_rgba8();
            let graphic = EmojiGraphic::new(pixels).ok_or_else(|| AssetError::Empty(path))?;
            graphics.insert(category, graphic);
        }
        log::info!("Loaded {} emoji assets from {}", graphics.len(), dir.display());
        Self::from_graphics(graphics)
    }

    /// Procedurally drawn set of `size`x`size` emoji.
    pub fn builtin(size: u32) -> Self {
        let graphics = EmojiCategory::ALL
            .iter()
            .map(|&c| builtin_emoji::draw(c, size))
            .collect();
        Self { graphics }
    }
}

impl EmojiSource for EmojiAssetTable {
    fn graphic(&self, category: EmojiCategory) -> &EmojiGraphic {
        &self.graphics[category.index()]
    }
}
