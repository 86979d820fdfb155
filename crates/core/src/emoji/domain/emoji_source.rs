use crate::emoji::domain::emoji_graphic::EmojiGraphic;
use crate::expression::domain::emoji_category::EmojiCategory;

/// Resolves a category to its graphic.
///
/// Lookup is total: implementations must hold a graphic for every category,
/// so a missing asset is rejected when the source is built, not at draw time.
pub trait EmojiSource: Send {
    fn graphic(&self, category: EmojiCategory) -> &EmojiGraphic;
}
