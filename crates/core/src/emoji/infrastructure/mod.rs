pub mod builtin_emoji;
pub mod emoji_asset_table;
