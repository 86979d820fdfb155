pub mod emoji_category;
pub mod expression_classifier;
