pub mod emojify_image_use_case;
pub mod notifier;
