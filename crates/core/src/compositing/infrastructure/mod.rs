pub mod emoji_overlay_compositor;
