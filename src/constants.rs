//! Application constants and configuration

use std::time::Duration;

pub const APP_NAME: &str = "All About Cats";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CONFIG_DIR_NAME: &str = "cat-facts";

pub const HERO_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Cat03.jpg/1200px-Cat03.jpg";

/// Default delay between two fact rotations
pub const FACT_INTERVAL: Duration = Duration::from_secs(5);

/// Concurrent image downloads
pub const IMAGE_FETCH_CONCURRENCY: usize = 4;

// Toast timing (seconds)
pub const TOAST_VISIBLE_SECS: f32 = 3.0;
pub const TOAST_FADE_SECS: f32 = 0.5;

// Celebration overlay
pub const CELEBRATION_SECS: f32 = 3.0;
pub const CONFETTI_COUNT: usize = 120;
pub const LIKE_CELEBRATION_EVERY: u32 = 10;

/// Scroll offset (px) past which the scroll-to-top button appears
pub const SCROLL_TOP_THRESHOLD: f32 = 300.0;
