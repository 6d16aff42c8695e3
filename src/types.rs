//! Common types and data structures

use crate::constants::{SCROLL_TOP_THRESHOLD, TOAST_FADE_SECS, TOAST_VISIBLE_SECS};
use std::time::Instant;

/// Tabs in the info section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoTab {
    Characteristics,
    Breeds,
}

/// Transient notification, one at a time
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    pub started: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
            started: Instant::now(),
        }
    }

    /// Opacity for a toast that has been shown for `elapsed` seconds
    pub fn alpha_at(elapsed: f32) -> f32 {
        if elapsed <= TOAST_VISIBLE_SECS {
            1.0
        } else {
            ((TOAST_VISIBLE_SECS + TOAST_FADE_SECS - elapsed) / TOAST_FADE_SECS).clamp(0.0, 1.0)
        }
    }

    pub fn expired_at(elapsed: f32) -> bool {
        elapsed >= TOAST_VISIBLE_SECS + TOAST_FADE_SECS
    }
}

/// Load state of one remote image
#[derive(Clone)]
pub enum ImageSlot {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
}

/// Whether the floating scroll-to-top button should be visible
pub fn scroll_top_visible(offset_y: f32) -> bool {
    offset_y > SCROLL_TOP_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_fade() {
        assert_eq!(Toast::alpha_at(0.0), 1.0);
        assert_eq!(Toast::alpha_at(TOAST_VISIBLE_SECS), 1.0);
        let mid = Toast::alpha_at(TOAST_VISIBLE_SECS + TOAST_FADE_SECS / 2.0);
        assert!((mid - 0.5).abs() < 1e-4);
        assert_eq!(Toast::alpha_at(100.0), 0.0);
        assert!(!Toast::expired_at(TOAST_VISIBLE_SECS));
        assert!(Toast::expired_at(TOAST_VISIBLE_SECS + TOAST_FADE_SECS));
    }

    #[test]
    fn test_scroll_top_threshold() {
        assert!(!scroll_top_visible(0.0));
        assert!(!scroll_top_visible(SCROLL_TOP_THRESHOLD));
        assert!(scroll_top_visible(SCROLL_TOP_THRESHOLD + 1.0));
    }
}
