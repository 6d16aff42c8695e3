//! User settings read from settings.json in the app config directory.
//! The page keeps no state between runs, so this file is only ever read.

use crate::constants::{CONFIG_DIR_NAME, FACT_INTERVAL};
use crate::theme::ThemeKey;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Page
    pub theme: String,
    pub fact_interval_secs: u64,
    pub load_images: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_w: None,
            window_h: None,
            theme: "light".to_string(),
            fact_interval_secs: FACT_INTERVAL.as_secs(),
            load_images: true,
        }
    }
}

impl Settings {
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
    }

    pub fn load(config_dir: &Path) -> Self {
        let path = config_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::parse(&s).unwrap_or_else(|e| {
                warn!(error = %e, path = %path.display(), "Failed to parse settings, using defaults");
                Self::default()
            }),
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn parse(json: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        debug!(theme = %settings.theme, interval = settings.fact_interval_secs, "Settings loaded");
        Ok(settings)
    }

    /// Configured theme, falling back to the default for names outside the theme table
    pub fn theme_key(&self) -> ThemeKey {
        ThemeKey::from_name(&self.theme).unwrap_or_else(|| {
            warn!(theme = %self.theme, "Unknown theme in settings, using default");
            ThemeKey::default()
        })
    }

    pub fn fact_interval(&self) -> Duration {
        Duration::from_secs(self.fact_interval_secs.max(1))
    }

    pub fn window_size(&self) -> Option<egui::Vec2> {
        match (self.window_w, self.window_h) {
            (Some(w), Some(h)) if w > 0.0 && h > 0.0 => Some(egui::vec2(w, h)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let s = Settings::parse(r#"{ "theme": "ocean" }"#).unwrap();
        assert_eq!(s.theme_key(), ThemeKey::Ocean);
        assert_eq!(s.fact_interval(), FACT_INTERVAL);
        assert!(s.load_images);
        assert!(s.window_size().is_none());
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let s = Settings::parse(r#"{ "theme": "neon" }"#).unwrap();
        assert_eq!(s.theme_key(), ThemeKey::Light);
    }

    #[test]
    fn test_interval_is_clamped() {
        let s = Settings::parse(r#"{ "fact_interval_secs": 0 }"#).unwrap();
        assert_eq!(s.fact_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_window_size() {
        let s = Settings::parse(r#"{ "window_w": 1000.0, "window_h": 700.0 }"#).unwrap();
        assert_eq!(s.window_size(), Some(egui::vec2(1000.0, 700.0)));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::parse("{ theme: ").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = std::env::temp_dir().join("cat-facts-settings-test-missing");
        let s = Settings::load(&dir);
        assert_eq!(s.theme_key(), ThemeKey::Light);
    }
}
