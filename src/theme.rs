//! Centralized theme palettes for All About Cats
//! All colors, sizes, and styling should reference these constants or the active `Palette`

use egui::Color32;
use serde::{Deserialize, Serialize};

// =============================================================================
// THEME KEYS
// =============================================================================

/// Closed set of selectable themes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKey {
    #[default]
    Light,
    Dark,
    Sunset,
    Ocean,
}

impl ThemeKey {
    pub const ALL: [ThemeKey; 4] = [ThemeKey::Light, ThemeKey::Dark, ThemeKey::Sunset, ThemeKey::Ocean];

    pub fn label(self) -> &'static str {
        match self {
            ThemeKey::Light => "Light",
            ThemeKey::Dark => "Dark",
            ThemeKey::Sunset => "Sunset",
            ThemeKey::Ocean => "Ocean",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.label().eq_ignore_ascii_case(name.trim()))
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeKey::Light => &LIGHT,
            ThemeKey::Dark => &DARK,
            ThemeKey::Sunset => &SUNSET,
            ThemeKey::Ocean => &OCEAN,
        }
    }

    /// Light/dark switch. Non-default palettes flip to whichever of the two they are not.
    pub fn toggled(self) -> Self {
        if self.palette().dark_mode {
            ThemeKey::Light
        } else {
            ThemeKey::Dark
        }
    }
}

// =============================================================================
// PALETTES
// =============================================================================

/// Style bundle applied to the whole page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub dark_mode: bool,
    pub bg_top: Color32,
    pub bg_bottom: Color32,
    pub card: Color32,
    pub surface: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub accent_text: Color32,
    pub like: Color32,
    pub info: Color32,
}

pub const LIGHT: Palette = Palette {
    dark_mode: false,
    bg_top: Color32::from_rgb(0xdb, 0xea, 0xfe),    // blue-100
    bg_bottom: Color32::from_rgb(0xf3, 0xe8, 0xff), // purple-100
    card: Color32::WHITE,
    surface: Color32::from_rgb(0xf4, 0xf4, 0xf5), // zinc-100
    border: Color32::from_rgb(0xe4, 0xe4, 0xe7),  // zinc-200
    text_primary: Color32::from_rgb(0x18, 0x18, 0x1b),
    text_secondary: Color32::from_rgb(0x37, 0x41, 0x51), // gray-700
    text_muted: Color32::from_rgb(0x71, 0x71, 0x7a),
    accent: Color32::from_rgb(0x93, 0x33, 0xea), // purple-600
    accent_text: Color32::WHITE,
    like: Color32::from_rgb(0xec, 0x48, 0x99), // pink-500
    info: Color32::from_rgb(0x3b, 0x82, 0xf6), // blue-500
};

pub const DARK: Palette = Palette {
    dark_mode: true,
    bg_top: Color32::from_rgb(0x09, 0x09, 0x0b), // zinc-950
    bg_bottom: Color32::from_rgb(0x1e, 0x1b, 0x4b), // indigo-950
    card: Color32::from_rgb(0x18, 0x18, 0x1b),
    surface: Color32::from_rgb(0x27, 0x27, 0x2a),
    border: Color32::from_rgb(0x3f, 0x3f, 0x46),
    text_primary: Color32::WHITE,
    text_secondary: Color32::from_rgb(0xe4, 0xe4, 0xe7),
    text_muted: Color32::from_rgb(0xa1, 0xa1, 0xaa),
    accent: Color32::from_rgb(0xc0, 0x84, 0xfc), // purple-400
    accent_text: Color32::from_rgb(0x18, 0x18, 0x1b),
    like: Color32::from_rgb(0xf4, 0x72, 0xb6), // pink-400
    info: Color32::from_rgb(0x60, 0xa5, 0xfa),
};

pub const SUNSET: Palette = Palette {
    dark_mode: false,
    bg_top: Color32::from_rgb(0xff, 0xed, 0xd5),    // orange-100
    bg_bottom: Color32::from_rgb(0xfc, 0xe7, 0xf3), // pink-100
    card: Color32::from_rgb(0xff, 0xfb, 0xeb),
    surface: Color32::from_rgb(0xfe, 0xf3, 0xc7),
    border: Color32::from_rgb(0xfd, 0xe6, 0x8a),
    text_primary: Color32::from_rgb(0x43, 0x14, 0x07),
    text_secondary: Color32::from_rgb(0x7c, 0x2d, 0x12),
    text_muted: Color32::from_rgb(0x9a, 0x34, 0x12),
    accent: Color32::from_rgb(0xea, 0x58, 0x0c), // orange-600
    accent_text: Color32::WHITE,
    like: Color32::from_rgb(0xe1, 0x1d, 0x48), // rose-600
    info: Color32::from_rgb(0xd9, 0x77, 0x06),
};

pub const OCEAN: Palette = Palette {
    dark_mode: true,
    bg_top: Color32::from_rgb(0x08, 0x2f, 0x49),    // sky-950
    bg_bottom: Color32::from_rgb(0x04, 0x2f, 0x2e), // teal-950
    card: Color32::from_rgb(0x0c, 0x4a, 0x6e),
    surface: Color32::from_rgb(0x07, 0x59, 0x85),
    border: Color32::from_rgb(0x03, 0x69, 0xa1),
    text_primary: Color32::from_rgb(0xf0, 0xf9, 0xff),
    text_secondary: Color32::from_rgb(0xe0, 0xf2, 0xfe),
    text_muted: Color32::from_rgb(0x7d, 0xd3, 0xfc),
    accent: Color32::from_rgb(0x2d, 0xd4, 0xbf), // teal-400
    accent_text: Color32::from_rgb(0x04, 0x2f, 0x2e),
    like: Color32::from_rgb(0xfb, 0x71, 0x85),
    info: Color32::from_rgb(0x38, 0xbd, 0xf8),
};

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

pub const CONFETTI: [Color32; 6] = [
    Color32::from_rgb(0xf4, 0x72, 0xb6),
    Color32::from_rgb(0xc0, 0x84, 0xfc),
    Color32::from_rgb(0x60, 0xa5, 0xfa),
    Color32::from_rgb(0x34, 0xd3, 0x99),
    Color32::from_rgb(0xfb, 0xbf, 0x24),
    Color32::from_rgb(0xfb, 0x92, 0x3c),
];

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HERO: f32 = 32.0;
pub const FONT_TITLE: f32 = 20.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 15.0;
pub const FONT_SMALL: f32 = 12.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const PAGE_MAX_WIDTH: f32 = 900.0;
pub const HERO_IMG_HEIGHT: f32 = 400.0;
pub const CAROUSEL_IMG_HEIGHT: f32 = 280.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
pub const PROGRESS_HEIGHT: f32 = 8.0;
pub const DOT_RADIUS: f32 = 4.0;
pub const SCROLL_TOP_SIZE: f32 = 44.0;

// =============================================================================
// CORNER RADIUS / STROKES / SPACING
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_MEDIUM: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 8.0;

pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;
pub const SPACING_XXL: f32 = 24.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, p: &Palette) {
    let base = if p.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    let widget = |bg: Color32, fg: Color32, stroke: egui::Stroke, expansion: f32| {
        egui::style::WidgetVisuals {
            bg_fill: bg,
            weak_bg_fill: bg,
            bg_stroke: stroke,
            fg_stroke: egui::Stroke::new(STROKE_DEFAULT, fg),
            corner_radius: RADIUS_DEFAULT.into(),
            expansion,
        }
    };

    ctx.set_visuals(egui::Visuals {
        dark_mode: p.dark_mode,
        panel_fill: p.bg_top,
        window_fill: p.card,
        extreme_bg_color: p.surface,
        faint_bg_color: p.surface,
        hyperlink_color: p.accent,
        override_text_color: Some(p.text_primary),
        selection: egui::style::Selection {
            bg_fill: p.accent.gamma_multiply(0.35),
            stroke: egui::Stroke::new(STROKE_DEFAULT, p.accent),
        },
        widgets: egui::style::Widgets {
            noninteractive: widget(p.card, p.text_secondary, egui::Stroke::new(STROKE_DEFAULT, p.border), 0.0),
            inactive: widget(p.surface, p.text_primary, egui::Stroke::new(STROKE_DEFAULT, p.border), 0.0),
            hovered: widget(lighten(p.surface, 0.12), p.text_primary, egui::Stroke::new(STROKE_MEDIUM, p.accent), 0.0),
            active: widget(lighten(p.surface, 0.06), p.text_primary, egui::Stroke::NONE, -1.0),
            open: widget(p.surface, p.text_primary, egui::Stroke::new(STROKE_DEFAULT, p.border), 0.0),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..base
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn card_frame(p: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.card)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, p.border))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_XXL as i8))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 16,
            spread: 0,
            color: Color32::from_black_alpha(if p.dark_mode { 90 } else { 30 }),
        })
}

/// Inner section (tabs content, quiz box)
pub fn section_frame(p: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.surface)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, p.border))
        .corner_radius(RADIUS_MEDIUM)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Accent button for primary actions (start quiz)
pub fn button_accent(p: &Palette, text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(p.accent_text))
        .fill(p.accent)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

/// Pink like button
pub fn button_like(p: &Palette, text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(Color32::WHITE))
        .fill(p.like)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

/// Plain surface button
pub fn button(p: &Palette, text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(p.text_primary))
        .fill(p.surface)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, p.border))
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Lightens on hover, slightly lightens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

pub fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

/// Linear blend between two colors, t in 0..=1
pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let ch = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(ch(a.r(), b.r()), ch(a.g(), b.g()), ch(a.b(), b.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_key_has_its_own_palette() {
        for (i, a) in ThemeKey::ALL.iter().enumerate() {
            for b in &ThemeKey::ALL[i + 1..] {
                assert_ne!(a.palette(), b.palette(), "{:?} vs {:?}", a, b);
            }
        }
        assert_eq!(ThemeKey::Dark.palette(), &DARK);
        assert_eq!(ThemeKey::Light.palette(), &LIGHT);
    }

    #[test]
    fn test_toggle_round_trip() {
        let key = ThemeKey::Light;
        let dark = key.toggled();
        assert_eq!(dark, ThemeKey::Dark);
        assert!(dark.palette().dark_mode);
        assert_eq!(dark.toggled(), ThemeKey::Light);
    }

    #[test]
    fn test_toggle_from_other_palettes() {
        assert_eq!(ThemeKey::Sunset.toggled(), ThemeKey::Dark);
        assert_eq!(ThemeKey::Ocean.toggled(), ThemeKey::Light);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ThemeKey::from_name("dark"), Some(ThemeKey::Dark));
        assert_eq!(ThemeKey::from_name(" Ocean "), Some(ThemeKey::Ocean));
        assert_eq!(ThemeKey::from_name("neon"), None);
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        assert_eq!(mix(a, b, 0.5), Color32::from_rgb(100, 50, 25));
    }
}
