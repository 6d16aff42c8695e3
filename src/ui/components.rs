//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::theme::{self, Palette};
use eframe::egui;

/// Pill-style segmented control. Returns the newly clicked index, if it changed.
pub fn segmented_picker(
    ui: &mut egui::Ui,
    p: &Palette,
    labels: &[&str],
    active: usize,
) -> Option<usize> {
    let height = 29.0;
    let font = egui::FontId::proportional(theme::FONT_SMALL);
    let rounding = 4.0;
    let pad = 12.0;

    let widths: Vec<f32> = labels
        .iter()
        .map(|l| {
            ui.fonts(|f| f.layout_no_wrap(l.to_string(), font.clone(), p.text_primary).rect.width())
                + pad * 2.0
        })
        .collect();
    let total: f32 = widths.iter().sum::<f32>() + 4.0;

    let (rect, response) = ui.allocate_exact_size(egui::vec2(total, height), egui::Sense::click());
    let painter = ui.painter();

    // Container, then the active segment with a 1px glow
    painter.rect_filled(rect, rounding + 2.0, p.surface);

    let mut changed = None;
    let mut x = rect.min.x + 2.0;
    for (i, (label, w)) in labels.iter().zip(&widths).enumerate() {
        let seg = egui::Rect::from_min_max(
            egui::pos2(x, rect.min.y + 2.0),
            egui::pos2(x + w, rect.max.y - 2.0),
        );
        let color = if i == active {
            painter.rect_filled(seg, rounding, p.accent.gamma_multiply(0.55));
            painter.rect_filled(seg.shrink(1.0), rounding - 1.0, p.accent);
            p.accent_text
        } else {
            p.text_muted
        };
        painter.text(seg.center(), egui::Align2::CENTER_CENTER, *label, font.clone(), color);

        if response.clicked() && i != active {
            if let Some(pos) = response.interact_pointer_pos() {
                if pos.x >= seg.min.x && pos.x < seg.max.x {
                    changed = Some(i);
                }
            }
        }
        x += w;
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    changed
}

/// Thin rounded progress bar, `fraction` in 0..=1
pub fn progress_bar(ui: &mut egui::Ui, p: &Palette, fraction: f32) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, theme::PROGRESS_HEIGHT), egui::Sense::hover());
    let painter = ui.painter();
    let r = theme::PROGRESS_HEIGHT / 2.0;
    painter.rect_filled(rect, r, p.border);
    let fraction = fraction.clamp(0.0, 1.0);
    if fraction > 0.0 {
        let fill = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width() * fraction, rect.height()));
        painter.rect_filled(fill, r, p.accent);
    }
}

/// Row of indicator dots. Returns the index of a clicked dot.
pub fn carousel_dots(ui: &mut egui::Ui, p: &Palette, count: usize, active: usize) -> Option<usize> {
    let spacing = 14.0;
    let width = spacing * count as f32;
    let mut clicked = None;
    ui.horizontal(|ui| {
        let pad = ((ui.available_width() - width) / 2.0).max(0.0);
        ui.add_space(pad);
        for i in 0..count {
            let (rect, resp) = ui.allocate_exact_size(egui::vec2(spacing, spacing), egui::Sense::click());
            let color = if i == active {
                p.accent
            } else if resp.hovered() {
                theme::mix(p.border, p.accent, 0.5)
            } else {
                p.border
            };
            ui.painter().circle_filled(rect.center(), theme::DOT_RADIUS, color);
            if resp.clicked() {
                clicked = Some(i);
            }
        }
    });
    clicked
}

/// Round icon-only button, painted with hover/press effects
pub fn icon_button(ui: &mut egui::Ui, icon: &str, fill: egui::Color32, fg: egui::Color32, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let (fill, draw) = theme::button_visual(&response, fill, rect);
        let painter = ui.painter();
        painter.circle_filled(draw.center(), draw.width() / 2.0, fill);
        painter.text(
            draw.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(size * 0.45),
            fg,
        );
    }
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Icon followed by wrapped text
pub fn icon_row(ui: &mut egui::Ui, icon: &str, icon_color: egui::Color32, add_text: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal_top(|ui| {
        ui.label(egui::RichText::new(icon).color(icon_color).size(theme::FONT_HEADING));
        ui.vertical(add_text);
    });
}

/// Vertical gradient fill (top to bottom)
pub fn paint_gradient(painter: &egui::Painter, rect: egui::Rect, top: egui::Color32, bottom: egui::Color32) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    painter.add(egui::Shape::mesh(mesh));
}

/// Rounded placeholder shown while an image loads or after it failed
pub fn image_placeholder(ui: &mut egui::Ui, p: &Palette, size: egui::Vec2, icon: &str, caption: &str) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, theme::RADIUS_LARGE, p.surface);
    painter.text(
        rect.center() - egui::vec2(0.0, 12.0),
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(36.0),
        p.text_muted,
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 20.0),
        egui::Align2::CENTER_CENTER,
        caption,
        egui::FontId::proportional(theme::FONT_SMALL),
        p.text_muted,
    );
}
