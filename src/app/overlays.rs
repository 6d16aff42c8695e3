//! Floating layers drawn above the page: toast, confetti, scroll-to-top

use super::App;
use crate::constants::{TOAST_FADE_SECS, TOAST_VISIBLE_SECS};
use crate::theme;
use crate::types::{Toast, ToastKind};
use crate::ui::components;
use eframe::egui;
use egui_phosphor::regular as icons;
use std::time::Instant;

impl App {
    // ========================================================================
    // TOAST
    // ========================================================================

    /// Bottom-right of the page, 3s visible then fade, paused on hover
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(toast), Some(panel_rect)) = (self.page.toast.clone(), self.page_rect) else {
            return;
        };
        let p = self.page.theme.palette();
        let margin = 16.0;
        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);
        let elapsed = toast.started.elapsed().as_secs_f32();
        let alpha = Toast::alpha_at(elapsed);

        let (icon, icon_color) = match toast.kind {
            ToastKind::Info => (icons::INFO, p.info),
            ToastKind::Success => (icons::CHECK_CIRCLE, theme::STATUS_SUCCESS),
            ToastKind::Error => (icons::X_CIRCLE, theme::STATUS_ERROR),
        };

        let response = egui::Area::new(egui::Id::new("page_toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(p.card.gamma_multiply(alpha))
                    .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, p.border.gamma_multiply(alpha)))
                    .corner_radius(theme::RADIUS_MEDIUM)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.horizontal_top(|ui| {
                            ui.label(
                                egui::RichText::new(icon)
                                    .size(theme::FONT_TITLE)
                                    .color(icon_color.gamma_multiply(alpha)),
                            );
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(&toast.title)
                                        .strong()
                                        .color(p.text_primary.gamma_multiply(alpha)),
                                );
                                ui.label(
                                    egui::RichText::new(&toast.description)
                                        .size(theme::FONT_SMALL + 1.0)
                                        .color(p.text_secondary.gamma_multiply(alpha)),
                                );
                            });
                        });
                    });
            });

        if response.response.hovered() {
            if let Some(current) = self.page.toast.as_mut() {
                current.started = Instant::now();
            }
        }

        if Toast::expired_at(elapsed) {
            self.page.toast = None;
        } else if elapsed > TOAST_VISIBLE_SECS {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(std::time::Duration::from_secs_f32(
                TOAST_VISIBLE_SECS - elapsed + TOAST_FADE_SECS * 0.1,
            ));
        }
    }

    // ========================================================================
    // CELEBRATION
    // ========================================================================

    pub fn render_celebration(&mut self, ctx: &egui::Context) {
        self.start_pending_celebration();
        let Some(celebration) = self.celebration.as_mut() else {
            return;
        };

        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        let running = celebration.step(dt);

        let mut dismissed = false;
        egui::Area::new(egui::Id::new("celebration"))
            .fixed_pos(egui::Pos2::ZERO)
            .order(egui::Order::Foreground)
            .interactable(true)
            .show(ctx, |ui| {
                let screen = ctx.screen_rect();
                let response = ui.allocate_rect(screen, egui::Sense::click());
                celebration.paint(ui.painter());
                let alpha = celebration.alpha();
                ui.painter().text(
                    screen.center(),
                    egui::Align2::CENTER_CENTER,
                    format!("{}  Purr-fect!", icons::CONFETTI),
                    egui::FontId::proportional(theme::FONT_HERO * 1.5),
                    egui::Color32::WHITE.gamma_multiply(alpha),
                );
                if response.clicked() {
                    dismissed = true;
                }
            });

        if !running || dismissed {
            self.celebration = None;
        } else {
            ctx.request_repaint();
        }
    }

    // ========================================================================
    // SCROLL TO TOP
    // ========================================================================

    pub fn render_scroll_top(&mut self, ctx: &egui::Context) {
        if !self.page.show_scroll_top {
            return;
        }
        let Some(panel_rect) = self.page_rect else {
            return;
        };
        let p = self.page.theme.palette();
        let margin = 24.0;
        egui::Area::new(egui::Id::new("scroll_top"))
            .fixed_pos(egui::pos2(panel_rect.right() - margin, panel_rect.top() + margin))
            .pivot(egui::Align2::RIGHT_TOP)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let resp = components::icon_button(ui, icons::ARROW_UP, p.accent, p.accent_text, theme::SCROLL_TOP_SIZE)
                    .on_hover_text("Back to top");
                if resp.clicked() {
                    self.scroll_to_top = true;
                    ctx.request_repaint();
                }
            });
    }
}
