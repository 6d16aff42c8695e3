//! Page rendering: header, hero, facts, tabs, carousel, quiz, like button

use super::App;
use crate::constants::HERO_IMAGE_URL;
use crate::data::{BREEDS, CHARACTERISTICS, FACTS, INTRO_TEXT, OUTRO_TEXT};
use crate::quiz::QuizPhase;
use crate::theme::{self, Palette, ThemeKey};
use crate::types::{ImageSlot, InfoTab};
use crate::ui::components;
use crate::utils::cover_uv;
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub fn render_page(&mut self, ctx: &egui::Context) {
        let p = *self.page.theme.palette();

        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let panel_rect = ui.max_rect();
                self.page_rect = Some(panel_rect);
                components::paint_gradient(ui.painter(), panel_rect, p.bg_top, p.bg_bottom);

                let mut scroll = egui::ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false, false]);
                if self.scroll_to_top {
                    self.scroll_to_top = false;
                    scroll = scroll.vertical_scroll_offset(0.0);
                }

                let output = scroll.show(ui, |ui| {
                    ui.add_space(theme::SPACING_XXL + theme::SPACING_MD);
                    let avail = ui.available_width();
                    let width = (avail - 2.0 * theme::SPACING_XXL).min(theme::PAGE_MAX_WIDTH);
                    ui.horizontal(|ui| {
                        ui.add_space(((avail - width) / 2.0).max(0.0));
                        ui.vertical(|ui| {
                            ui.set_width(width);
                            theme::card_frame(&p).show(ui, |ui| {
                                self.render_card(ui, &p);
                            });
                        });
                    });
                    ui.add_space(theme::SPACING_XXL * 2.0);
                });

                self.page.on_scroll(output.state.offset.y);
            });
    }

    fn render_card(&mut self, ui: &mut egui::Ui, p: &Palette) {
        self.render_header(ui, p);
        ui.add_space(theme::SPACING_XL);

        self.render_remote_image(ui, p, HERO_IMAGE_URL, theme::HERO_IMG_HEIGHT, "A cute cat");
        ui.add_space(theme::SPACING_XL);

        ui.label(egui::RichText::new(INTRO_TEXT).size(theme::FONT_TITLE - 2.0).color(p.text_secondary));
        ui.add_space(theme::SPACING_XL);

        self.render_fact(ui, p);
        ui.add_space(theme::SPACING_XL);

        self.render_tabs(ui, p);
        ui.add_space(theme::SPACING_XL);

        self.render_carousel(ui, p);
        ui.add_space(theme::SPACING_XL);

        self.render_quiz(ui, p);
        ui.add_space(theme::SPACING_XL);

        ui.label(egui::RichText::new(OUTRO_TEXT).size(theme::FONT_TITLE - 2.0).color(p.text_secondary));
        ui.add_space(theme::SPACING_XL);

        ui.vertical_centered(|ui| {
            let label = format!("{}  Like This Page", icons::HEART);
            if ui.add(theme::button_like(p, label)).clicked() {
                self.page.like();
            }
            if self.page.likes > 0 {
                ui.label(
                    egui::RichText::new(format!("{} likes", self.page.likes))
                        .size(theme::FONT_SMALL)
                        .color(p.text_muted),
                );
            }
        });
    }

    // ========================================================================
    // HEADER
    // ========================================================================

    fn render_header(&mut self, ui: &mut egui::Ui, p: &Palette) {
        ui.horizontal(|ui| {
            let labels: Vec<&str> = ThemeKey::ALL.iter().map(|k| k.label()).collect();
            let active = ThemeKey::ALL
                .iter()
                .position(|k| *k == self.page.theme)
                .unwrap_or(0);
            if let Some(i) = components::segmented_picker(ui, p, &labels, active) {
                self.page.select_theme(ThemeKey::ALL[i]);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let icon = if p.dark_mode { icons::SUN } else { icons::MOON };
                let resp = components::icon_button(ui, icon, p.surface, p.text_primary, theme::BUTTON_HEIGHT)
                    .on_hover_text("Toggle light/dark");
                if resp.clicked() {
                    self.page.toggle_theme();
                }
            });
        });

        ui.add_space(theme::SPACING_LG);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!("{} All About Cats", icons::CAT))
                    .size(theme::FONT_HERO)
                    .strong()
                    .color(p.text_primary),
            );
            ui.label(
                egui::RichText::new("Discover the fascinating world of our feline friends")
                    .size(theme::FONT_HEADING + 2.0)
                    .color(p.text_muted),
            );
        });
    }

    // ========================================================================
    // IMAGES
    // ========================================================================

    fn render_remote_image(&self, ui: &mut egui::Ui, p: &Palette, url: &str, height: f32, alt: &str) {
        let size = egui::vec2(ui.available_width(), height);
        match self.image(url) {
            ImageSlot::Ready(texture) => {
                let uv = cover_uv(texture.size_vec2(), size);
                let sized = egui::load::SizedTexture::new(texture.id(), size);
                ui.add(egui::Image::new(sized).uv(uv).corner_radius(theme::RADIUS_LARGE))
                    .on_hover_text(alt);
            }
            ImageSlot::Loading => {
                components::image_placeholder(ui, p, size, icons::IMAGE, "Loading…");
            }
            ImageSlot::Failed => {
                components::image_placeholder(ui, p, size, icons::IMAGE_BROKEN, alt);
            }
        }
    }

    // ========================================================================
    // FACTS
    // ========================================================================

    fn render_fact(&mut self, ui: &mut egui::Ui, p: &Palette) {
        theme::section_frame(p).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icons::LIGHTBULB).size(theme::FONT_TITLE).color(p.accent));
                ui.label(egui::RichText::new("Did you know?").size(theme::FONT_HEADING).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("{}/{}", self.page.facts.index() + 1, FACTS.len()))
                            .size(theme::FONT_SMALL)
                            .color(p.text_muted),
                    );
                });
            });
            ui.add_space(theme::SPACING_SM);
            ui.horizontal(|ui| {
                if components::icon_button(ui, icons::CARET_LEFT, p.card, p.text_primary, 28.0).clicked() {
                    self.page.facts.back();
                }
                let text_width = (ui.available_width() - 40.0).max(0.0);
                ui.allocate_ui(egui::vec2(text_width, 0.0), |ui| {
                    ui.set_width(text_width);
                    ui.label(
                        egui::RichText::new(self.page.current_fact())
                            .size(theme::FONT_BODY + 1.0)
                            .italics()
                            .color(p.text_secondary),
                    );
                });
                if components::icon_button(ui, icons::CARET_RIGHT, p.card, p.text_primary, 28.0).clicked() {
                    self.page.facts.advance();
                }
            });
        });
    }

    // ========================================================================
    // TABS
    // ========================================================================

    fn render_tabs(&mut self, ui: &mut egui::Ui, p: &Palette) {
        let active = match self.page.tab {
            InfoTab::Characteristics => 0,
            InfoTab::Breeds => 1,
        };
        ui.vertical_centered(|ui| {
            if let Some(i) = components::segmented_picker(ui, p, &["Characteristics", "Popular Breeds"], active) {
                self.page.tab = if i == 0 { InfoTab::Characteristics } else { InfoTab::Breeds };
            }
        });
        ui.add_space(theme::SPACING_MD);

        theme::section_frame(p).show(ui, |ui| {
            ui.set_width(ui.available_width());
            match self.page.tab {
                InfoTab::Characteristics => {
                    ui.label(egui::RichText::new("Characteristics of Cats").size(theme::FONT_TITLE).strong());
                    ui.add_space(theme::SPACING_SM);
                    for trait_text in CHARACTERISTICS {
                        components::icon_row(ui, icons::PAW_PRINT, p.accent, |ui| {
                            ui.label(egui::RichText::new(*trait_text).color(p.text_secondary));
                        });
                    }
                }
                InfoTab::Breeds => {
                    ui.label(egui::RichText::new("Popular Cat Breeds").size(theme::FONT_TITLE).strong());
                    ui.add_space(theme::SPACING_SM);
                    for breed in BREEDS {
                        components::icon_row(ui, icons::INFO, p.info, |ui| {
                            ui.horizontal_wrapped(|ui| {
                                ui.label(egui::RichText::new(format!("{}:", breed.name)).strong());
                                ui.label(egui::RichText::new(breed.description).color(p.text_secondary));
                            });
                        });
                    }
                }
            }
        });
    }

    // ========================================================================
    // CAROUSEL
    // ========================================================================

    fn render_carousel(&mut self, ui: &mut egui::Ui, p: &Palette) {
        let breed = self.page.current_breed();
        theme::section_frame(p).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Meet the Breeds").size(theme::FONT_TITLE).strong());
            ui.add_space(theme::SPACING_MD);

            ui.horizontal(|ui| {
                if components::icon_button(ui, icons::CARET_LEFT, p.card, p.text_primary, 36.0).clicked() {
                    self.page.prev_breed();
                }
                let image_width = (ui.available_width() - 44.0).max(0.0);
                ui.allocate_ui(egui::vec2(image_width, theme::CAROUSEL_IMG_HEIGHT), |ui| {
                    self.render_remote_image(ui, p, breed.image_url, theme::CAROUSEL_IMG_HEIGHT, breed.name);
                });
                if components::icon_button(ui, icons::CARET_RIGHT, p.card, p.text_primary, 36.0).clicked() {
                    self.page.next_breed();
                }
            });

            ui.add_space(theme::SPACING_MD);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(breed.name).size(theme::FONT_HEADING + 2.0).strong());
                ui.label(egui::RichText::new(breed.description).color(p.text_secondary));
            });
            ui.add_space(theme::SPACING_SM);
            if let Some(i) = components::carousel_dots(ui, p, BREEDS.len(), self.page.breed_index) {
                self.page.select_breed(i);
            }
        });
    }

    // ========================================================================
    // QUIZ
    // ========================================================================

    fn render_quiz(&mut self, ui: &mut egui::Ui, p: &Palette) {
        theme::section_frame(p).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icons::QUESTION).size(theme::FONT_TITLE).color(p.accent));
                ui.label(egui::RichText::new("Cat Trivia").size(theme::FONT_TITLE).strong());
            });
            ui.add_space(theme::SPACING_SM);

            match (self.page.quiz.phase(), self.page.quiz.current_question()) {
                (QuizPhase::Asking(index), Some(question)) => {
                    let total = self.page.quiz.total();
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("Question {} of {}", index + 1, total))
                                .size(theme::FONT_SMALL)
                                .color(p.text_muted),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(format!("Score: {}", self.page.quiz.score()))
                                    .size(theme::FONT_SMALL)
                                    .color(p.text_muted),
                            );
                        });
                    });
                    components::progress_bar(ui, p, self.page.quiz.progress_percent() as f32 / 100.0);
                    ui.add_space(theme::SPACING_MD);
                    ui.label(egui::RichText::new(question.prompt).size(theme::FONT_HEADING).strong());
                    ui.add_space(theme::SPACING_SM);

                    let mut chosen = None;
                    let button_width = ui.available_width();
                    for option in question.options {
                        let button = theme::button(p, option).min_size(egui::vec2(button_width, theme::BUTTON_HEIGHT));
                        if ui.add(button).clicked() {
                            chosen = Some(option);
                        }
                    }
                    if let Some(option) = chosen {
                        self.page.answer_quiz(option);
                    }
                }
                _ => {
                    ui.label(egui::RichText::new("Test your cat knowledge with three quick questions.").color(p.text_secondary));
                    if let Some(summary) = self.page.quiz.last_summary() {
                        let color = if summary.is_perfect() { theme::STATUS_SUCCESS } else { p.text_muted };
                        ui.label(
                            egui::RichText::new(format!(
                                "{} Last score: {}/{}",
                                icons::TROPHY,
                                summary.score,
                                summary.total
                            ))
                            .color(color),
                        );
                    }
                    ui.add_space(theme::SPACING_SM);
                    let label = if self.page.quiz.last_summary().is_some() { "Play Again" } else { "Start Quiz" };
                    if ui.add(theme::button_accent(p, label)).clicked() {
                        self.page.start_quiz();
                    }
                }
            }
        });
    }
}
