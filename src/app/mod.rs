//! App module - owns the page state plus the egui/runtime resources around it

mod images;
mod overlays;
mod views;

use crate::celebration::Celebration;
use crate::facts::FactTicker;
use crate::page::PageState;
use crate::settings::Settings;
use crate::theme::{self, ThemeKey};
use crate::types::ImageSlot;
use eframe::egui;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Decoded images waiting to be uploaded as textures on the UI thread
pub(crate) type ImageInbox = Arc<Mutex<Vec<(&'static str, Option<egui::ColorImage>)>>>;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) page: PageState,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Fact rotation
    pub(crate) fact_interval: Duration,
    pub(crate) fact_ticker: Option<FactTicker>,
    // Theme currently pushed into egui's visuals
    pub(crate) applied_theme: Option<ThemeKey>,
    // Remote images
    pub(crate) load_images: bool,
    pub(crate) fetch_started: bool,
    pub(crate) images: HashMap<&'static str, ImageSlot>,
    pub(crate) image_inbox: ImageInbox,
    // Overlays
    pub(crate) celebration: Option<Celebration>,
    pub(crate) scroll_to_top: bool,
    pub(crate) page_rect: Option<egui::Rect>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, runtime: tokio::runtime::Runtime) -> Self {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let theme = settings.theme_key();
        info!(theme = ?theme, "Applying initial theme");
        theme::apply_visuals(&cc.egui_ctx, theme.palette());

        let mut app = Self {
            page: PageState::new(theme),
            runtime,
            fact_interval: settings.fact_interval(),
            fact_ticker: None,
            applied_theme: Some(theme),
            load_images: settings.load_images,
            fetch_started: false,
            images: HashMap::new(),
            image_inbox: Arc::new(Mutex::new(Vec::new())),
            celebration: None,
            scroll_to_top: false,
            page_rect: None,
        };
        app.start_fact_ticker(&cc.egui_ctx);
        app
    }

    pub(crate) fn start_fact_ticker(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        self.fact_ticker = Some(FactTicker::spawn(
            self.runtime.handle(),
            self.fact_interval,
            move || ctx.request_repaint(),
        ));
    }

    /// Pull pending timer ticks into the page state
    pub(crate) fn poll_fact_ticker(&mut self) {
        if let Some(ticker) = self.fact_ticker.as_mut() {
            let ticks = ticker.drain();
            if ticks > 0 {
                self.page.rotate_facts(ticks);
                debug!(index = self.page.facts.index(), "Fact rotated");
            }
        }
    }

    /// Push the selected palette into egui when it changed
    pub(crate) fn sync_theme(&mut self, ctx: &egui::Context) {
        if self.applied_theme != Some(self.page.theme) {
            theme::apply_visuals(ctx, self.page.theme.palette());
            self.applied_theme = Some(self.page.theme);
        }
    }

    /// Turn a pending celebration request into a running confetti overlay
    pub(crate) fn start_pending_celebration(&mut self) {
        if !self.page.celebration_pending {
            return;
        }
        self.page.celebration_pending = false;
        let Some(area) = self.page_rect else {
            warn!("No page area for celebration overlay");
            return;
        };
        self.celebration = Some(Celebration::burst(&mut rand::thread_rng(), area));
        debug!("Celebration started");
    }

    pub(crate) fn shutdown(&mut self) {
        if let Some(ticker) = self.fact_ticker.take() {
            ticker.stop();
        }
    }
}
