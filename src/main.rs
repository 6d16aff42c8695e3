#![windows_subsystem = "windows"]
//! All About Cats - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod celebration;
mod constants;
mod data;
mod facts;
mod page;
mod quiz;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use settings::Settings;
use tracing::{info, warn};

/// Initialize logging to stderr. Returns a guard that must be held for the app lifetime.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cat_facts=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    // Guard must live for entire app lifetime
    let _log_guard = init_logging();

    info!(version = APP_VERSION, "All About Cats starting");

    let config_dir = Settings::config_dir();
    let settings = Settings::load(&config_dir);

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(settings.window_size().unwrap_or(egui::vec2(1100.0, 860.0)))
        .with_min_inner_size([640.0, 520.0])
        .with_title(APP_NAME);

    // Window/taskbar icon from the embedded SVG
    match utils::rasterize_icon(64) {
        Some((rgba, width, height)) => {
            let icon = egui::IconData { rgba, width, height };
            viewport = viewport.with_icon(std::sync::Arc::new(icon));
        }
        None => warn!("Failed to rasterize window icon"),
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let runtime = tokio::runtime::Runtime::new()?;
            Ok(Box::new(App::new(cc, settings, runtime)))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Start image downloads on first frame
        if !self.fetch_started {
            self.start_image_fetch(ctx);
        }

        self.poll_fact_ticker();
        self.poll_images(ctx);
        self.sync_theme(ctx);

        self.render_page(ctx);
        self.render_scroll_top(ctx);
        self.render_toast(ctx);
        self.render_celebration(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.shutdown();
    }
}
