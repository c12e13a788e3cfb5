 // hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ui;
mod app;
mod backend;
mod components;
mod config;
mod constants;
mod error;

use eframe::egui;

fn main() -> eframe::Result {
    tracing_subscriber::fmt::init();

    let config = config::Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {e:#}");
        config::Config::default()
    });

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.app.width, config.app.height])
         // Wayland user can use app-id to customize window's behavior
        .with_app_id(constants::APP_ID)
        .with_drag_and_drop(true);

    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    eframe::run_native(
        ::config::constants::APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc, config)))),
    )
}
