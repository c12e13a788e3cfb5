mod config;
mod font;
pub mod shape;
mod theme;

pub use config::UiConfig;
pub use font::setup_fonts;
pub use theme::{extra_palette, eye_care_visuals};

use crate::constants;
use egui::{FontId, TextStyle};
use std::collections::BTreeMap;


pub fn setup_ui(ctx: &egui::Context, cfg: &UiConfig) {
    setup_fonts(ctx);

    // UI Scale
    if let Some(scale) = cfg.scale {
        ctx.set_pixels_per_point(scale);
    }

    ctx.set_theme(egui::Theme::Dark);
    let mut style = (*ctx.style()).clone();

    // Font Size
    let font_size = cfg.font_size;
    let text_styles: BTreeMap<_, _> = [
        (TextStyle::Small, FontId::proportional(font_size * 0.85)),
        (TextStyle::Body, FontId::proportional(font_size)),
        (TextStyle::Heading, FontId::proportional(font_size * 1.2)),
        (TextStyle::Monospace, FontId::monospace(font_size)),
        (TextStyle::Button, FontId::proportional(font_size)),
        (
            TextStyle::Name(constants::TEXT_STYLE_CONTENT.into()),
            FontId::monospace(font_size * 0.95),
        ),
    ].into();
    style.text_styles = text_styles;

    // Theme
    style.visuals = eye_care_visuals();

    ctx.set_style(style);
}
