mod nord;

use egui::{Color32, Stroke, Visuals};

/// Colors used by status indicators
pub struct ExtraPalette {
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub info: Color32,
}

pub fn extra_palette() -> ExtraPalette {
    ExtraPalette {
        success: nord::SUCCESS,
        warning: nord::WARNING,
        error: nord::ERR,
        info: nord::INFO,
    }
}

pub fn eye_care_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(nord::FG_MAIN);
    visuals.panel_fill = nord::BG_MAIN;
    visuals.window_fill = nord::BG_MAIN;
    visuals.extreme_bg_color = nord::BG_TEXT;
    visuals.faint_bg_color = nord::BG_DIM;
    visuals.hyperlink_color = nord::ACCENT_LIGHT;

    visuals.selection.bg_fill = nord::ACCENT_LIGHT;
    visuals.selection.stroke = Stroke::new(1.0, nord::BG_MAIN);

    visuals.widgets.inactive.bg_fill = nord::BG_INPUT;
    visuals.widgets.inactive.weak_bg_fill = nord::BG_INPUT;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, nord::FG_BRIGHT);
    visuals.widgets.hovered.bg_fill = nord::ACCENT_LIGHT;
    visuals.widgets.hovered.weak_bg_fill = nord::ACCENT_LIGHT;
    visuals.widgets.active.bg_fill = nord::ACCENT;
    visuals.widgets.active.weak_bg_fill = nord::ACCENT;
    visuals.widgets.noninteractive.bg_fill = nord::BG_MAIN;

    visuals
}
