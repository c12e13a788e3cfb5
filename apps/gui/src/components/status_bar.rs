use crate::{
    components::ContextComponent,
    ui::{extra_palette, shape},
};
use egui_i18n::tr;

#[derive(Default)]
pub struct StatusBar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Idle,
    Working,
    Warning,
    Error,
}

pub struct StatusBarProps<'a> {
    pub kind: StatusKind,
    pub message: &'a str,
    pub visible: usize,
    pub total: usize,
}

impl ContextComponent for StatusBar {
    type Props<'a> = StatusBarProps<'a>;
    type Output = ();

    fn render(&mut self, ctx: &egui::Context, props: Self::Props<'_>) -> Self::Output {
        let palette = extra_palette();
        let (color, hover) = match props.kind {
            StatusKind::Idle => (palette.success, tr!("status-idle")),
            StatusKind::Working => (palette.info, tr!("status-working")),
            StatusKind::Warning => (palette.warning, tr!("status-warning")),
            StatusKind::Error => (palette.error, tr!("status-error")),
        };

        egui::TopBottomPanel::bottom(crate::constants::ID_PANEL_STATUS_BAR)
            .frame(egui::Frame::NONE.inner_margin(egui::vec2(8.0, 2.0)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    shape::status_dot(ui, color, &hover);
                    ui.label(props.message);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!(
                            "{} {}/{}",
                            tr!("status-chapters"),
                            props.visible,
                            props.total
                        ));
                    });
                });
            });
    }
}
