use egui::{Color32, Response, Sense, TextStyle, Ui, vec2};

/// A filled dot sized to the body text line, used as a status indicator.
pub fn status_dot(ui: &mut Ui, color: Color32, hover_text: &str) -> Response {
    let row_height = ui.text_style_height(&TextStyle::Body);
    let radius = (row_height * 0.3).max(3.0);
    let (rect, response) =
        ui.allocate_exact_size(vec2(radius * 2.0, row_height), Sense::hover());
    ui.painter().circle_filled(rect.center(), radius, color);
    response.on_hover_text(hover_text)
}
