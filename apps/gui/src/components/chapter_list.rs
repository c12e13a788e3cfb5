use super::ContextComponent;
use crate::constants;
use egui_i18n::tr;

#[derive(Default)]
pub struct ChapterList;

pub struct ChapterListProps<'a> {
    /// Titles of the visible chapters, in document order
    pub titles: Vec<&'a str>,
    pub selected: Option<&'a str>,
}

pub struct ChapterListOutput {
    pub events: Vec<ChapterListEvent>,
}

pub enum ChapterListEvent {
    /// User clicked on a title
    Select(String),
}

impl ContextComponent for ChapterList {
    type Props<'a> = ChapterListProps<'a>;
    type Output = ChapterListOutput;

    fn render(&mut self, ctx: &egui::Context, props: Self::Props<'_>) -> Self::Output {
        let mut events = Vec::new();

        egui::SidePanel::left(constants::ID_PANEL_CHAPTER_LIST)
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                if props.titles.is_empty() {
                    ui.weak(tr!("chapter-list-empty"));
                    return;
                }

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for title in &props.titles {
                            let selected = props.selected == Some(*title);
                            if ui.selectable_label(selected, *title).clicked() {
                                events.push(ChapterListEvent::Select(title.to_string()));
                            }
                        }
                    });
            });

        ChapterListOutput { events }
    }
}
