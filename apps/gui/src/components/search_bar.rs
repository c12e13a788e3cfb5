use super::ContextComponent;
use crate::constants;
use ebook_core::{SearchQuery, SimilarityKind, Threshold};
use egui_i18n::tr;
use std::path::PathBuf;
use strum::IntoEnumIterator;

pub struct SearchBar {
    book_path: String,
    keyword: String,
    kind: SimilarityKind,
    threshold: f64,
    focus: bool,
}

pub struct SearchBarProps {
    /// A search is in flight, searching again is disabled
    pub searching: bool,
}

pub struct SearchBarOutput {
    pub events: Vec<SearchBarEvent>,
}

pub enum SearchBarEvent {
    /// Open the book at the given path
    OpenBook(PathBuf),
    /// Search titles. The keyword is already trimmed and may be empty.
    StartSearch(SearchQuery),
}

impl SearchBar {
    pub fn new(book_path: String, kind: SimilarityKind, threshold: Threshold) -> Self {
        Self {
            book_path,
            keyword: String::new(),
            kind,
            threshold: threshold.value(),
            focus: false,
        }
    }

    pub fn request_focus(&mut self) {
        self.focus = true;
    }

    pub fn set_book_path(&mut self, path: String) {
        self.book_path = path;
    }

    pub fn clear_keyword(&mut self) {
        self.keyword.clear();
    }

    fn query(&self) -> Option<SearchQuery> {
        // The slider keeps the value in range; reject anyway instead of clamping
        let threshold = Threshold::new(self.threshold).ok()?;
        Some(SearchQuery::new(self.keyword.trim(), self.kind, threshold))
    }
}

fn algorithm_label(kind: SimilarityKind) -> String {
    match kind {
        SimilarityKind::Lcs => tr!("algorithm-lcs"),
        SimilarityKind::Levenshtein => tr!("algorithm-levenshtein"),
    }
}

fn enter_pressed(ui: &egui::Ui, resp: &egui::Response) -> bool {
    resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

impl ContextComponent for SearchBar {
    type Props<'a> = SearchBarProps;

    type Output = SearchBarOutput;

    fn render(&mut self, ctx: &egui::Context, props: Self::Props<'_>) -> Self::Output {
        let mut events = vec![];

        egui::TopBottomPanel::top(constants::ID_PANEL_SEARCH_BAR)
            .frame(
                egui::Frame::NONE
                    .inner_margin(egui::vec2(10.0, 6.0))
                    .fill(ctx.style().visuals.panel_fill),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(tr!("search-bar-book"));
                    let path_resp = egui::TextEdit::singleline(&mut self.book_path)
                        .desired_width(ui.available_width() - 140.0)
                        .hint_text(tr!("search-bar-book-hint"))
                        .show(ui)
                        .response;
                    let open_clicked = ui.button(tr!("search-bar-open")).clicked();

                    let path = self.book_path.trim();
                    if (open_clicked || enter_pressed(ui, &path_resp)) && !path.is_empty() {
                        events.push(SearchBarEvent::OpenBook(PathBuf::from(path)));
                    }
                });

                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.label(tr!("search-bar-keyword"));
                    let keyword_resp = egui::TextEdit::singleline(&mut self.keyword)
                        .desired_width(ui.available_width() * 0.4)
                        .hint_text(tr!("search-bar-keyword-hint"))
                        .show(ui)
                        .response;

                    if self.focus {
                        keyword_resp.request_focus();
                        self.focus = false;
                    }

                    ui.label(tr!("search-bar-algorithm"));
                    egui::ComboBox::from_id_salt(constants::ID_SEARCH_BAR_ALGORITHM)
                        .selected_text(algorithm_label(self.kind))
                        .show_ui(ui, |ui| {
                            for kind in SimilarityKind::iter() {
                                ui.selectable_value(&mut self.kind, kind, algorithm_label(kind));
                            }
                        });

                    ui.add(
                        egui::Slider::new(&mut self.threshold, 0.0..=1.0)
                            .step_by(constants::THRESHOLD_SLIDER_STEP)
                            .text(tr!("search-bar-threshold")),
                    );

                    let search_clicked = ui
                        .add_enabled(!props.searching, egui::Button::new(tr!("search-bar-search")))
                        .clicked();

                    if (search_clicked || enter_pressed(ui, &keyword_resp)) && !props.searching {
                        if let Some(query) = self.query() {
                            events.push(SearchBarEvent::StartSearch(query));
                        }
                    }
                });
            });

        SearchBarOutput { events }
    }
}
