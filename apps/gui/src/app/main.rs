use super::{Notice, ViewerState};
use crate::backend::{self, BackendEvent, Request};
use crate::components::{
    self, ChapterListEvent, SearchBarEvent, StatusKind, prelude::*,
};
use crate::config::Config;
use crate::constants;
use crate::ui;
use egui_i18n::tr;
use std::path::PathBuf;
use std::sync::mpsc;
use tracing::{error, info};

pub struct App {
    state: ViewerState,

    search_bar: components::SearchBar,
    chapter_list: components::ChapterList,
    status_bar: components::StatusBar,

    tx_request: mpsc::Sender<Request>,
    rx_response: mpsc::Receiver<BackendEvent>,

    initialized: bool,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let (tx_request, rx_request) = mpsc::channel();
        let (tx_response, rx_response) = mpsc::channel();

        if let Err(e) = backend::spawn_backend(rx_request, tx_response, cc.egui_ctx.clone()) {
            error!("Failed to spawn backend thread: {e}");
        }

        ui::setup_ui(&cc.egui_ctx, &config.ui);
        Self::setup_i18n(&config.ui.language);

        #[cfg(debug_assertions)]
        Self::setup_debug_options(&cc.egui_ctx);

        let search_bar = components::SearchBar::new(
            config.app.book.display().to_string(),
            config.search.algorithm,
            config.search.threshold,
        );

        let mut app = Self {
            state: ViewerState::default(),
            search_bar,
            chapter_list: Default::default(),
            status_bar: Default::default(),
            tx_request,
            rx_response,
            initialized: false,
        };

        app.open_book(config.app.book);
        app
    }

    fn setup_i18n(language: &str) {
        let en = String::from_utf8_lossy(include_bytes!("../../assets/trans/en.ftl"));
        let zh = String::from_utf8_lossy(include_bytes!("../../assets/trans/zh-hans.ftl"));

        if let Err(e) = egui_i18n::load_translations_from_text("en", en) {
            error!("Failed to load English translations: {e:?}");
        }
        if let Err(e) = egui_i18n::load_translations_from_text("zh", zh) {
            error!("Failed to load Chinese translations: {e:?}");
        }

        egui_i18n::set_language(language);
        egui_i18n::set_fallback("en");
    }

    #[cfg(debug_assertions)]
    fn setup_debug_options(ctx: &egui::Context) {
        ctx.style_mut(|style| style.debug.debug_on_hover_with_all_modifiers = true);
    }

    fn send(&mut self, request: Option<Request>) {
        let Some(request) = request else {
            return;
        };
        if self.tx_request.send(request).is_err() {
            error!("Backend thread is not running");
            self.state.request_failed();
        }
    }

    fn open_book(&mut self, path: PathBuf) {
        let request = self.state.open(path);
        self.send(Some(request));
    }

    /// Open the first dropped file that has a path
    pub fn handle_file_drop(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .find_map(|file| file.path.clone())
        });

        if let Some(path) = dropped {
            self.search_bar.set_book_path(path.display().to_string());
            self.open_book(path);
        }
    }

    pub fn handle_backend_event(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.rx_response.try_recv() {
            if self.state.apply_event(event) {
                self.search_bar.clear_keyword();
                self.update_window_title(ctx);
            }
        }
    }

    pub fn update_window_title(&self, ctx: &egui::Context) {
        let title = match self.state.book() {
            Some(path) => format!("{} - {}", tr!("window-title"), path.display()),
            None => tr!("window-title"),
        };
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
    }

    pub fn render_search_bar(&mut self, ctx: &egui::Context) {
        let props = components::SearchBarProps {
            searching: self.state.is_searching(),
        };
        let output = self.search_bar.render(ctx, props);

        for event in output.events {
            match event {
                SearchBarEvent::OpenBook(path) => {
                    info!("Opening {:?}", path);
                    self.open_book(path);
                }
                SearchBarEvent::StartSearch(query) => {
                    let request = self.state.search(query);
                    self.send(request);
                }
            }
        }
    }

    pub fn render_status_bar(&mut self, ctx: &egui::Context) {
        let notice = self.state.notice();
        let message = notice_text(notice);
        let kind = if self.state.is_busy() {
            StatusKind::Working
        } else {
            notice_kind(notice)
        };

        let props = components::StatusBarProps {
            kind,
            message: &message,
            visible: self.state.visible_len(),
            total: self.state.total_len(),
        };
        self.status_bar.render(ctx, props);
    }

    pub fn render_chapter_list(&mut self, ctx: &egui::Context) {
        let props = components::ChapterListProps {
            titles: self.state.visible_titles(),
            selected: self.state.selected(),
        };
        let output = self.chapter_list.render(ctx, props);

        for event in output.events {
            match event {
                ChapterListEvent::Select(title) => self.state.select(title),
            }
        }
    }

    pub fn render_content(&self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .inner_margin(egui::vec2(8.0, 6.0))
                    .fill(ctx.style().visuals.extreme_bg_color),
            )
            .show(ctx, |ui| {
                let Some(mut content) = self.state.selected_content() else {
                    ui.centered_and_justified(|ui| {
                        ui.weak(tr!("content-placeholder"));
                    });
                    return;
                };

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::multiline(&mut content)
                                .desired_width(f32::INFINITY)
                                .frame(false)
                                .font(egui::TextStyle::Name(constants::TEXT_STYLE_CONTENT.into())),
                        );
                    });
            });
    }
}

fn notice_kind(notice: &Notice) -> StatusKind {
    match notice {
        Notice::None | Notice::Loaded(_) | Notice::Found(_) => StatusKind::Idle,
        Notice::Loading(_) | Notice::Searching => StatusKind::Working,
        Notice::NoChapters(_) | Notice::NoMatch => StatusKind::Warning,
        Notice::LoadFailed(_) | Notice::BackendUnavailable => StatusKind::Error,
    }
}

fn notice_text(notice: &Notice) -> String {
    match notice {
        Notice::None => String::new(),
        Notice::Loading(path) => format!("{} {}", tr!("notice-loading"), path.display()),
        Notice::Loaded(path) => format!("{} {}", tr!("notice-loaded"), path.display()),
        Notice::LoadFailed(error) => format!("{} {}", tr!("notice-load-failed"), error),
        Notice::NoChapters(path) => format!("{} {}", tr!("notice-no-chapters"), path.display()),
        Notice::Searching => tr!("notice-searching"),
        Notice::Found(count) => format!("{} {}", tr!("notice-found"), count),
        Notice::NoMatch => tr!("notice-no-match"),
        Notice::BackendUnavailable => tr!("notice-backend-unavailable"),
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.initialized {
            self.search_bar.request_focus();
            self.update_window_title(ctx);
            self.initialized = true;
        }

        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::F11)) {
            let fullscreen = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
        }

        self.handle_backend_event(ctx);

        self.handle_file_drop(ctx);

        self.render_search_bar(ctx);

        self.render_status_bar(ctx);

        self.render_chapter_list(ctx);

        self.render_content(ctx);
    }
}
