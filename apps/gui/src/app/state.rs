//! Viewer state without any rendering, so the load/search flow can be tested
//! without a window.

use crate::backend::{BackendEvent, Request};
use ebook_core::{PageStore, SearchQuery};
use std::path::PathBuf;
use tracing::debug;

/// What the status bar should tell the user
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    None,
    Loading(PathBuf),
    Loaded(PathBuf),
    LoadFailed(String),
    /// The file has no `# ` headings; the previous book is kept
    NoChapters(PathBuf),
    Searching,
    Found(usize),
    NoMatch,
    BackendUnavailable,
}

#[derive(Debug)]
pub struct ViewerState {
    store: PageStore,
    book: Option<PathBuf>,
    selected: Option<String>,
    loading: bool,
    searching: bool,
    notice: Notice,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            store: PageStore::default(),
            book: None,
            selected: None,
            loading: false,
            searching: false,
            notice: Notice::None,
        }
    }
}

impl ViewerState {
    pub fn book(&self) -> Option<&PathBuf> {
        self.book.as_ref()
    }

    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    pub fn is_busy(&self) -> bool {
        self.loading || self.searching
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn visible_titles(&self) -> Vec<&str> {
        self.store.visible().map(|c| c.title.as_str()).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.store.visible_len()
    }

    pub fn total_len(&self) -> usize {
        self.store.document().len()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, title: String) {
        self.selected = Some(title);
    }

    /// Content of the selected title, looked up exactly in the current view
    pub fn selected_content(&self) -> Option<&str> {
        let title = self.selected.as_deref()?;
        self.store.find_by_title(title).map(|c| c.content.as_str())
    }

    pub fn open(&mut self, path: PathBuf) -> Request {
        self.loading = true;
        self.notice = Notice::Loading(path.clone());
        Request::Load(path)
    }

    /// An empty keyword restores the whole chapter list without searching.
    /// A second search is refused while one is still running.
    pub fn search(&mut self, query: SearchQuery) -> Option<Request> {
        if query.keyword.trim().is_empty() {
            self.store.clear_filter();
            self.selected = None;
            self.notice = Notice::None;
            return None;
        }

        if self.searching {
            debug!("Search already running, ignored '{}'", query.keyword);
            return None;
        }

        self.searching = true;
        self.selected = None;
        self.notice = Notice::Searching;
        Some(Request::Search {
            document: self.store.document().clone(),
            query,
        })
    }

    /// Returns `true` when a new book replaced the current one.
    pub fn apply_event(&mut self, event: BackendEvent) -> bool {
        match event {
            BackendEvent::Loaded { path, document } => {
                self.loading = false;
                if document.is_empty() {
                    self.notice = Notice::NoChapters(path);
                    return false;
                }
                self.store.replace_document(document);
                self.selected = None;
                self.notice = Notice::Loaded(path.clone());
                self.book = Some(path);
                true
            }
            BackendEvent::LoadFailed { error, .. } => {
                self.loading = false;
                self.notice = Notice::LoadFailed(error);
                false
            }
            BackendEvent::SearchFinished(result) => {
                self.searching = false;
                let found = result.len();
                match self.store.set_filtered(result) {
                    Ok(()) if found == 0 => self.notice = Notice::NoMatch,
                    Ok(()) => self.notice = Notice::Found(found),
                    Err(e) => {
                        debug!("{e}");
                        self.notice = Notice::None;
                    }
                }
                false
            }
        }
    }

    /// The request could not reach the backend thread
    pub fn request_failed(&mut self) {
        self.loading = false;
        self.searching = false;
        self.notice = Notice::BackendUnavailable;
    }
}
