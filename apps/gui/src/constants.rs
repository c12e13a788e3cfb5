pub const APP_ID: &str = "ebook-finder";

pub const ID_PANEL_SEARCH_BAR: &str = "search_bar_panel";
pub const ID_PANEL_STATUS_BAR: &str = "status_bar_panel";
pub const ID_PANEL_CHAPTER_LIST: &str = "chapter_list_panel";
pub const ID_SEARCH_BAR_ALGORITHM: &str = "search_bar_algorithm";

pub const TEXT_STYLE_CONTENT: &str = "Content";

pub const THRESHOLD_SLIDER_STEP: f64 = 0.05;
