use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct AppConfig {
    pub width: f32,
    pub height: f32,
    /// Book opened at startup
    pub book: PathBuf,
}


impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
            book: PathBuf::from(config::constants::DEFAULT_BOOK_FILE_NAME),
        }
    }
}
