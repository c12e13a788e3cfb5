pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "ebook";
pub const APP_NAME: &str = "ebook-finder";

pub const CLI_CONFIG_FILE_NAME: &str = "cli.toml";
pub const GUI_CONFIG_FILE_NAME: &str = "gui.toml";

/// Book opened when neither the command line nor the config names one
pub const DEFAULT_BOOK_FILE_NAME: &str = "ebook.txt";
