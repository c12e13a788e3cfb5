mod main;
mod config;
mod state;

pub use main::App;
pub use config::AppConfig;
pub use state::{Notice, ViewerState};
