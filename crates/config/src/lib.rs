pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::path::PathBuf;
use std::env;


pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// Resolve a directory from `env_key`, then from the platform strategy, and
/// finally fall back to a per-app directory under the system temp dir.
pub fn resolve_dir<S, F>(env_key: &str, strategy: &S, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> Option<PathBuf>,
{
    env::var_os(env_key)
        .map(PathBuf::from)
        .or_else(|| strategy_fn(strategy))
        .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME))
}

/// Path of a config file inside the app config dir (`CONFIG_DIRECTORY` wins).
pub fn config_file_path<S: AppStrategy>(strategy: &S, file_name: &str) -> PathBuf {
    resolve_dir("CONFIG_DIRECTORY", strategy, |s| Some(s.config_dir())).join(file_name)
}
