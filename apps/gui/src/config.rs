use crate::app::AppConfig;
use crate::error::Result;
use crate::ui::UiConfig;
use ebook_core::SearchConfig;
use serde::Deserialize;
use config::{constants as config_constants, create_strategy};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    pub app: AppConfig,
    pub ui: UiConfig,
    pub search: SearchConfig,
}

impl Config {
    pub fn load() -> Result<Config> {
        let strategy = create_strategy().map_err(|_| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "Home dir not found")
        })?;

        let config_path =
            config::config_file_path(&strategy, config_constants::GUI_CONFIG_FILE_NAME);

        match std::fs::read_to_string(&config_path) {
            Ok(content) => Self::load_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn load_str(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ebook_core::SimilarityKind;
    use std::path::PathBuf;

    #[test]
    fn test_app_config_defaults() {
        let default_app = AppConfig::default();
        assert_eq!(default_app.width, 900.0);
        assert_eq!(default_app.height, 600.0);
        assert_eq!(default_app.book, PathBuf::from("ebook.txt"));
    }

    #[test]
    fn test_load_config_values() {
        const USER_CONFIG: &str = r#"
        [app]
        width = 200.0

        [search]
        algorithm = "levenshtein"
        threshold = 0.3
        "#;

        let cfg = Config::load_str(USER_CONFIG).expect("Failed to load config");

        assert_eq!(cfg.app.width, 200.0);
        assert_eq!(cfg.app.height, 600.0);
        assert_eq!(cfg.ui, UiConfig::default());
        assert_eq!(cfg.search.algorithm, SimilarityKind::Levenshtein);
        assert_eq!(cfg.search.threshold.value(), 0.3);
    }

    #[test]
    fn test_load_config_unknown_field() {
        const USER_CONFIG: &str = r#"
        [app]
        Am-i-kawaii = "🥰"
        "#;

        let cfg = Config::load_str(USER_CONFIG);
        let err = cfg.unwrap_err();
        assert!(err.to_string().contains("unknown field `Am-i-kawaii`"));
    }

    #[test]
    fn test_load_config_bad_threshold() {
        let err = Config::load_str("[search]\nthreshold = -1.0\n").unwrap_err();
        assert!(err.to_string().contains("-1"));
    }
}
