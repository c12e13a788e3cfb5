use crate::error::Result;
use ebook_core::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use config::create_strategy;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default = "default_config", deny_unknown_fields)]
pub struct Config {
    /// 默认打开的电子书
    pub book: PathBuf,
    pub search: SearchConfig,
}


fn default_config() -> Config {
    Config {
        book: PathBuf::from(config::constants::DEFAULT_BOOK_FILE_NAME),
        search: SearchConfig::default(),
    }
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}


impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    pub fn load() -> Result<Config> {
        let strategy = create_strategy()?;
        let config_path = config::config_file_path(&strategy, config::constants::CLI_CONFIG_FILE_NAME);

        match std::fs::read_to_string(&config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // 配置文件不存在，创建示例配置文件
                Self::create_example_config(&config_path)?;
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 从指定文件加载，文件必须存在
    pub fn load_from(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        use std::io::Write;
        
        // 确保配置目录存在
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let example_config = r#"# ebook 命令行配置文件
#
# 此文件在首次运行时自动创建

# 默认打开的电子书（命令行 --file 优先）
# book = "/Users/yourname/Books/ebook.txt"

[search]
# 相似度算法: "lcs" 或 "levenshtein"
# algorithm = "lcs"

# 相似度阈值，范围 [0, 1]
# threshold = 0.5
"#;

        let mut file = std::fs::File::create(config_path)?;
        file.write_all(example_config.as_bytes())?;
        
        eprintln!("\n📝 已创建配置文件: {:?}", config_path);
        eprintln!("💡 可在其中设置默认电子书和搜索算法\n");
        
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ebook_core::{SimilarityKind, Threshold};

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = Config::load_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.book, PathBuf::from("ebook.txt"));
    }

    #[test]
    fn test_load_config_values() {
        const USER_CONFIG: &str = r#"
        book = "novel.txt"

        [search]
        algorithm = "levenshtein"
        "#;

        let cfg = Config::load_str(USER_CONFIG).expect("Failed to load config");

        assert_eq!(cfg.book, PathBuf::from("novel.txt"));
        assert_eq!(cfg.search.algorithm, SimilarityKind::Levenshtein);
        assert_eq!(cfg.search.threshold, Threshold::DEFAULT);
    }

    #[test]
    fn test_load_config_unknown_field() {
        const USER_CONFIG: &str = r#"
        watch-paths = []
        "#;

        let err = Config::load_str(USER_CONFIG).unwrap_err();
        assert!(err.to_string().contains("unknown field `watch-paths`"));
    }

    #[test]
    fn test_example_config_is_loadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cli.toml");

        Config::create_example_config(&path).unwrap();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
