// ebook-core/src/config.rs
//! 配置模块

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::search::{SearchQuery, Threshold};
use crate::similarity::SimilarityKind;

/// 搜索配置
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SearchConfig {
    /// 默认相似度算法
    pub algorithm: SimilarityKind,
    /// 相似度阈值，[0, 1]
    pub threshold: Threshold,
}

impl SearchConfig {
    /// 从 TOML 文本解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 从 TOML 文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// 尝试加载配置，失败则使用默认值
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load_from_file(path).unwrap_or_else(|e| {
            tracing::warn!("[配置] {}，使用默认配置", e);
            Self::default()
        })
    }

    /// 用当前配置构造一次搜索
    pub fn query(&self, keyword: impl Into<String>) -> SearchQuery {
        SearchQuery::new(keyword, self.algorithm, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.algorithm, SimilarityKind::Lcs);
        assert_eq!(cfg.threshold.value(), 0.5);
    }

    #[test]
    fn test_partial_config() {
        let cfg = SearchConfig::from_toml_str(r#"algorithm = "levenshtein""#).unwrap();
        assert_eq!(cfg.algorithm, SimilarityKind::Levenshtein);
        assert_eq!(cfg.threshold, Threshold::DEFAULT);
    }

    #[test]
    fn test_threshold_out_of_range_is_rejected() {
        let err = SearchConfig::from_toml_str("threshold = 1.5").unwrap_err();
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = SearchConfig::from_toml_str("limit = 3").unwrap_err();
        assert!(err.to_string().contains("unknown field `limit`"));
    }

    #[test]
    fn test_load_or_default_with_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = SearchConfig::load_or_default(dir.path().join("none.toml"));
        assert_eq!(cfg, SearchConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.toml");
        std::fs::write(&path, "algorithm = \"lcs\"\nthreshold = 0.8\n").unwrap();

        let cfg = SearchConfig::load_from_file(&path).unwrap();
        assert_eq!(cfg.threshold.value(), 0.8);
        assert_eq!(cfg.query("x").threshold.value(), 0.8);
    }
}
