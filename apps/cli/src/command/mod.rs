pub mod interactive;
pub mod list;
pub mod search;
pub mod show;

use crate::cli::BookArgs;
use crate::config::Config;
use crate::error::{Result, WrapErr};
use ebook_core::{PageStore, Threshold};
use std::path::{Path, PathBuf};

pub use interactive::InteractiveCommand;
pub use list::ListCommand;
pub use search::SearchCommand;
pub use show::ShowCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// 命令行 `--file` 优先，其次使用配置中的 `book`
fn resolve_book(cfg: &Config, book: &BookArgs) -> PathBuf {
    book.file.clone().unwrap_or_else(|| cfg.book.clone())
}

fn load_store(path: &Path) -> Result<PageStore> {
    let document = ebook_core::load_pages(path)
        .wrap_err_with(|| format!("加载电子书失败: {}", path.display()))?;
    if document.is_empty() {
        tracing::warn!("{:?} 中没有检测到 \"# \" 开头的章节标题", path);
    }
    Ok(PageStore::new(document))
}

/// 命令行阈值优先，其次使用配置
fn resolve_threshold(cfg: &Config, threshold: Option<f64>) -> Result<Threshold> {
    match threshold {
        Some(value) => Threshold::new(value).wrap_err("无效的 --threshold"),
        None => Ok(cfg.search.threshold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_flag_overrides_config() {
        let cfg = Config::default();
        let book = BookArgs { file: Some(PathBuf::from("other.txt")) };
        assert_eq!(resolve_book(&cfg, &book), PathBuf::from("other.txt"));

        let book = BookArgs { file: None };
        assert_eq!(resolve_book(&cfg, &book), PathBuf::from("ebook.txt"));
    }

    #[test]
    fn test_threshold_flag_is_validated() {
        let cfg = Config::default();
        assert_eq!(resolve_threshold(&cfg, None).unwrap(), Threshold::DEFAULT);
        assert_eq!(resolve_threshold(&cfg, Some(0.9)).unwrap().value(), 0.9);
        assert!(resolve_threshold(&cfg, Some(2.0)).is_err());
    }

    #[test]
    fn test_load_store_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_store(&dir.path().join("none.txt")).unwrap_err();
        assert!(err.to_string().contains("加载电子书失败"));
    }
}
