// ebook-core/src/error.rs
//! 错误类型

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 无法读取电子书文件（不存在、无权限等）
    #[error("无法读取文件 {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 文件内容不是合法的 UTF-8
    #[error("文件 {} 不是有效的 UTF-8 文本: {source}", display_path(.path))]
    Decode {
        path: Option<PathBuf>,
        #[source]
        source: std::str::Utf8Error,
    },

    /// 相似度阈值必须位于 [0, 1]
    #[error("相似度阈值 {0} 超出范围 [0, 1]")]
    InvalidThreshold(f64),

    /// 搜索结果来自另一份文档，不能作为当前过滤视图
    #[error("搜索结果不属于当前文档")]
    StaleSearchResult,

    /// 配置文件格式错误
    #[error("配置解析失败: {0}")]
    Config(#[from] toml::de::Error),
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!("{p:?}"),
        None => "<内存>".to_string(),
    }
}
