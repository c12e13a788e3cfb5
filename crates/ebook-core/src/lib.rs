// ebook-core/src/lib.rs
//! 电子书章节搜索核心库
//!
//! 提供：
//! - 按一级标题（`"# "`）切分章节
//! - 两种标题相似度算法（LCS / Levenshtein）
//! - 基于阈值的标题模糊搜索
//! - 持有文档与过滤视图的章节存储
//!
//! 本库不依赖任何前端，所有函数均为同步调用。

pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod search;
pub mod similarity;
pub mod store;

// 重导出核心类型
pub use config::SearchConfig;
pub use error::{Error, Result};
pub use models::{Chapter, Document};
pub use parser::{HEADING_MARKER, decode_document, load_document, load_pages, parse_document};
pub use search::{SearchHit, SearchQuery, SearchResult, Threshold, search, search_by_title};
pub use similarity::{
    SimilarityFn,
    SimilarityKind,
    lcs_length,
    levenshtein_distance,
    similarity,
    similarity_lcs,
    similarity_levenshtein,
};
pub use store::PageStore;
