// ebook-core/src/search.rs
//! 标题模糊搜索

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Chapter, Document};
use crate::similarity::SimilarityKind;

/// 相似度阈值，保证位于 [0, 1]
///
/// 超出范围（包括 NaN）的值直接拒绝，不做截断。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(0.5);

    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidThreshold(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Threshold {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 一次搜索的参数
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub keyword: String,
    pub kind: SimilarityKind,
    pub threshold: Threshold,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>, kind: SimilarityKind, threshold: Threshold) -> Self {
        Self {
            keyword: keyword.into(),
            kind,
            threshold,
        }
    }
}

/// 命中的章节及其相似度
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    /// 章节在文档中的下标
    pub index: usize,
    pub score: f64,
}

/// 搜索结果：文档的有序子序列，顺序与原文一致
#[derive(Debug, Clone)]
pub struct SearchResult {
    document: Document,
    hits: Vec<SearchHit>,
}

impl SearchResult {
    /// 结果所基于的文档快照
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// 按文档顺序遍历命中的章节
    pub fn chapters(&self) -> impl Iterator<Item = &Chapter> {
        self.hits.iter().filter_map(|hit| self.document.get(hit.index))
    }

    /// 章节及其相似度
    pub fn scored(&self) -> impl Iterator<Item = (&Chapter, f64)> {
        self.hits
            .iter()
            .filter_map(|hit| self.document.get(hit.index).map(|c| (c, hit.score)))
    }
}

/// 用给定的相似度函数按标题过滤文档
///
/// 相似度 >= 阈值的章节被保留（含边界），结果不按分数排序。
pub fn search_by_title<F>(
    document: &Document,
    keyword: &str,
    metric: F,
    threshold: Threshold,
) -> SearchResult
where
    F: Fn(&str, &str) -> f64,
{
    let hits: Vec<SearchHit> = document
        .iter()
        .enumerate()
        .filter_map(|(index, chapter)| {
            let score = metric(&chapter.title, keyword);
            (score >= threshold.value()).then_some(SearchHit { index, score })
        })
        .collect();

    tracing::debug!(
        "[搜索] 关键词: '{}', 阈值: {}, 命中 {}/{}",
        keyword,
        threshold,
        hits.len(),
        document.len()
    );

    SearchResult {
        document: document.clone(),
        hits,
    }
}

/// 按查询参数搜索
pub fn search(document: &Document, query: &SearchQuery) -> SearchResult {
    search_by_title(
        document,
        &query.keyword,
        query.kind.function(),
        query.threshold,
    )
}
