// ebook-core/src/similarity.rs
//! 字符串相似度
//!
//! 两种可互换的度量，结果都在 [0, 1]：
//! - LCS：最长公共子序列长度 / 较长字符串长度
//! - Levenshtein：1 - 编辑距离 / 较长字符串长度
//!
//! 比较前统一转为小写，长度按 Unicode 字符计。两个空串的相似度定义为 0.0。

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// 相似度函数签名
pub type SimilarityFn = fn(&str, &str) -> f64;

/// 相似度算法
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SimilarityKind {
    /// 最长公共子序列
    #[default]
    Lcs,
    /// 编辑距离
    Levenshtein,
}

impl SimilarityKind {
    pub fn function(self) -> SimilarityFn {
        match self {
            SimilarityKind::Lcs => similarity_lcs,
            SimilarityKind::Levenshtein => similarity_levenshtein,
        }
    }

    pub fn similarity(self, a: &str, b: &str) -> f64 {
        (self.function())(a, b)
    }
}

/// 按指定算法计算相似度
pub fn similarity(a: &str, b: &str, kind: SimilarityKind) -> f64 {
    kind.similarity(a, b)
}

/// 基于最长公共子序列的相似度
pub fn similarity_lcs(a: &str, b: &str) -> f64 {
    let (a, b) = (fold(a), fold(b));
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 0.0;
    }
    lcs_chars(&a, &b) as f64 / max_len as f64
}

/// 基于编辑距离的相似度
pub fn similarity_levenshtein(a: &str, b: &str) -> f64 {
    let (a, b) = (fold(a), fold(b));
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 0.0;
    }
    1.0 - levenshtein_chars(&a, &b) as f64 / max_len as f64
}

/// 最长公共子序列长度（区分大小写）
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    lcs_chars(&a, &b)
}

/// 莱文斯坦编辑距离（区分大小写）
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

fn fold(s: &str) -> Vec<char> {
    s.to_lowercase().chars().collect()
}

// dp 表大小为 (m+1) x (n+1)，按行展开存储
fn lcs_chars(a: &[char], b: &[char]) -> usize {
    let (m, n) = (a.len(), b.len());
    let width = n + 1;
    let mut dp = vec![0usize; (m + 1) * width];

    for i in 1..=m {
        for j in 1..=n {
            dp[i * width + j] = if a[i - 1] == b[j - 1] {
                dp[(i - 1) * width + (j - 1)] + 1
            } else {
                dp[(i - 1) * width + j].max(dp[i * width + (j - 1)])
            };
        }
    }

    dp[m * width + n]
}

fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    let (m, n) = (a.len(), b.len());
    let width = n + 1;
    let mut dp = vec![0usize; (m + 1) * width];

    for i in 0..=m {
        dp[i * width] = i;
    }
    for j in 0..=n {
        dp[j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            let deletion = dp[(i - 1) * width + j] + 1;
            let insertion = dp[i * width + (j - 1)] + 1;
            let substitution = dp[(i - 1) * width + (j - 1)] + cost;
            dp[i * width + j] = deletion.min(insertion).min(substitution);
        }
    }

    dp[m * width + n]
}
