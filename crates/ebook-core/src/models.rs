// ebook-core/src/models.rs
//! 数据模型定义

use std::sync::Arc;

/// 章节：一级标题及其正文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    pub content: String,
}

impl Chapter {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// 解析后的电子书，章节按出现顺序排列
///
/// 文档一经解析便不可变。克隆只增加引用计数，后台搜索可以持有一份快照，
/// 而前端同时替换自己的当前文档。
#[derive(Debug, Clone)]
pub struct Document {
    chapters: Arc<[Chapter]>,
}

impl Document {
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self {
            chapters: chapters.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chapter> {
        self.chapters.iter()
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.chapters.iter().map(|c| c.title.as_str())
    }

    /// 是否为同一份解析结果（快照身份，而非内容相等）
    pub fn same_as(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.chapters, &other.chapters)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.chapters == other.chapters
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Chapter;
    type IntoIter = std::slice::Iter<'a, Chapter>;

    fn into_iter(self) -> Self::IntoIter {
        self.chapters.iter()
    }
}

impl From<Vec<Chapter>> for Document {
    fn from(chapters: Vec<Chapter>) -> Self {
        Self::new(chapters)
    }
}
