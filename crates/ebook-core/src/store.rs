// ebook-core/src/store.rs
//! 章节存储
//!
//! 持有完整文档和当前过滤视图，由调用方拥有，不使用全局状态。

use crate::error::{Error, Result};
use crate::models::{Chapter, Document};
use crate::search::{SearchQuery, SearchResult, search};

#[derive(Debug, Clone, Default)]
pub struct PageStore {
    document: Document,
    /// `None` 表示显示全部章节
    filtered: Option<SearchResult>,
}

impl PageStore {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            filtered: None,
        }
    }

    /// 当前文档快照
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// 整体替换文档，过滤视图重置为全部章节
    pub fn replace_document(&mut self, document: Document) {
        tracing::debug!("[存储] 替换文档: {} -> {} 个章节", self.document.len(), document.len());
        self.document = document;
        self.filtered = None;
    }

    /// 设置过滤视图
    ///
    /// 基于旧文档快照计算出的结果会被拒绝，当前视图保持不变。
    pub fn set_filtered(&mut self, result: SearchResult) -> Result<()> {
        if !result.document().same_as(&self.document) {
            tracing::warn!("[存储] 丢弃过期的搜索结果");
            return Err(Error::StaleSearchResult);
        }
        self.filtered = Some(result);
        Ok(())
    }

    /// 恢复显示全部章节
    pub fn clear_filter(&mut self) {
        self.filtered = None;
    }

    pub fn is_filtered(&self) -> bool {
        self.filtered.is_some()
    }

    /// 对当前文档执行搜索并设为过滤视图
    pub fn apply(&mut self, query: &SearchQuery) -> &SearchResult {
        let result = search(&self.document, query);
        self.filtered.insert(result)
    }

    /// 关键词（去除首尾空白后）为空时恢复全部章节，否则同 [`PageStore::apply`]
    pub fn apply_or_reset(&mut self, query: &SearchQuery) {
        let keyword = query.keyword.trim();
        if keyword.is_empty() {
            self.clear_filter();
            return;
        }
        let query = SearchQuery {
            keyword: keyword.to_string(),
            ..query.clone()
        };
        self.apply(&query);
    }

    /// 当前视图中的章节，按文档顺序
    pub fn visible(&self) -> Box<dyn Iterator<Item = &Chapter> + '_> {
        match &self.filtered {
            Some(result) => Box::new(result.chapters()),
            None => Box::new(self.document.iter()),
        }
    }

    pub fn visible_len(&self) -> usize {
        match &self.filtered {
            Some(result) => result.len(),
            None => self.document.len(),
        }
    }

    /// 在当前视图中按标题精确查找第一个章节
    pub fn find_by_title(&self, title: &str) -> Option<&Chapter> {
        self.visible().find(|chapter| chapter.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;
    use crate::search::Threshold;
    use crate::similarity::SimilarityKind;

    const BOOK: &str = "# 第一章 开端\n很久以前。\n# 第二章 风起\n风来了。\n# 尾声\n完。\n";

    fn visible_titles(store: &PageStore) -> Vec<String> {
        store.visible().map(|c| c.title.clone()).collect()
    }

    fn query(keyword: &str) -> SearchQuery {
        SearchQuery::new(keyword, SimilarityKind::Lcs, Threshold::DEFAULT)
    }

    #[test]
    fn test_initial_view_is_whole_document() {
        let store = PageStore::new(parse_document(BOOK));
        assert!(!store.is_filtered());
        assert_eq!(store.visible_len(), 3);
        assert_eq!(visible_titles(&store), vec!["第一章 开端", "第二章 风起", "尾声"]);
    }

    #[test]
    fn test_apply_filters_view() {
        let mut store = PageStore::new(parse_document(BOOK));
        let result = store.apply(&query("第一章"));
        assert_eq!(result.len(), 1);
        assert_eq!(visible_titles(&store), vec!["第一章 开端"]);
    }

    #[test]
    fn test_find_by_title_is_exact_and_uses_filtered_view() {
        let mut store = PageStore::new(parse_document(BOOK));
        assert_eq!(
            store.find_by_title("第二章 风起").map(|c| c.content.as_str()),
            Some("风来了。")
        );
        assert!(store.find_by_title("第二章").is_none());

        store.apply(&query("第一章"));
        assert!(store.find_by_title("第二章 风起").is_none());
        assert!(store.find_by_title("第一章 开端").is_some());
    }

    #[test]
    fn test_find_by_title_returns_first_duplicate() {
        let store = PageStore::new(parse_document("# A\none\n# A\ntwo\n"));
        assert_eq!(store.find_by_title("A").map(|c| c.content.as_str()), Some("one"));
    }

    #[test]
    fn test_replace_document_resets_filter() {
        let mut store = PageStore::new(parse_document(BOOK));
        store.apply(&query("尾声"));
        assert!(store.is_filtered());

        store.replace_document(parse_document("# X\nx\n"));
        assert!(!store.is_filtered());
        assert_eq!(visible_titles(&store), vec!["X"]);
    }

    #[test]
    fn test_stale_result_is_rejected() {
        let mut store = PageStore::new(parse_document(BOOK));
        let snapshot = store.document().clone();
        let stale = search(&snapshot, &query("尾声"));

        store.replace_document(parse_document(BOOK));
        assert!(matches!(store.set_filtered(stale), Err(Error::StaleSearchResult)));
        assert!(!store.is_filtered());

        let fresh = search(store.document(), &query("尾声"));
        store.set_filtered(fresh).unwrap();
        assert_eq!(visible_titles(&store), vec!["尾声"]);
    }

    #[test]
    fn test_apply_or_reset_with_blank_keyword() {
        let mut store = PageStore::new(parse_document(BOOK));
        store.apply(&query("尾声"));

        store.apply_or_reset(&query("   "));
        assert!(!store.is_filtered());
        assert_eq!(store.visible_len(), 3);

        store.apply_or_reset(&query("  尾声 "));
        assert_eq!(visible_titles(&store), vec!["尾声"]);
    }
}
