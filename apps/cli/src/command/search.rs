use super::{Command, load_store, resolve_book, resolve_threshold};
use crate::cli::{BookArgs, SearchArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, ScoredChapter};
use ebook_core::SearchQuery;
use std::io::Write;
use tracing::info;

pub struct SearchCommand {
    config: Config,
    book: BookArgs,
    keyword: String,
    search: SearchArgs,
    json: bool,
}

impl SearchCommand {
    pub fn new(
        config: Config,
        book: BookArgs,
        keyword: String,
        search: SearchArgs,
        json: bool,
    ) -> Self {
        Self {
            config,
            book,
            keyword,
            search,
            json,
        }
    }

    fn query(&self) -> Result<SearchQuery> {
        let kind = self.search.algorithm.unwrap_or(self.config.search.algorithm);
        let threshold = resolve_threshold(&self.config, self.search.threshold)?;
        Ok(SearchQuery::new(self.keyword.trim(), kind, threshold))
    }

    fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let query = self.query()?;
        let mut store = load_store(&resolve_book(&self.config, &self.book))?;

        info!(
            "搜索 '{}' (算法: {}, 阈值: {})",
            query.keyword, query.kind, query.threshold
        );
        let result = store.apply(&query);

        if self.json {
            let scored: Vec<ScoredChapter> = result
                .scored()
                .map(|(chapter, score)| ScoredChapter {
                    title: &chapter.title,
                    content: &chapter.content,
                    score,
                })
                .collect();
            output::write_json(out, &scored)?;
            return Ok(());
        }

        output::write_chapters(out, store.visible())?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Command for SearchCommand {
    async fn execute(&self) -> Result<()> {
        self.run(&mut std::io::stdout().lock())
    }
}
