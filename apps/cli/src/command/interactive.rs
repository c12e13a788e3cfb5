//! 交互式搜索
//!
//! 先选择相似度算法，然后循环读取关键词并输出匹配章节，直接回车退出。

use super::{Command, load_store, resolve_book, resolve_threshold};
use crate::cli::BookArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output;
use ebook_core::{PageStore, SearchQuery, SimilarityKind, Threshold};
use std::io::{BufRead, Write};

pub struct InteractiveCommand {
    config: Config,
    book: BookArgs,
    threshold: Option<f64>,
}

impl InteractiveCommand {
    pub fn new(config: Config, book: BookArgs, threshold: Option<f64>) -> Self {
        Self {
            config,
            book,
            threshold,
        }
    }
}

#[async_trait::async_trait]
impl Command for InteractiveCommand {
    async fn execute(&self) -> Result<()> {
        let threshold = resolve_threshold(&self.config, self.threshold)?;
        let store = load_store(&resolve_book(&self.config, &self.book))?;

        let mut session = Session::new(store, threshold);
        let stdin = std::io::stdin();
        session.run(stdin.lock(), std::io::stdout().lock())
    }
}

pub struct Session {
    store: PageStore,
    threshold: Threshold,
}

impl Session {
    pub fn new(store: PageStore, threshold: Threshold) -> Self {
        Self { store, threshold }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        let Some(kind) = Self::choose_algorithm(&mut input, &mut out)? else {
            return Ok(());
        };

        writeln!(out, "输入关键词进行搜索，直接回车退出程序。")?;
        loop {
            writeln!(out)?;
            let keyword = match prompt(&mut input, &mut out, "请输入搜索关键词：")? {
                Some(line) if !line.trim().is_empty() => line,
                _ => {
                    writeln!(out, "退出程序。")?;
                    break;
                }
            };

            let query = SearchQuery::new(keyword.trim(), kind, self.threshold);
            self.store.apply(&query);
            output::write_chapters(&mut out, self.store.visible())?;
        }
        Ok(())
    }

    /// 输入流结束时返回 `None`
    fn choose_algorithm<R: BufRead, W: Write>(
        input: &mut R,
        out: &mut W,
    ) -> Result<Option<SimilarityKind>> {
        writeln!(out, "请选择搜索算法（输入数字）：")?;
        writeln!(out, "1. 最长公共子序列相似度")?;
        writeln!(out, "2. 编辑距离相似度")?;

        loop {
            let Some(choice) = prompt(input, out, "请输入选择（1 或 2）：")? else {
                return Ok(None);
            };
            match choice.trim() {
                "1" => return Ok(Some(SimilarityKind::Lcs)),
                "2" => return Ok(Some(SimilarityKind::Levenshtein)),
                _ => continue,
            }
        }
    }
}

/// 输出提示并读取一行（去掉行尾换行符），输入流结束时返回 `None`
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(Some(line))
}
