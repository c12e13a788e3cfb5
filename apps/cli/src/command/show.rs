use super::{Command, load_store, resolve_book};
use crate::cli::BookArgs;
use crate::config::Config;
use crate::error::{OptionExt, Result};
use std::io::Write;

pub struct ShowCommand {
    config: Config,
    book: BookArgs,
    title: String,
}

impl ShowCommand {
    pub fn new(config: Config, book: BookArgs, title: String) -> Self {
        Self { config, book, title }
    }

    fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let store = load_store(&resolve_book(&self.config, &self.book))?;
        let chapter = store
            .find_by_title(&self.title)
            .ok_or_eyre(format!("未找到标题为 \"{}\" 的章节", self.title))?;

        writeln!(out, "{}", chapter.content)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Command for ShowCommand {
    async fn execute(&self) -> Result<()> {
        self.run(&mut std::io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_exact_title_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        std::fs::write(&path, "# Chapter One\nOnce.\n# Chapter One\nTwice.\n").unwrap();
        let book = BookArgs { file: Some(path) };

        let mut out = Vec::new();
        ShowCommand::new(Config::default(), book.clone(), "Chapter One".into())
            .run(&mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Once.\n");

        let err = ShowCommand::new(Config::default(), book, "chapter one".into())
            .run(&mut Vec::new())
            .unwrap_err();
        assert!(err.to_string().contains("chapter one"));
    }
}
