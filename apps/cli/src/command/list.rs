use super::{Command, load_store, resolve_book};
use crate::cli::BookArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output;
use std::io::Write;

pub struct ListCommand {
    config: Config,
    book: BookArgs,
    json: bool,
}

impl ListCommand {
    pub fn new(config: Config, book: BookArgs, json: bool) -> Self {
        Self { config, book, json }
    }

    fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let store = load_store(&resolve_book(&self.config, &self.book))?;

        if self.json {
            let titles: Vec<&str> = store.document().titles().collect();
            output::write_json(out, &titles)?;
            return Ok(());
        }

        for (i, title) in store.document().titles().enumerate() {
            writeln!(out, "{:>4}. {}", i + 1, title)?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Command for ListCommand {
    async fn execute(&self) -> Result<()> {
        self.run(&mut std::io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn command(path: &Path, json: bool) -> ListCommand {
        ListCommand::new(
            Config::default(),
            BookArgs { file: Some(path.to_path_buf()) },
            json,
        )
    }

    #[test]
    fn test_list_titles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        std::fs::write(&path, "# 开端\na\n# 结局\nb\n").unwrap();

        let mut out = Vec::new();
        command(&path, false).run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "   1. 开端\n   2. 结局\n");

        let mut out = Vec::new();
        command(&path, true).run(&mut out).unwrap();
        let titles: Vec<String> = serde_json::from_slice(&out).unwrap();
        assert_eq!(titles, vec!["开端", "结局"]);
    }
}
