//! 终端输出格式

use ebook_core::Chapter;
use serde::Serialize;
use std::io::{self, Write};

pub const SEPARATOR_WIDTH: usize = 40;
pub const NO_MATCH_MESSAGE: &str = "未找到相关内容。";

/// 逐章输出标题、正文和分割线，返回输出的章节数
pub fn write_chapters<'a, W, I>(out: &mut W, chapters: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Chapter>,
{
    let mut count = 0;
    for chapter in chapters {
        writeln!(out, "{}", chapter.title)?;
        writeln!(out, "{}", chapter.content)?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        count += 1;
    }

    if count == 0 {
        writeln!(out, "{}", NO_MATCH_MESSAGE)?;
    }
    Ok(count)
}

#[derive(Debug, Serialize)]
pub struct ScoredChapter<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub score: f64,
}

pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
