// ebook-core/src/parser.rs
//! 章节解析
//!
//! 以行首的 `"# "` 作为一级标题，把纯文本切分为有序的章节列表：
//! - 第一个标题之前的文本被丢弃
//! - 标题之后直到下一个标题（或文末）的文本为该章节正文
//! - `"## "` 等更深层标题不是分割点，保留在上一章节的正文中

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{Chapter, Document};

/// 一级标题标记
pub const HEADING_MARKER: &str = "# ";

static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^# .*").expect("heading pattern is valid")
});

/// 解析文本为文档，永不失败
///
/// 没有任何标题的文本得到空文档。
pub fn parse_document(text: &str) -> Document {
    let headings: Vec<_> = HEADING_RE.find_iter(text).collect();

    let mut chapters = Vec::with_capacity(headings.len());
    for (i, heading) in headings.iter().enumerate() {
        let body_end = headings
            .get(i + 1)
            .map(|next| next.start())
            .unwrap_or(text.len());

        let title = heading.as_str()[HEADING_MARKER.len()..].trim();
        let content = text[heading.end()..body_end].trim();
        chapters.push(Chapter::new(title, content));
    }

    tracing::debug!("[解析] 共 {} 个章节", chapters.len());
    Document::new(chapters)
}

/// 从原始字节解析文档，非 UTF-8 输入整体失败
pub fn decode_document(bytes: &[u8]) -> Result<Document> {
    decode(bytes, None)
}

/// 读取并解析电子书文件
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = decode(&bytes, Some(path))?;
    tracing::info!("[加载] {:?}: {} 个章节", path, document.len());
    Ok(document)
}

/// [`load_document`] 的别名
pub fn load_pages<P: AsRef<Path>>(path: P) -> Result<Document> {
    load_document(path)
}

fn decode(bytes: &[u8], path: Option<&Path>) -> Result<Document> {
    let text = std::str::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.map(Path::to_path_buf),
        source,
    })?;
    Ok(parse_document(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn pairs(doc: &Document) -> Vec<(&str, &str)> {
        doc.iter()
            .map(|c| (c.title.as_str(), c.content.as_str()))
            .collect()
    }

    #[test]
    fn test_two_chapters() {
        let doc = parse_document("# A\nfoo\n# B\nbar\n");
        assert_eq!(pairs(&doc), vec![("A", "foo"), ("B", "bar")]);
    }

    #[rstest]
    #[case("")]
    #[case("just some text, no heading")]
    #[case("#no space\n##  two\n")]
    #[case(" # indented heading")]
    fn test_no_heading_gives_empty_document(#[case] input: &str) {
        assert!(parse_document(input).is_empty());
    }

    #[test]
    fn test_discards_text_before_first_heading() {
        let doc = parse_document("intro\n# A\nbody");
        assert_eq!(pairs(&doc), vec![("A", "body")]);
    }

    #[test]
    fn test_heading_without_content() {
        let doc = parse_document("# Only");
        assert_eq!(pairs(&doc), vec![("Only", "")]);

        let doc = parse_document("# A\n# B\n\n   \n");
        assert_eq!(pairs(&doc), vec![("A", ""), ("B", "")]);
    }

    #[test]
    fn test_deeper_heading_stays_in_content() {
        let doc = parse_document("# A\nintro\n## A.1\ndetail\n# B\n");
        assert_eq!(
            pairs(&doc),
            vec![("A", "intro\n## A.1\ndetail"), ("B", "")]
        );
    }

    #[test]
    fn test_title_and_content_are_trimmed() {
        let doc = parse_document("#   Spaced Title  \r\n\r\n  body line  \r\n");
        assert_eq!(pairs(&doc), vec![("Spaced Title", "body line")]);
    }

    #[test]
    fn test_duplicate_titles_survive() {
        let doc = parse_document("# 第一章\n甲\n# 第一章\n乙\n");
        assert_eq!(pairs(&doc), vec![("第一章", "甲"), ("第一章", "乙")]);
    }

    #[test]
    fn test_hash_in_middle_of_line_is_not_heading() {
        let doc = parse_document("# A\nsee # B here\n");
        assert_eq!(pairs(&doc), vec![("A", "see # B here")]);
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let err = decode_document(b"# A\n\xff\xfe").unwrap_err();
        assert!(matches!(err, Error::Decode { path: None, .. }));
    }

    #[test]
    fn test_load_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("# 开端\n很久以前。\n".as_bytes()).unwrap();

        let doc = load_document(file.path()).unwrap();
        assert_eq!(pairs(&doc), vec![("开端", "很久以前。")]);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        match load_document(&missing).unwrap_err() {
            Error::Io { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_non_utf8_file_carries_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"# \xc4\xe3\xba\xc3\n").unwrap();

        let err = load_document(file.path()).unwrap_err();
        assert!(matches!(err, Error::Decode { path: Some(_), .. }));
    }
}
