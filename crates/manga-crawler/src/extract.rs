//! Field extraction over the crawled markdown.
//!
//! Five independent pattern lookups populate the output record. Each lookup
//! takes the first match of a fixed pattern (chapters take every match, in
//! document order) and yields an empty default when nothing matches. No
//! lookup depends on another's result.

use once_cell::sync::Lazy;
use regex::Regex;
use shared::{Chapter, MangaRecord};

static TITLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"标题[：:]\s*([^\n]+)").unwrap());
static AUTHOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"作者[：:]\s*([^\n]+)").unwrap());
static DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"描述[：:]\s*([^\n]+)").unwrap());
static CHAPTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"第(\d+)[章话]：?([^\n]+)").unwrap());
static IMAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[[^\]]*\]\(([^)]+)\)").unwrap());
static TAGS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(标签|类型)[：:]\s*([^\n]+)").unwrap());

/// Extract a manga record from markdown text
pub fn extract_record(markdown: &str) -> MangaRecord {
    MangaRecord {
        title: extract_field(markdown, &TITLE_RE),
        author: extract_field(markdown, &AUTHOR_RE),
        description: extract_field(markdown, &DESCRIPTION_RE),
        chapters: extract_chapters(markdown),
        cover_url: extract_cover_url(markdown),
        tags: extract_tags(markdown),
    }
}

/// First match of a labeled field, trimmed; empty when absent
fn extract_field(markdown: &str, pattern: &Regex) -> String {
    pattern
        .captures(markdown)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default()
}

/// All chapter headings in document order
///
/// Lines look like `第X章：章节名` or `第X话：章节名`; a match whose number
/// does not fit the chapter type is skipped rather than aborting.
fn extract_chapters(markdown: &str) -> Vec<Chapter> {
    CHAPTER_RE
        .captures_iter(markdown)
        .filter_map(|c| {
            let number = c[1].parse::<u32>().ok()?;
            Some(Chapter {
                number,
                title: c[2].trim().to_string(),
            })
        })
        .collect()
}

/// First markdown image link, taken as the cover
fn extract_cover_url(markdown: &str) -> String {
    IMAGE_RE
        .captures(markdown)
        .map(|c| c[1].to_string())
        .unwrap_or_default()
}

/// Tag list from a `标签：` or `类型：` line
///
/// Comma-separated values win over slash-separated ones; a value with
/// neither separator is a single tag.
fn extract_tags(markdown: &str) -> Vec<String> {
    let Some(captures) = TAGS_RE.captures(markdown) else {
        return Vec::new();
    };

    let value = captures[2].trim();
    if value.contains(',') {
        value.split(',').map(|tag| tag.trim().to_string()).collect()
    } else if value.contains('/') {
        value.split('/').map(|tag| tag.trim().to_string()).collect()
    } else {
        vec![value.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# 漫画详情

![海贼王封面](https://img.example.com/op/cover.jpg)

标题：海贼王
作者: 尾田荣一郎
描述：少年出海寻找传说中的大秘宝
标签：冒险, 热血, 海洋

## 章节列表

第1章：冒险的黎明
第2章：戴草帽的少年
第3话 迎击
";

    #[test]
    fn test_extract_title() {
        let record = extract_record("标题：Foo");
        assert_eq!(record.title, "Foo");
    }

    #[test]
    fn test_extract_field_accepts_ascii_colon() {
        let record = extract_record("作者: 尾田荣一郎");
        assert_eq!(record.author, "尾田荣一郎");
    }

    #[test]
    fn test_extract_field_trims_value() {
        let record = extract_record("描述：  留白的简介  ");
        assert_eq!(record.description, "留白的简介");
    }

    #[test]
    fn test_extract_chapter() {
        let record = extract_record("第3章：Chapter Three");
        assert_eq!(
            record.chapters,
            vec![Chapter {
                number: 3,
                title: "Chapter Three".to_string()
            }]
        );
    }

    #[test]
    fn test_chapters_keep_document_order() {
        let record = extract_record("第2章：后篇\n第1话：前篇\n");
        let numbers: Vec<u32> = record.chapters.iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![2, 1]);
    }

    #[test]
    fn test_chapter_colon_is_optional() {
        let record = extract_record("第5话 特别篇");
        assert_eq!(
            record.chapters,
            vec![Chapter {
                number: 5,
                title: "特别篇".to_string()
            }]
        );
    }

    #[test]
    fn test_missing_cover_is_empty_not_error() {
        let record = extract_record("标题：无封面作品");
        assert_eq!(record.cover_url, "");
    }

    #[test]
    fn test_extract_cover_url() {
        let record = extract_record("![cover](https://img.example.com/c.jpg)");
        assert_eq!(record.cover_url, "https://img.example.com/c.jpg");
    }

    #[test]
    fn test_tags_split_on_comma() {
        let record = extract_record("标签：a, b, c");
        assert_eq!(record.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tags_split_on_slash() {
        let record = extract_record("类型：a/b/c");
        assert_eq!(record.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_single_tag_without_separator() {
        let record = extract_record("标签：少年漫画");
        assert_eq!(record.tags, vec!["少年漫画"]);
    }

    #[test]
    fn test_no_matches_yield_empty_record() {
        let record = extract_record("just some unrelated text\n");
        assert!(record.is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = extract_record(SAMPLE);
        let second = extract_record(SAMPLE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_document() {
        let record = extract_record(SAMPLE);

        assert_eq!(record.title, "海贼王");
        assert_eq!(record.author, "尾田荣一郎");
        assert_eq!(record.description, "少年出海寻找传说中的大秘宝");
        assert_eq!(record.cover_url, "https://img.example.com/op/cover.jpg");
        assert_eq!(record.tags, vec!["冒险", "热血", "海洋"]);
        assert_eq!(record.chapters.len(), 3);
        assert_eq!(record.chapters[2].number, 3);
        assert_eq!(record.chapters[2].title, "迎击");
    }
}
