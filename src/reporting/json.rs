//! # JSON Reporting Module / JSON 报告模块
//!
//! Machine-readable views of command results, printed with `--json`.
//!
//! 命令结果的机器可读视图，使用 `--json` 时输出。

use anyhow::Result;
use serde::Serialize;

use crate::core::{CommentarySet, Language, Selection, VerseRecord};

/// A verse resolved in one language, with optional commentary.
#[derive(Debug, Serialize)]
pub struct VerseView<'a> {
    pub reference: &'a str,
    pub language: Language,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<CommentarySet>,
}

impl<'a> VerseView<'a> {
    pub fn new(verse: &'a VerseRecord, language: Language, commentary: Option<CommentarySet>) -> Self {
        Self {
            reference: verse.reference(),
            language,
            text: verse.text(language),
            commentary,
        }
    }
}

/// The outcome of a search. `verses` is empty for `no_match`.
#[derive(Debug, Serialize)]
pub struct SearchView<'a> {
    pub query: &'a str,
    pub language: Language,
    pub status: &'static str,
    pub verses: Vec<VerseView<'a>>,
}

impl<'a> SearchView<'a> {
    pub fn new(query: &'a str, language: Language, verses: Vec<VerseView<'a>>) -> Self {
        let status = if verses.is_empty() { "no_match" } else { "found" };
        Self {
            query,
            language,
            status,
            verses,
        }
    }

    pub fn from_selection(
        query: &'a str,
        language: Language,
        selection: Selection<'a>,
        commentary: Option<CommentarySet>,
    ) -> Self {
        let verses = selection
            .verse()
            .map(|verse| VerseView::new(verse, language, commentary))
            .into_iter()
            .collect();
        Self::new(query, language, verses)
    }
}

/// Commentary for a reference, with the verse itself when the catalog has it.
#[derive(Debug, Serialize)]
pub struct CommentaryView<'a> {
    pub verse: Option<VerseView<'a>>,
    pub commentary: CommentarySet,
}

#[derive(Debug, Serialize)]
pub struct LanguageView<'a> {
    pub code: &'a str,
    pub name: &'a str,
}

/// Serializes `value` as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
