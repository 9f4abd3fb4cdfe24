//! # Search/Selection Engine / 搜索与选择引擎
//!
//! Resolves a user query, a random request or a date to at most one verse
//! record of a [`Catalog`].
//!
//! 将用户查询、随机请求或日期解析为 [`Catalog`] 中至多一条经文记录。
//!
//! ## Matching policy / 匹配策略
//!
//! A record matches when its case-folded reference, or its case-folded text in
//! the requested language, contains the case-folded query. Records are checked
//! in catalog order and the first match wins. An empty or all-whitespace query
//! never matches.
//!
//! 当记录的引用或其在所请求语言中的文本（均转换为小写后）包含小写查询时即为匹配。
//! 按目录顺序检查记录，第一个匹配者胜出。空查询或全空白查询从不匹配。

use crate::core::catalog::{Catalog, VerseRecord};
use crate::core::error::VerseResult;
use crate::core::language::Language;
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, trace};

/// Outcome of a search: a record, or an explicit "no match" marker.
/// 搜索结果：一条记录，或明确的"无匹配"标记。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "verse", rename_all = "snake_case")]
pub enum Selection<'a> {
    Found(&'a VerseRecord),
    NoMatch,
}

impl<'a> Selection<'a> {
    pub fn verse(&self) -> Option<&'a VerseRecord> {
        match self {
            Selection::Found(verse) => Some(verse),
            Selection::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Selection::Found(_))
    }
}

impl<'a> From<Option<&'a VerseRecord>> for Selection<'a> {
    fn from(verse: Option<&'a VerseRecord>) -> Self {
        verse.map_or(Selection::NoMatch, Selection::Found)
    }
}

/// A query normalized once for repeated comparisons.
#[derive(Debug)]
struct FoldedQuery(String);

impl FoldedQuery {
    /// `None` for queries that can never match.
    fn new(query: &str) -> Option<Self> {
        if query.trim().is_empty() {
            None
        } else {
            Some(Self(query.to_lowercase()))
        }
    }

    fn matches(&self, verse: &VerseRecord, language: Language) -> bool {
        verse.reference().to_lowercase().contains(&self.0)
            || verse.text(language).to_lowercase().contains(&self.0)
    }
}

/// Selects verses from a borrowed catalog. Holds no mutable state, so one
/// engine can serve any number of sessions.
///
/// 从借用的目录中选择经文。不持有可变状态，因此一个引擎可以服务任意数量的会话。
#[derive(Debug, Clone, Copy)]
pub struct SelectionEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> SelectionEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Draws one record uniformly at random using the thread-local generator.
    pub fn random(&self) -> &'a VerseRecord {
        self.random_with(&mut rand::rng())
    }

    /// Draws one record uniformly at random from `rng`.
    pub fn random_with<R: Rng>(&self, rng: &mut R) -> &'a VerseRecord {
        let verses = self.catalog.all();
        let verse = &verses[rng.random_range(0..verses.len())];
        trace!(reference = verse.reference(), "drew random verse");
        verse
    }

    /// The verse of the day: a deterministic pick that changes once per calendar day
    /// and cycles through the whole catalog.
    ///
    /// 每日经文：每个日历日变化一次的确定性选择，并循环遍历整个目录。
    pub fn verse_of_day(&self, date: NaiveDate) -> &'a VerseRecord {
        let verses = self.catalog.all();
        let index = i64::from(date.num_days_from_ce()).rem_euclid(verses.len() as i64) as usize;
        &verses[index]
    }

    /// Searches using a language code.
    ///
    /// # Errors
    /// `UnknownLanguage` if `language` is not a supported code. The code is
    /// checked before the query, so an empty query with a bad code still fails.
    pub fn search(&self, query: &str, language: &str) -> VerseResult<Selection<'a>> {
        let language = Language::from_code(language)?;
        Ok(self.search_in(query, language))
    }

    /// Returns the first record in catalog order matching `query` in `language`.
    pub fn search_in(&self, query: &str, language: Language) -> Selection<'a> {
        let Some(folded) = FoldedQuery::new(query) else {
            debug!(query, "blank query, no match");
            return Selection::NoMatch;
        };

        let selection: Selection<'a> = self
            .catalog
            .all()
            .iter()
            .find(|verse| folded.matches(verse, language))
            .into();

        debug!(
            query,
            language = language.code(),
            result = selection.verse().map(|v| v.reference()),
            "search evaluated"
        );
        selection
    }

    /// Every record matching `query` in `language`, in catalog order.
    /// The first element, if any, is what [`search_in`](Self::search_in) returns.
    pub fn search_all(&self, query: &str, language: Language) -> Vec<&'a VerseRecord> {
        let Some(folded) = FoldedQuery::new(query) else {
            return Vec::new();
        };
        self.catalog
            .all()
            .iter()
            .filter(|verse| folded.matches(verse, language))
            .collect()
    }

    /// The record with exactly this reference.
    pub fn find_by_reference(&self, reference: &str) -> Option<&'a VerseRecord> {
        self.catalog.get(reference)
    }
}
