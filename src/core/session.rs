//! # Session State / 会话状态
//!
//! The only mutable state of the tool: the active language and the verse
//! currently on display. Each user interaction context owns its own
//! [`Session`]; the catalog it reads from is shared and immutable.
//!
//! 工具唯一的可变状态：当前语言和正在显示的经文。
//! 每个用户交互上下文拥有自己的 [`Session`]；它读取的目录是共享且不可变的。

use crate::core::catalog::VerseRecord;
use crate::core::commentary::{CommentaryProvider, CommentarySet, Perspective};
use crate::core::error::VerseResult;
use crate::core::language::Language;
use crate::core::locale::LocaleBundle;
use crate::core::search::{Selection, SelectionEngine};
use chrono::NaiveDate;
use rand::Rng;

/// Per-session user state.
#[derive(Debug, Clone, Default)]
pub struct Session<'a> {
    language: Language,
    current: Option<&'a VerseRecord>,
}

impl<'a> Session<'a> {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            current: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The UI strings of the active language.
    pub fn strings(&self) -> LocaleBundle {
        LocaleBundle::new(self.language)
    }

    /// Switches the active language. An unknown code leaves the session unchanged.
    pub fn set_language(&mut self, code: &str) -> VerseResult<Language> {
        self.language = Language::from_code(code)?;
        Ok(self.language)
    }

    /// The verse on display, if any.
    pub fn current(&self) -> Option<&'a VerseRecord> {
        self.current
    }

    /// Puts a random verse on display.
    pub fn show_random(&mut self, engine: &SelectionEngine<'a>) -> &'a VerseRecord {
        let verse = engine.random();
        self.current = Some(verse);
        verse
    }

    /// Puts the verse of the day for `date` on display, the same one
    /// [`SelectionEngine::verse_of_day`] gives.
    pub fn show_verse_of_day(&mut self, engine: &SelectionEngine<'a>, date: NaiveDate) -> &'a VerseRecord {
        let verse = engine.verse_of_day(date);
        self.current = Some(verse);
        verse
    }

    /// Returns the verse on display, drawing one from `rng` first if there is none.
    pub fn ensure_selection<R: Rng>(
        &mut self,
        engine: &SelectionEngine<'a>,
        rng: &mut R,
    ) -> &'a VerseRecord {
        *self.current.get_or_insert_with(|| engine.random_with(rng))
    }

    /// Searches in the active language. The selection is replaced only on a
    /// match; `NoMatch` keeps the previous verse on display.
    ///
    /// 在当前语言中搜索。仅在匹配时替换所选经文；`NoMatch` 保留之前显示的经文。
    pub fn search(&mut self, engine: &SelectionEngine<'a>, query: &str) -> Selection<'a> {
        let selection = engine.search_in(query, self.language);
        if let Selection::Found(verse) = selection {
            self.current = Some(verse);
        }
        selection
    }

    /// Commentary for the verse on display, in the active language.
    pub fn commentary(
        &self,
        provider: &dyn CommentaryProvider,
        perspectives: &[Perspective],
    ) -> Option<CommentarySet> {
        self.current.map(|verse| {
            CommentarySet::collect(provider, verse.reference(), self.language.code(), perspectives)
        })
    }
}
