//! # Verse Agent Service / 经文代理服务
//!
//! The synchronous call surface used by a UI host. Every call is a pure
//! lookup over immutable data, so one `VerseAgent` can be shared between
//! any number of concurrent sessions.
//!
//! UI 宿主使用的同步调用接口。每个调用都是对不可变数据的纯查找，
//! 因此一个 `VerseAgent` 可以在任意数量的并发会话之间共享。

use crate::core::{
    Catalog, CommentaryProvider, CommentarySet, Language, Perspective, Selection,
    SelectionEngine, Session, TemplateCommentary, VerseRecord, VerseResult, locale,
};
use std::collections::BTreeMap;

/// Facade over the catalog, the locale tables and a commentary provider.
pub struct VerseAgent<'a> {
    engine: SelectionEngine<'a>,
    commentary: Box<dyn CommentaryProvider + 'a>,
}

impl VerseAgent<'static> {
    /// An agent over the builtin catalog with template commentary.
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl<'a> VerseAgent<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_commentary(catalog, TemplateCommentary)
    }

    /// An agent that delegates commentary to `provider`.
    pub fn with_commentary(catalog: &'a Catalog, provider: impl CommentaryProvider + 'a) -> Self {
        Self {
            engine: SelectionEngine::new(catalog),
            commentary: Box::new(provider),
        }
    }

    pub fn engine(&self) -> &SelectionEngine<'a> {
        &self.engine
    }

    pub fn commentary_provider(&self) -> &dyn CommentaryProvider {
        self.commentary.as_ref()
    }

    /// A fresh session in `language`.
    pub fn session(&self, language: Language) -> Session<'a> {
        Session::new(language)
    }

    /// `(code, display name)` for every supported language, in stable order.
    pub fn list_languages(&self) -> Vec<(&'static str, &'static str)> {
        locale::supported_languages()
            .iter()
            .map(|lang| (lang.code(), lang.display_name()))
            .collect()
    }

    /// The UI strings of a language as a `key -> text` map.
    ///
    /// # Errors
    /// `UnknownLanguage` for an unsupported code.
    pub fn locale_strings(&self, code: &str) -> VerseResult<BTreeMap<String, String>> {
        locale::strings(code).map(|bundle| bundle.to_map())
    }

    pub fn random_verse(&self) -> &'a VerseRecord {
        self.engine.random()
    }

    /// First verse matching `query`, or `NoMatch`.
    ///
    /// # Errors
    /// `UnknownLanguage` for an unsupported code.
    pub fn search_verses(&self, query: &str, language: &str) -> VerseResult<Selection<'a>> {
        self.engine.search(query, language)
    }

    /// Commentary text; never fails.
    pub fn commentary(&self, reference: &str, language: &str, perspective: Perspective) -> String {
        self.commentary.commentary(reference, language, perspective)
    }

    /// Commentary for several perspectives at once; never fails.
    pub fn commentary_set(
        &self,
        reference: &str,
        language: &str,
        perspectives: &[Perspective],
    ) -> CommentarySet {
        CommentarySet::collect(self.commentary.as_ref(), reference, language, perspectives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FALLBACK_COMMENTARY, VerseError};

    struct Echo;

    impl CommentaryProvider for Echo {
        fn commentary(&self, reference: &str, language: &str, perspective: Perspective) -> String {
            format!("{reference}/{language}/{perspective}")
        }
    }

    #[test]
    fn call_surface_matches_expectations() {
        let agent = VerseAgent::builtin();

        assert_eq!(agent.list_languages()[0], ("en", "English"));
        assert!(agent.locale_strings("rw").unwrap().contains_key("no_results"));
        assert!(matches!(
            agent.locale_strings("xx"),
            Err(VerseError::UnknownLanguage { .. })
        ));

        let found = agent.search_verses("John 3:16", "en").unwrap();
        assert_eq!(found.verse().map(|v| v.reference()), Some("John 3:16"));

        assert_eq!(
            agent.commentary("John 3:16", "xx", Perspective::Practical),
            FALLBACK_COMMENTARY
        );
    }

    #[test]
    fn commentary_provider_is_swappable() {
        let agent = VerseAgent::with_commentary(Catalog::builtin(), Echo);
        assert_eq!(
            agent.commentary("Psalm 23:1", "sw", Perspective::Historical),
            "Psalm 23:1/sw/historical"
        );
    }
}
