//! # Search Engine Unit Tests / 搜索引擎单元测试
//!
//! This module tests the selection engine against the builtin catalog and
//! against small hand-built catalogs: matching policy, tie-breaks, the
//! no-match marker, unknown languages and random draws.
//!
//! 此模块针对内置目录和手工构建的小目录测试选择引擎：
//! 匹配策略、平局处理、无匹配标记、未知语言和随机抽取。

mod common;

use common::{two_match_catalog, uniform_record};
use verse_agent::core::{Catalog, Language, Selection, SelectionEngine, VerseError};

fn reference_of(selection: Selection<'_>) -> Option<&'static str> {
    selection.verse().map(|v| v.reference())
}

#[cfg(test)]
mod matching_tests {
    use super::*;

    #[test]
    fn test_exact_reference() {
        let engine = SelectionEngine::new(Catalog::builtin());
        let found = engine.search("John 3:16", "en").unwrap();
        assert_eq!(reference_of(found), Some("John 3:16"));
    }

    #[test]
    fn test_reference_is_case_insensitive_substring() {
        let engine = SelectionEngine::new(Catalog::builtin());
        assert_eq!(reference_of(engine.search("philippians", "en").unwrap()), Some("Philippians 4:13"));
        assert_eq!(reference_of(engine.search("8:28", "sw").unwrap()), Some("Romans 8:28"));
    }

    #[test]
    fn test_love_returns_first_catalog_match() {
        // In the builtin catalog both John 3:16 ("loved") and Romans 8:28 ("love him") match.
        let engine = SelectionEngine::new(Catalog::builtin());
        assert_eq!(reference_of(engine.search("love", "en").unwrap()), Some("John 3:16"));
        let all: Vec<_> = engine
            .search_all("love", Language::En)
            .iter()
            .map(|v| v.reference())
            .collect();
        assert_eq!(all, ["John 3:16", "Romans 8:28"]);
    }

    #[test]
    fn test_tie_break_on_two_match_catalog() {
        let catalog = two_match_catalog();
        let engine = SelectionEngine::new(&catalog);
        assert_eq!(reference_of(engine.search("love", "en").unwrap()), Some("1 John 4:8"));
        assert_eq!(reference_of(engine.search("LOVE IS", "en").unwrap()), Some("1 Corinthians 13:4"));
        assert_eq!(reference_of(engine.search("patient", "en").unwrap()), Some("1 Corinthians 13:4"));
    }

    #[test]
    fn test_tie_break_follows_catalog_order_not_relevance() {
        let catalog = Catalog::from_records(vec![
            uniform_record("Z 9:9", "a passing mention of light"),
            uniform_record("A 1:1", "light light light"),
        ])
        .unwrap();
        let engine = SelectionEngine::new(&catalog);
        assert_eq!(reference_of(engine.search_in("light", Language::En)), Some("Z 9:9"));
    }

    #[test]
    fn test_text_matches_only_in_requested_language() {
        let engine = SelectionEngine::new(Catalog::builtin());
        assert_eq!(reference_of(engine.search("berger", "fr").unwrap()), Some("Psalm 23:1"));
        assert_eq!(engine.search("berger", "en").unwrap(), Selection::NoMatch);
        assert_eq!(reference_of(engine.search("MCHUNGAJI", "sw").unwrap()), Some("Psalm 23:1"));
        assert_eq!(reference_of(engine.search("imbaraga", "rw").unwrap()), Some("Philippians 4:13"));
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let engine = SelectionEngine::new(Catalog::builtin());
        assert_eq!(reference_of(engine.search("L'ÉTERNEL", "fr").unwrap()), Some("Psalm 23:1"));
    }
}

#[cfg(test)]
mod no_match_tests {
    use super::*;

    #[test]
    fn test_nonexistent_query() {
        let engine = SelectionEngine::new(Catalog::builtin());
        assert_eq!(engine.search("nonexistent-zzz", "en"), Ok(Selection::NoMatch));
    }

    #[test]
    fn test_empty_and_whitespace_queries() {
        let engine = SelectionEngine::new(Catalog::builtin());
        assert_eq!(engine.search("", "en"), Ok(Selection::NoMatch));
        assert_eq!(engine.search(" \t\n", "fr"), Ok(Selection::NoMatch));
    }

    #[test]
    fn test_no_match_is_a_value() {
        let engine = SelectionEngine::new(Catalog::builtin());
        let selection = engine.search("zzz", "rw").unwrap();
        assert!(!selection.is_match());
        assert!(selection.verse().is_none());
    }
}

#[cfg(test)]
mod language_error_tests {
    use super::*;

    #[test]
    fn test_unknown_language_fails() {
        let engine = SelectionEngine::new(Catalog::builtin());
        let err = engine.search("john", "xx").unwrap_err();
        assert_eq!(err, VerseError::UnknownLanguage { code: "xx".to_string() });
        assert_eq!(err.to_string(), "unknown language code 'xx'");
    }

    #[test]
    fn test_unknown_language_is_not_replaced_by_default() {
        let engine = SelectionEngine::new(Catalog::builtin());
        for code in ["de", "EN-us", "english", ""] {
            assert!(engine.search("John", code).is_err(), "{code:?} should be rejected");
        }
    }

    #[test]
    fn test_language_codes_are_not_normalized() {
        let engine = SelectionEngine::new(Catalog::builtin());
        assert_eq!(
            engine.search("john", "EN"),
            Err(VerseError::UnknownLanguage { code: "EN".to_string() })
        );
        assert_eq!(
            engine.search("john", " fr "),
            Err(VerseError::UnknownLanguage { code: " fr ".to_string() })
        );
    }
}

#[cfg(test)]
mod reference_tests {
    use super::*;

    #[test]
    fn test_find_by_reference_is_exact() {
        let engine = SelectionEngine::new(Catalog::builtin());
        let verse = engine.find_by_reference("Romans 8:28").unwrap();
        assert_eq!(verse.reference(), "Romans 8:28");
        assert!(engine.find_by_reference("romans 8:28").is_none());
        assert!(engine.find_by_reference("Romans 8").is_none());
        assert!(engine.find_by_reference("Mark 1:1").is_none());
    }

    #[test]
    fn test_find_by_reference_resolves_a_search_result() {
        let catalog = two_match_catalog();
        let engine = SelectionEngine::new(&catalog);
        let found = engine.search_in("kind", Language::Rw).verse().unwrap();
        assert_eq!(engine.find_by_reference(found.reference()), Some(found));
    }
}

#[cfg(test)]
mod random_tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_draws_reach_every_record() {
        let engine = SelectionEngine::new(Catalog::builtin());
        let seen: HashSet<_> = (0..1_000).map(|_| engine.random().reference()).collect();
        assert_eq!(seen.len(), Catalog::builtin().len());
    }

    #[test]
    fn test_random_draws_come_from_the_catalog() {
        let catalog = two_match_catalog();
        let engine = SelectionEngine::new(&catalog);
        for _ in 0..100 {
            let verse = engine.random();
            assert!(catalog.get(verse.reference()).is_some());
        }
    }
}

#[cfg(test)]
mod scale_tests {
    use super::*;

    #[test]
    fn test_large_catalog_keeps_first_match_semantics() {
        let records: Vec<_> = (0..5_000)
            .map(|i| {
                let reference: &'static str = Box::leak(format!("Book {}:{}", i / 50 + 1, i % 50 + 1).into_boxed_str());
                let text = if i == 3_210 || i == 4_999 { "the needle verse" } else { "filler text" };
                uniform_record(reference, text)
            })
            .collect();
        let catalog = Catalog::from_records(records).unwrap();
        let engine = SelectionEngine::new(&catalog);

        let found = engine.search_in("NEEDLE", Language::Sw);
        assert_eq!(reference_of(found), Some("Book 65:11"));
        assert_eq!(engine.search_all("needle", Language::Sw).len(), 2);
    }
}
