//! # Session Integration Tests / 会话集成测试
//!
//! These tests drive the library the way a UI host does: one `VerseAgent`
//! shared by many users, each with a `Session` of their own.
//!
//! 这些测试以 UI 宿主的方式驱动库：多个用户共享一个 `VerseAgent`，
//! 每个用户拥有自己的 `Session`。

mod common;

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::thread;
use verse_agent::core::{Catalog, Language, Perspective, Selection, VerseError};
use verse_agent::{FALLBACK_COMMENTARY, VerseAgent};

#[test]
fn test_session_starts_with_a_verse_and_keeps_it_on_no_match() {
    let agent = VerseAgent::builtin();
    let mut session = agent.session(Language::En);
    assert!(session.current().is_none());

    let first = session.ensure_selection(agent.engine(), &mut StdRng::seed_from_u64(7));
    assert!(agent.engine().catalog().get(first.reference()).is_some());

    assert_eq!(session.search(agent.engine(), "nonexistent-zzz"), Selection::NoMatch);
    assert_eq!(session.current().map(|v| v.reference()), Some(first.reference()));

    let found = session.search(agent.engine(), "strength");
    assert_eq!(found.verse().map(|v| v.reference()), Some("Philippians 4:13"));
    assert_eq!(session.current().map(|v| v.reference()), Some("Philippians 4:13"));
}

/// Switching language changes what search and commentary see, and a bad
/// code leaves the session as it was.
///
/// 切换语言会改变搜索和评注所使用的语言，无效代码会让会话保持原样。
#[test]
fn test_language_switch_drives_search_and_commentary() {
    let agent = VerseAgent::builtin();
    let mut session = agent.session(Language::En);

    assert!(!session.search(agent.engine(), "mchungaji").is_match());
    session.set_language("sw").unwrap();
    assert!(session.search(agent.engine(), "mchungaji").is_match());

    assert_eq!(
        session.set_language("de"),
        Err(VerseError::UnknownLanguage { code: "de".to_string() })
    );
    assert_eq!(session.language(), Language::Sw);

    let set = session
        .commentary(agent.commentary_provider(), &[Perspective::Historical])
        .unwrap();
    assert_eq!(set.language, "sw");
    assert!(set.entries[0].text.starts_with("Mstari Psalm 23:1"));
    assert_ne!(set.entries[0].text, FALLBACK_COMMENTARY);
}

#[test]
fn test_sessions_share_one_agent_across_threads() {
    let agent = VerseAgent::builtin();
    let cases = [
        (Language::En, "love", "John 3:16"),
        (Language::Fr, "fortifie", "Philippians 4:13"),
        (Language::Sw, "mema", "Romans 8:28"),
        (Language::Rw, "umushumba", "Psalm 23:1"),
    ];

    thread::scope(|scope| {
        let handles: Vec<_> = cases
            .iter()
            .map(|&(language, query, _)| {
                let agent = &agent;
                scope.spawn(move || {
                    let mut session = agent.session(language);
                    for _ in 0..50 {
                        session.show_random(agent.engine());
                    }
                    session.search(agent.engine(), query);
                    (session.language(), session.current().map(|v| v.reference()))
                })
            })
            .collect();

        for (handle, (language, _, expected)) in handles.into_iter().zip(cases) {
            assert_eq!(handle.join().unwrap(), (language, Some(expected)));
        }
    });
}

#[test]
fn test_agent_over_custom_catalog() {
    let catalog: Catalog = common::two_match_catalog();
    let agent = VerseAgent::new(&catalog);

    let found = agent.search_verses("love", "fr").unwrap();
    assert_eq!(found.verse().map(|v| v.reference()), Some("1 John 4:8"));
    assert_eq!(
        agent.engine().search_all("love", Language::Fr).len(),
        2,
        "both love verses match in catalog order"
    );

    let random = agent.random_verse();
    assert!(catalog.get(random.reference()).is_some());
}
