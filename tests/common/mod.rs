// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};
use verse_agent::core::{Catalog, LocalizedText, VerseRecord};

/// A record with the same text in every language.
pub fn uniform_record(reference: &'static str, text: &'static str) -> VerseRecord {
    VerseRecord::new(reference, LocalizedText { en: text, fr: text, sw: text, rw: text })
}

/// A catalog where two records match "love" in English, in a known order.
pub fn two_match_catalog() -> Catalog {
    Catalog::from_records(vec![
        uniform_record("Genesis 1:1", "In the beginning God created the heavens and the earth."),
        uniform_record("1 John 4:8", "Whoever does not love does not know God, because God is love."),
        uniform_record("1 Corinthians 13:4", "Love is patient, love is kind."),
    ])
    .expect("test catalog is well-formed")
}

/// Writes a configuration file into a fresh temporary directory.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("verse-agent.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Helper function to create an invalid TOML configuration
pub fn write_invalid_config() -> (TempDir, PathBuf) {
    write_config(
        r#"
language = "en"
# Invalid TOML - missing closing quote
perspectives = ["historical
"#,
    )
}
