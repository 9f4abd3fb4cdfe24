//! # Verse Catalog / 经文目录
//!
//! The ordered, immutable collection of verse records. The builtin catalog is
//! generated at build time from `data/verses.toml` and never changes while the
//! process runs, so it can be shared freely between sessions and threads.
//!
//! 有序且不可变的经文记录集合。内置目录在构建时由 `data/verses.toml` 生成，
//! 进程运行期间不会改变，因此可以在会话和线程之间自由共享。

use crate::core::error::CatalogError;
use crate::core::language::Language;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;

include!(concat!(env!("OUT_DIR"), "/verses.rs"));

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    verses: Cow::Borrowed(BUILTIN_VERSES),
});

/// The text of a verse in every supported language.
/// 经文在每种受支持语言中的文本。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub en: &'static str,
    pub fr: &'static str,
    pub sw: &'static str,
    pub rw: &'static str,
}

impl LocalizedText {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Fr => self.fr,
            Language::Sw => self.sw,
            Language::Rw => self.rw,
        }
    }
}

/// A single verse: its canonical reference and its text per language.
/// 单节经文：其规范引用及每种语言的文本。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerseRecord {
    reference: &'static str,
    text: LocalizedText,
}

impl VerseRecord {
    pub fn new(reference: &'static str, text: LocalizedText) -> Self {
        Self { reference, text }
    }

    /// The canonical citation, e.g. `"John 3:16"`. Unique within a catalog.
    pub fn reference(&self) -> &'static str {
        self.reference
    }

    /// The verse text in `language`.
    pub fn text(&self, language: Language) -> &'static str {
        self.text.get(language)
    }
}

/// An ordered, immutable, non-empty sequence of verse records.
/// 一个有序、不可变、非空的经文记录序列。
#[derive(Debug, Clone)]
pub struct Catalog {
    verses: Cow<'static, [VerseRecord]>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Builds a catalog from records, keeping their order.
    ///
    /// # Errors
    /// Returns a [`CatalogError`] if `records` is empty, if two records share a
    /// reference, or if a record has blank text for any supported language.
    ///
    /// 从记录构建目录并保持其顺序。若记录为空、引用重复或某种语言的文本为空，则返回错误。
    pub fn from_records(records: Vec<VerseRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.reference) {
                return Err(CatalogError::DuplicateReference {
                    reference: record.reference.to_string(),
                });
            }
            if let Some(language) = Language::ALL
                .into_iter()
                .find(|lang| record.text(*lang).trim().is_empty())
            {
                return Err(CatalogError::MissingText {
                    reference: record.reference.to_string(),
                    language: language.code(),
                });
            }
        }

        Ok(Self {
            verses: Cow::Owned(records),
        })
    }

    /// Every record, in catalog order.
    pub fn all(&self) -> &[VerseRecord] {
        &self.verses
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// Always `false`: a catalog cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// The record with exactly this reference (case-sensitive).
    pub fn get(&self, reference: &str) -> Option<&VerseRecord> {
        self.verses.iter().find(|v| v.reference == reference)
    }
}
