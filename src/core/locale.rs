//! # Locale Resolver / 语言区域解析器
//!
//! Maps a language to its display label and to its table of UI strings.
//! The tables are generated at build time from `locales/*.toml`; every locale
//! defines every [`UiKey`], otherwise the crate does not build.
//!
//! 将语言映射到其显示名称和界面字符串表。
//! 这些表在构建时由 `locales/*.toml` 生成；每个语言区域都定义了所有 [`UiKey`]，否则 crate 无法构建。

use crate::core::error::VerseResult;
use crate::core::language::Language;
use std::collections::BTreeMap;

include!(concat!(env!("OUT_DIR"), "/ui_strings.rs"));

/// The localized UI strings of one language.
/// 一种语言的本地化界面字符串。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleBundle {
    language: Language,
}

impl LocaleBundle {
    /// The bundle of a supported language.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The human-readable label of the bundle's language.
    pub fn display_name(&self) -> &'static str {
        self.language.display_name()
    }

    /// The localized text for `key`. Total: every key exists in every bundle.
    pub fn get(&self, key: UiKey) -> &'static str {
        match self.language {
            Language::En => ui_string_en(key),
            Language::Fr => ui_string_fr(key),
            Language::Sw => ui_string_sw(key),
            Language::Rw => ui_string_rw(key),
        }
    }

    /// Iterates over `(key, text)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (UiKey, &'static str)> + '_ {
        UiKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// The bundle as a plain `key -> text` map, with keys as written in the locale files.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(key, text)| (key.as_str().to_string(), text.to_string()))
            .collect()
    }
}

/// Every supported language, in stable display order.
pub fn supported_languages() -> &'static [Language] {
    &Language::ALL
}

/// The display label of a language code.
///
/// # Errors
/// `UnknownLanguage` if `code` is outside the supported set.
pub fn display_name(code: &str) -> VerseResult<&'static str> {
    Language::from_code(code).map(Language::display_name)
}

/// The UI string bundle of a language code.
///
/// # Errors
/// `UnknownLanguage` if `code` is outside the supported set.
pub fn strings(code: &str) -> VerseResult<LocaleBundle> {
    Language::from_code(code).map(LocaleBundle::new)
}
