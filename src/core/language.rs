//! # Language Codes / 语言代码
//!
//! The closed set of languages the catalog, the UI strings and the commentary
//! templates are written in.
//!
//! 经文目录、界面字符串和评注模板所使用的封闭语言集合。

use crate::core::error::{VerseError, VerseResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A supported language.
/// The declaration order is the display order of language pickers.
///
/// 一种受支持的语言。声明顺序即语言选择器中的显示顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Language {
    /// English
    #[default]
    En,
    /// Français
    Fr,
    /// Kiswahili
    Sw,
    /// Kinyarwanda
    Rw,
}

impl Language {
    /// Every supported language, in stable display order.
    pub const ALL: [Language; 4] = [Language::En, Language::Fr, Language::Sw, Language::Rw];

    /// The short code of the language (e.g. `"en"`).
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Sw => "sw",
            Language::Rw => "rw",
        }
    }

    /// The name of the language, written in that language.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
            Language::Sw => "Kiswahili",
            Language::Rw => "Kinyarwanda",
        }
    }

    /// Parses a language code. Only the exact lowercase codes are accepted;
    /// `"EN"` or `" fr "` fail with [`VerseError::UnknownLanguage`] rather
    /// than being corrected.
    ///
    /// 解析语言代码。仅接受完全匹配的小写代码；`"EN"` 或 `" fr "` 返回 `UnknownLanguage`，不会被自动纠正。
    pub fn from_code(code: &str) -> VerseResult<Self> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| VerseError::unknown_language(code))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = VerseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Language::from_code(&code).map_err(serde::de::Error::custom)
    }
}
