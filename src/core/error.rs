//! # Error Taxonomy / 错误分类
//!
//! The core has exactly one failure: a language code outside the supported set.
//! A search without results is a value (`Selection::NoMatch`), not an error.
//!
//! 核心只有一种失败：不在支持集合内的语言代码。
//! 没有结果的搜索是一个值（`Selection::NoMatch`），而不是错误。

use thiserror::Error;

/// Result type for core lookups.
pub type VerseResult<T> = Result<T, VerseError>;

/// Errors produced by the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerseError {
    /// The requested language code is not one of the supported codes.
    /// The caller decides how to recover; the core never substitutes a default.
    #[error("unknown language code '{code}'")]
    UnknownLanguage {
        /// The code as it was requested.
        code: String,
    },
}

impl VerseError {
    pub(crate) fn unknown_language(code: &str) -> Self {
        Self::UnknownLanguage {
            code: code.to_string(),
        }
    }
}

/// Data-integrity defects found while assembling a catalog.
/// 组装经文目录时发现的数据完整性缺陷。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A catalog must hold at least one verse.
    #[error("catalog is empty")]
    Empty,
    /// Two records share the same reference.
    #[error("duplicate verse reference '{reference}'")]
    DuplicateReference {
        /// The repeated reference.
        reference: String,
    },
    /// A record has no text for a supported language.
    #[error("verse '{reference}' has no text for language '{language}'")]
    MissingText {
        /// The incomplete record.
        reference: String,
        /// Code of the language without text.
        language: &'static str,
    },
}
