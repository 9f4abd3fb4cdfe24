//! # Commentary Generator / 评注生成器
//!
//! Produces the historical, theological and practical commentary shown next to
//! a verse. The default provider interpolates the verse reference into a static
//! template per `(perspective, language)` cell, generated at build time from
//! `data/commentary.toml`.
//!
//! 生成与经文一同显示的历史、神学和实践评注。默认提供者将经文引用插入到
//! 每个 `(视角, 语言)` 单元的静态模板中，这些模板在构建时由 `data/commentary.toml` 生成。
//!
//! A cell without a template, or a language code outside the supported set,
//! yields [`FALLBACK_COMMENTARY`] instead of an error. Generating commentary
//! never fails.
//!
//! 没有模板的单元或不受支持的语言代码会返回 [`FALLBACK_COMMENTARY`] 而不是错误。生成评注永远不会失败。

use crate::core::language::Language;
use crate::core::locale::UiKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

include!(concat!(env!("OUT_DIR"), "/commentary.rs"));

/// Returned for any `(perspective, language)` pair without a template.
pub const FALLBACK_COMMENTARY: &str = "Interpretation not available in this language.";

const REFERENCE_PLACEHOLDER: &str = "{reference}";

/// One of the three fixed commentary categories.
/// 三种固定评注类别之一。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Perspective {
    Historical,
    Theological,
    Practical,
}

impl Perspective {
    /// Every perspective, in display order.
    pub const ALL: [Perspective; 3] = [
        Perspective::Historical,
        Perspective::Theological,
        Perspective::Practical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Perspective::Historical => "historical",
            Perspective::Theological => "theological",
            Perspective::Practical => "practical",
        }
    }

    /// The UI string key of this perspective's heading.
    pub fn label_key(self) -> UiKey {
        match self {
            Perspective::Historical => UiKey::Historical,
            Perspective::Theological => UiKey::Theological,
            Perspective::Practical => UiKey::Practical,
        }
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown perspective name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown perspective '{0}' (expected historical, theological or practical)")]
pub struct UnknownPerspective(pub String);

impl FromStr for Perspective {
    type Err = UnknownPerspective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Perspective::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| UnknownPerspective(s.to_string()))
    }
}

/// Anything that can write commentary for a verse.
///
/// The template table is the default implementation; a generative backend can
/// be plugged in behind the same contract. Implementations must not fail: a
/// missing answer is reported as [`FALLBACK_COMMENTARY`].
///
/// 任何可以为经文撰写评注的对象。模板表是默认实现；生成式后端可以在相同契约下接入。
/// 实现不得失败：缺失的答案以 [`FALLBACK_COMMENTARY`] 表示。
pub trait CommentaryProvider: Send + Sync {
    /// Commentary for `reference` in the language with code `language`.
    fn commentary(&self, reference: &str, language: &str, perspective: Perspective) -> String;
}

/// Fills `{reference}` into a template cell. A missing cell yields
/// [`FALLBACK_COMMENTARY`].
pub fn interpolate(template: Option<&str>, reference: &str) -> String {
    match template {
        Some(template) => template.replace(REFERENCE_PLACEHOLDER, reference),
        None => FALLBACK_COMMENTARY.to_string(),
    }
}

/// The static template table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateCommentary;

impl TemplateCommentary {
    /// The raw template of a cell, if one is defined.
    pub fn template(perspective: Perspective, language: Language) -> Option<&'static str> {
        template_for(perspective, language)
    }

    /// Typed variant of [`CommentaryProvider::commentary`].
    pub fn render(&self, reference: &str, language: Language, perspective: Perspective) -> String {
        let template = template_for(perspective, language);
        if template.is_none() {
            warn!(
                perspective = perspective.as_str(),
                language = language.code(),
                "no commentary template, using fallback"
            );
        }
        interpolate(template, reference)
    }
}

impl CommentaryProvider for TemplateCommentary {
    fn commentary(&self, reference: &str, language: &str, perspective: Perspective) -> String {
        match Language::from_code(language) {
            Ok(language) => self.render(reference, language, perspective),
            Err(_) => {
                warn!(language, "commentary requested for unsupported language, using fallback");
                FALLBACK_COMMENTARY.to_string()
            }
        }
    }
}

/// The commentary of every requested perspective for one verse.
/// 一节经文在所有请求视角下的评注。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentarySet {
    pub reference: String,
    pub language: String,
    pub entries: Vec<CommentaryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentaryEntry {
    pub perspective: Perspective,
    pub text: String,
}

impl CommentarySet {
    /// Collects commentary from `provider` for each of `perspectives`, in order.
    pub fn collect(
        provider: &dyn CommentaryProvider,
        reference: &str,
        language: &str,
        perspectives: &[Perspective],
    ) -> Self {
        let entries = perspectives
            .iter()
            .map(|&perspective| CommentaryEntry {
                perspective,
                text: provider.commentary(reference, language, perspective),
            })
            .collect();
        Self {
            reference: reference.to_string(),
            language: language.to_string(),
            entries,
        }
    }

    pub fn get(&self, perspective: Perspective) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.perspective == perspective)
            .map(|e| e.text.as_str())
    }
}
