//! # Core Module / 核心模块
//!
//! The verse resolution and multilingual content-selection engine: the verse
//! catalog, the locale resolver, the search/selection engine and the
//! commentary generator, plus the per-session state that ties them together.
//!
//! 经文解析与多语言内容选择引擎：经文目录、语言区域解析器、搜索/选择引擎和评注生成器，
//! 以及将它们联系在一起的会话状态。

pub mod catalog;
pub mod commentary;
pub mod error;
pub mod language;
pub mod locale;
pub mod search;
pub mod session;

// Re-exports
pub use catalog::{Catalog, LocalizedText, VerseRecord};
pub use commentary::{
    CommentaryEntry, CommentaryProvider, CommentarySet, FALLBACK_COMMENTARY, Perspective,
    TemplateCommentary, interpolate,
};
pub use error::{CatalogError, VerseError, VerseResult};
pub use language::Language;
pub use locale::{LocaleBundle, UiKey};
pub use search::{Selection, SelectionEngine};
pub use session::Session;
