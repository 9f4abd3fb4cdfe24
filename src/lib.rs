//! # Verse Agent Library / 经文代理库
//!
//! This library lets a user browse, search and read short scripture verses in
//! English, French, Kiswahili or Kinyarwanda, and view historical, theological
//! and practical commentary for the verse on display.
//!
//! 此库让用户以英语、法语、斯瓦希里语或卢旺达语浏览、搜索和阅读简短的经文，
//! 并查看所显示经文的历史、神学和实践评注。
//!
//! ## Modules / 模块
//!
//! - `core` - Verse catalog, locale resolver, search engine, commentary generator and session state
//! - `service` - The synchronous call surface used by a UI host
//! - `infra` - Configuration, logging and system locale detection
//! - `reporting` - Console and JSON rendering of results
//! - `cli` - Command-line host and commands
//!
//! - `core` - 经文目录、语言区域解析器、搜索引擎、评注生成器和会话状态
//! - `service` - UI 宿主使用的同步调用接口
//! - `infra` - 配置、日志和系统区域设置检测
//! - `reporting` - 结果的控制台和 JSON 渲染
//! - `cli` - 命令行宿主和命令
//!
//! ## Example / 示例
//!
//! ```
//! use verse_agent::{Perspective, VerseAgent};
//!
//! let agent = VerseAgent::builtin();
//! let found = agent.search_verses("shepherd", "en").unwrap();
//! let verse = found.verse().unwrap();
//! assert_eq!(verse.reference(), "Psalm 23:1");
//!
//! let text = agent.commentary(verse.reference(), "sw", Perspective::Practical);
//! assert!(text.contains("Psalm 23:1"));
//! ```

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;
pub mod service;

// Re-export commonly used items
pub use crate::core::{
    Catalog, CommentaryProvider, FALLBACK_COMMENTARY, Language, LocaleBundle, Perspective,
    Selection, SelectionEngine, Session, TemplateCommentary, UiKey, VerseError, VerseRecord,
    VerseResult,
};
pub use service::VerseAgent;
