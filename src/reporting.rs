//! # Reporting Module / 报告模块
//!
//! This module renders command results for the terminal, either as colorful,
//! localized text or as JSON for scripts.
//!
//! 此模块为终端渲染命令结果，可以是彩色的本地化文本，也可以是供脚本使用的 JSON。

pub mod console;
pub mod json;

// Re-export common reporting functions
pub use console::{render_commentary, render_no_results, render_verse};
pub use json::to_json;
