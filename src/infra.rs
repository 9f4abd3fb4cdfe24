//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the verse agent host,
//! including configuration loading, logging setup and system locale detection.
//!
//! 此模块为经文代理宿主提供基础设施服务，
//! 包括配置加载、日志设置和系统区域设置检测。

pub mod config;
pub mod locale;
pub mod logging;

pub use config::AgentConfig;
pub use locale::detect_system_language;
pub use logging::init_logging;
