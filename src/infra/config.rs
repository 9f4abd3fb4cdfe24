//! # Configuration Module / 配置模块
//!
//! Loads the optional `verse-agent.toml` file and resolves the active language
//! from the command line, the file and the system locale.
//!
//! 加载可选的 `verse-agent.toml` 文件，并根据命令行、配置文件和系统区域设置确定当前语言。

use crate::core::{Language, Perspective, VerseResult};
use crate::infra::locale::detect_system_language;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "verse-agent.toml";

/// Settings read from the configuration file. Every field is optional.
/// 从配置文件读取的设置。所有字段均为可选。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// The language for verses, commentary and messages (e.g. "en", "sw").
    /// When absent, the system locale decides.
    ///
    /// 经文、评注和消息的语言（例如 "en"、"sw"）。缺省时由系统区域设置决定。
    #[serde(default)]
    pub language: Option<Language>,

    /// The commentary perspectives to show, in order.
    /// 要显示的评注视角，按顺序排列。
    #[serde(default = "default_perspectives")]
    pub perspectives: Vec<Perspective>,

    /// Whether console output is colored.
    /// 控制台输出是否着色。
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_perspectives() -> Vec<Perspective> {
    Perspective::ALL.to_vec()
}

fn default_color() -> bool {
    true
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            language: None,
            perspectives: default_perspectives(),
            color: default_color(),
        }
    }
}

impl AgentConfig {
    /// Parses a configuration document, dropping repeated perspectives.
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: AgentConfig = toml::from_str(content)?;
        let mut unique = Vec::with_capacity(config.perspectives.len());
        for perspective in config.perspectives {
            if !unique.contains(&perspective) {
                unique.push(perspective);
            }
        }
        config.perspectives = unique;
        Ok(config)
    }

    /// Picks the active language: the `--lang` flag, then the file, then the system locale.
    ///
    /// # Errors
    /// `UnknownLanguage` when the flag names an unsupported code. The flag is
    /// never silently replaced by a default.
    ///
    /// 选择当前语言：依次为 `--lang` 参数、配置文件、系统区域设置。
    pub fn resolve_language(&self, flag: Option<&str>) -> VerseResult<Language> {
        match flag {
            Some(code) => Language::from_code(code),
            None => Ok(self.language.unwrap_or_else(detect_system_language)),
        }
    }
}

/// Finds the configuration file to load, if any.
///
/// An explicit path is tilde-expanded and must exist. Without one, the default
/// file in the working directory is used when present.
pub fn locate_config(explicit: Option<&str>) -> Result<Option<PathBuf>> {
    match explicit {
        Some(raw) => {
            let path = PathBuf::from(shellexpand::tilde(raw).as_ref());
            if !path.is_file() {
                bail!("Configuration file not found: {}", path.display());
            }
            Ok(Some(path))
        }
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            Ok(path.is_file().then_some(path))
        }
    }
}

/// Reads and parses a configuration file.
pub fn load_config(path: &Path) -> Result<AgentConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    AgentConfig::from_toml(&content)
        .with_context(|| format!("Failed to parse configuration file: {}", path.display()))
}

/// Locates and loads the configuration, falling back to defaults when no file exists.
pub fn load_or_default(explicit: Option<&str>) -> Result<AgentConfig> {
    match locate_config(explicit)? {
        Some(path) => load_config(&path),
        None => Ok(AgentConfig::default()),
    }
}
