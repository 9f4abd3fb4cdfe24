//! # Commands Module / 命令模块
//!
//! One submodule per group of subcommands. Every command receives the same
//! [`CommandContext`] and writes its result to stdout.
//!
//! 每组子命令一个子模块。每个命令接收相同的 [`CommandContext`] 并将结果写入 stdout。

use crate::core::{Language, LocaleBundle, Perspective};
use crate::service::VerseAgent;

pub mod browse;
pub mod interactive;
pub mod locale;

/// Everything a command needs: the agent, the resolved settings and the output mode.
pub struct CommandContext {
    pub agent: VerseAgent<'static>,
    pub language: Language,
    pub perspectives: Vec<Perspective>,
    pub json: bool,
}

impl CommandContext {
    pub fn bundle(&self) -> LocaleBundle {
        LocaleBundle::new(self.language)
    }
}
