//! # Locale Commands / 语言区域命令
//!
//! `languages` and `strings`: what a UI host needs to render its language picker
//! and its labels.
//!
//! `languages` 和 `strings`：UI 宿主渲染语言选择器和标签所需的内容。

use anyhow::Result;

use super::CommandContext;
use crate::reporting::console::{render_languages, render_strings};
use crate::reporting::json::{LanguageView, to_json};

/// Lists `(code, display name)` for every supported language.
pub fn languages(ctx: &CommandContext) -> Result<()> {
    let languages = ctx.agent.list_languages();

    if ctx.json {
        let views: Vec<_> = languages
            .iter()
            .map(|(code, name)| LanguageView { code, name })
            .collect();
        println!("{}", to_json(&views)?);
    } else {
        print!("{}", render_languages(&languages, &ctx.bundle()));
    }
    Ok(())
}

/// Prints the UI strings of the active language.
pub fn strings(ctx: &CommandContext) -> Result<()> {
    if ctx.json {
        let strings = ctx.agent.locale_strings(ctx.language.code())?;
        println!("{}", to_json(&strings)?);
    } else {
        print!("{}", render_strings(&ctx.bundle()));
    }
    Ok(())
}
