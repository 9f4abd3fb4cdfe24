//! # Console Reporting Module / 控制台报告模块
//!
//! This module renders verses, commentary and locale data for the terminal.
//! Every renderer returns a `String` so the command layer decides where it goes;
//! headings come from the active locale bundle.
//!
//! 此模块为终端渲染经文、评注和语言区域数据。
//! 每个渲染器都返回一个 `String`，由命令层决定输出位置；标题来自当前语言区域包。

use colored::*;
use std::fmt::Write;

use crate::core::{CommentarySet, Language, LocaleBundle, UiKey, VerseRecord};

/// Turns ANSI colors on or off for everything rendered afterwards.
pub fn set_color_enabled(enabled: bool) {
    if enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}

/// Renders a verse card: an optional heading, the reference, the quoted text
/// and a language badge.
///
/// 渲染经文卡片：可选标题、引用、带引号的文本以及语言标记。
///
/// # Output Format / 输出格式
/// ```text
/// == Verse of the Day ==
/// Psalm 23:1
///   "The Lord is my shepherd, I lack nothing."
///   [English]
/// ```
pub fn render_verse(
    verse: &VerseRecord,
    bundle: &LocaleBundle,
    heading: Option<UiKey>,
) -> String {
    let mut out = String::new();
    let language = bundle.language();

    if let Some(key) = heading {
        let _ = writeln!(out, "{}", format!("== {} ==", bundle.get(key)).bold());
    }
    let _ = writeln!(out, "{}", verse.reference().cyan().bold());
    let _ = writeln!(out, "  \"{}\"", verse.text(language).italic());
    let _ = writeln!(out, "  [{}]", language.display_name().dimmed());
    out
}

/// Renders commentary under the localized "Interpretations" banner, one
/// section per perspective.
pub fn render_commentary(set: &CommentarySet, bundle: &LocaleBundle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", bundle.get(UiKey::Interpretations).bold());

    for entry in &set.entries {
        let _ = writeln!(out, "\n--- {} ---", bundle.get(entry.perspective.label_key()).yellow());
        let _ = writeln!(out, "{}", entry.text);
    }
    out
}

/// The localized "no results" line.
pub fn render_no_results(bundle: &LocaleBundle) -> String {
    format!("{}\n", bundle.get(UiKey::NoResults).yellow())
}

/// Lists the supported languages, marking the active one.
///
/// # Output Format / 输出格式
/// ```text
/// Select Language
///   * en  English
///     fr  Français
/// ```
pub fn render_languages(languages: &[(&str, &str)], bundle: &LocaleBundle) -> String {
    let mut out = String::new();
    let active = bundle.language().code();
    let _ = writeln!(out, "{}", bundle.get(UiKey::SelectLanguage).bold());

    for (code, name) in languages {
        let marker = if *code == active { "*" } else { " " };
        let _ = writeln!(out, "  {} {:<4}{}", marker.green(), code, name);
    }
    out
}

/// Renders a locale bundle as `key = text` lines, in key order.
pub fn render_strings(bundle: &LocaleBundle) -> String {
    let width = UiKey::ALL.iter().map(|k| k.as_str().len()).max().unwrap_or(0);
    bundle
        .iter()
        .map(|(key, text)| format!("{:<width$} = {}\n", key.as_str(), text, width = width))
        .collect()
}

/// The title banner shown when a session starts.
pub fn render_banner(language: Language) -> String {
    let bundle = LocaleBundle::new(language);
    format!(
        "{}\n{}\n",
        bundle.get(UiKey::Title).bold(),
        bundle.get(UiKey::Subtitle).dimmed()
    )
}
