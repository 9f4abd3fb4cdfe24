//! # Interactive Session / 交互式会话
//!
//! A menu loop over a single [`Session`]: show a random verse, search, switch
//! language or quit. The session opens on today's verse of the day, and a
//! search without results keeps the previous one.
//!
//! 基于单个 [`Session`] 的菜单循环：显示随机经文、搜索、切换语言或退出。
//! 会话以今天的每日经文开始，没有结果的搜索会保留之前的经文。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use super::CommandContext;
use crate::core::{Language, Selection, Session, UiKey};
use crate::reporting::console::{render_banner, render_commentary, render_no_results, render_verse};

enum MenuAction {
    Random,
    Search,
    Language,
    Quit,
}

const MENU: [(MenuAction, UiKey); 4] = [
    (MenuAction::Random, UiKey::MenuRandom),
    (MenuAction::Search, UiKey::MenuSearch),
    (MenuAction::Language, UiKey::MenuLanguage),
    (MenuAction::Quit, UiKey::MenuQuit),
];

fn show_current(ctx: &CommandContext, session: &Session<'_>, heading: Option<UiKey>) {
    let Some(verse) = session.current() else {
        return;
    };
    let bundle = session.strings();
    println!();
    print!("{}", render_verse(verse, &bundle, heading));
    if let Some(set) = session.commentary(ctx.agent.commentary_provider(), &ctx.perspectives) {
        print!("{}", render_commentary(&set, &bundle));
    }
    println!();
}

fn choose_language(theme: &ColorfulTheme, session: &mut Session<'_>) -> Result<()> {
    let bundle = session.strings();
    let names: Vec<_> = Language::ALL.iter().map(|l| l.display_name()).collect();
    let current = Language::ALL
        .iter()
        .position(|l| *l == session.language())
        .unwrap_or(0);

    println!("{}", bundle.get(UiKey::LanguageMenu).cyan());
    let index = Select::with_theme(theme)
        .with_prompt(bundle.get(UiKey::SelectLanguage))
        .items(&names)
        .default(current)
        .interact()
        .context(bundle.get(UiKey::Error))?;

    session.set_language(Language::ALL[index].code())?;
    Ok(())
}

/// Runs the menu loop until the user quits.
pub fn run(ctx: &mut CommandContext) -> Result<()> {
    let theme = ColorfulTheme::default();
    let engine = *ctx.agent.engine();
    let mut session = ctx.agent.session(ctx.language);

    print!("{}", render_banner(session.language()));
    session.show_verse_of_day(&engine, chrono::Local::now().date_naive());
    show_current(ctx, &session, Some(UiKey::VerseOfDay));

    loop {
        let bundle = session.strings();
        let items: Vec<_> = MENU.iter().map(|(_, key)| bundle.get(*key)).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt(bundle.get(UiKey::MenuPrompt))
            .items(&items)
            .default(0)
            .interact()
            .context(bundle.get(UiKey::Error))?;

        match MENU[choice].0 {
            MenuAction::Random => {
                session.show_random(&engine);
                show_current(ctx, &session, None);
            }
            MenuAction::Search => {
                println!("{}", bundle.get(UiKey::SearchPlaceholder).dimmed());
                let query: String = Input::with_theme(&theme)
                    .with_prompt(bundle.get(UiKey::SearchPrompt))
                    .allow_empty(true)
                    .interact_text()
                    .context(bundle.get(UiKey::Error))?;
                if query.trim().is_empty() {
                    continue;
                }
                match session.search(&engine, &query) {
                    Selection::Found(_) => show_current(ctx, &session, None),
                    Selection::NoMatch => print!("{}", render_no_results(&bundle)),
                }
            }
            MenuAction::Language => {
                choose_language(&theme, &mut session)?;
                ctx.language = session.language();
                show_current(ctx, &session, None);
            }
            MenuAction::Quit => break,
        }
    }
    Ok(())
}
