//! # Browse Commands / 浏览命令
//!
//! `random`, `today`, `search` and `commentary`. A search without results is a
//! normal outcome: it prints the localized "no results" message and succeeds.
//!
//! `random`、`today`、`search` 和 `commentary`。没有结果的搜索是正常结果：
//! 它打印本地化的"无结果"消息并成功返回。

use anyhow::Result;
use chrono::NaiveDate;
use colored::*;

use super::CommandContext;
use crate::core::{CommentarySet, Selection, UiKey, VerseRecord};
use crate::reporting::console::{render_commentary, render_no_results, render_verse};
use crate::reporting::json::{CommentaryView, SearchView, VerseView, to_json};

fn commentary_for(ctx: &CommandContext, verse: &VerseRecord, enabled: bool) -> Option<CommentarySet> {
    enabled.then(|| {
        ctx.agent
            .commentary_set(verse.reference(), ctx.language.code(), &ctx.perspectives)
    })
}

/// Prints one verse, followed by its commentary when `with_commentary` is set.
fn show_verse(
    ctx: &CommandContext,
    verse: &VerseRecord,
    heading: Option<UiKey>,
    with_commentary: bool,
) -> Result<()> {
    let commentary = commentary_for(ctx, verse, with_commentary);

    if ctx.json {
        println!("{}", to_json(&VerseView::new(verse, ctx.language, commentary))?);
        return Ok(());
    }

    let bundle = ctx.bundle();
    print!("{}", render_verse(verse, &bundle, heading));
    if let Some(set) = commentary {
        print!("{}", render_commentary(&set, &bundle));
    }
    Ok(())
}

pub fn random(ctx: &CommandContext, with_commentary: bool) -> Result<()> {
    let verse = ctx.agent.random_verse();
    show_verse(ctx, verse, None, with_commentary)
}

pub fn today(ctx: &CommandContext, date: NaiveDate, with_commentary: bool) -> Result<()> {
    let verse = ctx.agent.engine().verse_of_day(date);
    show_verse(ctx, verse, Some(UiKey::VerseOfDay), with_commentary)
}

/// Searches in the active language and prints the first match, or every match with `all`.
pub fn search(ctx: &CommandContext, query: &str, all: bool, with_commentary: bool) -> Result<()> {
    if !all {
        let selection = ctx.agent.search_verses(query, ctx.language.code())?;
        if ctx.json {
            let commentary = selection
                .verse()
                .and_then(|verse| commentary_for(ctx, verse, with_commentary));
            let view = SearchView::from_selection(query, ctx.language, selection, commentary);
            println!("{}", to_json(&view)?);
            return Ok(());
        }
        return match selection {
            Selection::Found(verse) => show_verse(ctx, verse, None, with_commentary),
            Selection::NoMatch => {
                print!("{}", render_no_results(&ctx.bundle()));
                Ok(())
            }
        };
    }

    let verses = ctx.agent.engine().search_all(query, ctx.language);
    if ctx.json {
        let views = verses
            .iter()
            .map(|verse| VerseView::new(verse, ctx.language, commentary_for(ctx, verse, with_commentary)))
            .collect();
        println!("{}", to_json(&SearchView::new(query, ctx.language, views))?);
        return Ok(());
    }

    if verses.is_empty() {
        print!("{}", render_no_results(&ctx.bundle()));
        return Ok(());
    }
    for (i, verse) in verses.iter().enumerate() {
        if i > 0 {
            println!();
        }
        show_verse(ctx, verse, None, with_commentary)?;
    }
    Ok(())
}

/// Prints commentary for any reference. Never fails on unknown references; a
/// reference found in the catalog is shown with its verse text first.
pub fn commentary(ctx: &CommandContext, reference: &str) -> Result<()> {
    let verse = ctx.agent.engine().find_by_reference(reference);
    let set = ctx
        .agent
        .commentary_set(reference, ctx.language.code(), &ctx.perspectives);

    if ctx.json {
        let view = CommentaryView {
            verse: verse.map(|verse| VerseView::new(verse, ctx.language, None)),
            commentary: set,
        };
        println!("{}", to_json(&view)?);
        return Ok(());
    }

    let bundle = ctx.bundle();
    match verse {
        Some(verse) => print!("{}", render_verse(verse, &bundle, None)),
        None => println!("{}", reference.cyan().bold()),
    }
    print!("{}", render_commentary(&set, &bundle));
    Ok(())
}
