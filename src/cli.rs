// src/cli.rs
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::env;

use crate::core::{Language, LocaleBundle, Perspective, UiKey};
use crate::infra::{self, AgentConfig};
use crate::reporting::console::set_color_enabled;
use crate::service::VerseAgent;

pub mod commands;

use commands::CommandContext;

/// The global options needed before the localized CLI can be built.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PreParsed {
    pub config: Option<String>,
    pub lang: Option<String>,
}

/// Pre-parses the command line for `--config` and `--lang`.
///
/// The same clap definition is used with errors ignored, so every spelling clap
/// accepts (`-c PATH`, `-cPATH`, `--config=PATH`, ...) is read the same way
/// here. If the real parse would print help or version, nothing is returned
/// and that parse reports it.
///
/// 预解析命令行中的 `--config` 和 `--lang`。使用相同的 clap 定义并忽略错误，
/// 因此 clap 接受的所有写法在这里都以相同方式读取。
pub fn pre_parse(args: &[String]) -> PreParsed {
    let matches = build_cli(&LocaleBundle::new(Language::default()))
        .ignore_errors(true)
        .try_get_matches_from(args);
    match matches {
        Ok(matches) => PreParsed {
            config: matches.get_one::<String>("config").cloned(),
            lang: matches.get_one::<String>("lang").cloned(),
        },
        Err(_) => PreParsed::default(),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn perspective_arg(help: &str) -> Arg {
    Arg::new("perspective")
        .short('p')
        .long("perspective")
        .help(help.to_string())
        .value_name("PERSPECTIVE")
        .value_parser(PossibleValuesParser::new(
            Perspective::ALL.map(|p| p.as_str()),
        ))
        .action(ArgAction::Append)
}

fn no_commentary_arg() -> Arg {
    Arg::new("no-commentary")
        .long("no-commentary")
        .help("Show the verse without commentary.")
        .action(ArgAction::SetTrue)
}

pub fn build_cli(bundle: &LocaleBundle) -> Command {
    Command::new("verse-agent")
        .version(env!("CARGO_PKG_VERSION"))
        .about(format!("{} - {}", bundle.get(UiKey::Title), bundle.get(UiKey::Subtitle)))
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(bundle.get(UiKey::SelectLanguage).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a verse-agent.toml configuration file.")
                .value_name("CONFIG")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON.")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print debug logs to stderr.")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("languages").about(bundle.get(UiKey::SelectLanguage).to_string()),
        )
        .subcommand(
            Command::new("strings").about("Print the UI strings of the active language."),
        )
        .subcommand(
            Command::new("random")
                .about(bundle.get(UiKey::GetRandom).to_string())
                .arg(no_commentary_arg()),
        )
        .subcommand(
            Command::new("today")
                .about(bundle.get(UiKey::VerseOfDay).to_string())
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("Pick the verse for this date (YYYY-MM-DD) instead of today.")
                        .value_name("DATE")
                        .value_parser(parse_date)
                        .action(ArgAction::Set),
                )
                .arg(no_commentary_arg()),
        )
        .subcommand(
            Command::new("search")
                .about(bundle.get(UiKey::SearchButton).to_string())
                .arg(
                    Arg::new("query")
                        .help(bundle.get(UiKey::SearchPlaceholder).to_string())
                        .value_name("QUERY")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .help("Show every matching verse instead of the first one.")
                        .action(ArgAction::SetTrue),
                )
                .arg(no_commentary_arg()),
        )
        .subcommand(
            Command::new("commentary")
                .about(bundle.get(UiKey::Interpretations).to_string())
                .arg(
                    Arg::new("reference")
                        .help("Verse reference, e.g. \"John 3:16\".")
                        .value_name("REFERENCE")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(perspective_arg("Perspective to show; repeat for several.")),
        )
        .subcommand(
            Command::new("interactive").about(bundle.get(UiKey::MenuPrompt).to_string()),
        )
}

fn perspectives_from(matches: &ArgMatches, config: &AgentConfig) -> Vec<Perspective> {
    let requested: Vec<Perspective> = matches
        .get_many::<String>("perspective")
        .map(|values| values.filter_map(|v| v.parse().ok()).collect())
        .unwrap_or_default();
    if requested.is_empty() {
        config.perspectives.clone()
    } else {
        requested
    }
}

/// Resolves `--lang`. The error is headed in the language the user would
/// otherwise get, since the requested one cannot be used.
fn resolve_language(config: &AgentConfig, flag: Option<&str>) -> Result<Language> {
    config.resolve_language(flag).map_err(|e| {
        let fallback = LocaleBundle::new(config.resolve_language(None).unwrap_or_default());
        let supported: Vec<_> = Language::ALL.iter().map(|l| l.code()).collect();
        anyhow!(
            "{}: {} (supported: {})",
            fallback.get(UiKey::UnknownLanguage),
            e,
            supported.join(", ")
        )
    })
}

pub fn run() -> Result<()> {
    // Resolve configuration and language first, so the CLI itself is localized.
    let args: Vec<String> = env::args().collect();
    let pre = pre_parse(&args);
    let config = infra::config::load_or_default(pre.config.as_deref())?;
    let language = resolve_language(&config, pre.lang.as_deref())?;
    let bundle = LocaleBundle::new(language);

    let matches = build_cli(&bundle).get_matches_from(&args);

    let json = matches.get_flag("json");
    infra::init_logging(matches.get_flag("verbose"));
    set_color_enabled(config.color && !json);

    let mut ctx = CommandContext {
        agent: VerseAgent::builtin(),
        language,
        perspectives: config.perspectives.clone(),
        json,
    };

    match matches.subcommand() {
        Some(("languages", _)) => commands::locale::languages(&ctx),
        Some(("strings", _)) => commands::locale::strings(&ctx),
        Some(("random", sub)) => commands::browse::random(&ctx, !sub.get_flag("no-commentary")),
        Some(("today", sub)) => {
            let date = sub
                .get_one::<NaiveDate>("date")
                .copied()
                .unwrap_or_else(|| chrono::Local::now().date_naive());
            commands::browse::today(&ctx, date, !sub.get_flag("no-commentary"))
        }
        Some(("search", sub)) => {
            let query = sub
                .get_one::<String>("query")
                .map(String::as_str)
                .unwrap_or_default();
            commands::browse::search(
                &ctx,
                query,
                sub.get_flag("all"),
                !sub.get_flag("no-commentary"),
            )
        }
        Some(("commentary", sub)) => {
            let reference = sub
                .get_one::<String>("reference")
                .map(String::as_str)
                .unwrap_or_default();
            ctx.perspectives = perspectives_from(sub, &config);
            commands::browse::commentary(&ctx, reference)
        }
        Some(("interactive", _)) => commands::interactive::run(&mut ctx),
        // No subcommand: show a verse, like opening the app.
        _ => commands::browse::random(&ctx, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pre_parse_reads_every_clap_spelling() {
        let a = pre_parse(&args(&["verse-agent", "--lang", "fr", "search", "amour"]));
        assert_eq!(a.lang.as_deref(), Some("fr"));

        let b = pre_parse(&args(&["verse-agent", "search", "amour", "--lang=sw"]));
        assert_eq!(b.lang.as_deref(), Some("sw"));

        for form in [
            &["verse-agent", "-cconf.toml", "random"][..],
            &["verse-agent", "-c", "conf.toml", "random"][..],
            &["verse-agent", "random", "--config=conf.toml"][..],
        ] {
            assert_eq!(pre_parse(&args(form)).config.as_deref(), Some("conf.toml"), "{form:?}");
        }

        assert_eq!(pre_parse(&args(&["verse-agent", "random"])), PreParsed::default());
    }

    #[test]
    fn pre_parse_agrees_with_the_real_parse() {
        let argv = ["verse-agent", "-cconf.toml", "search", "x", "--lang", "rw"];
        let matches = build_cli(&LocaleBundle::new(Language::Rw))
            .try_get_matches_from(argv)
            .unwrap();
        let pre = pre_parse(&args(&argv));
        assert_eq!(pre.config.as_ref(), matches.get_one::<String>("config"));
        assert_eq!(pre.lang.as_ref(), matches.get_one::<String>("lang"));
    }

    #[test]
    fn pre_parse_tolerates_incomplete_command_lines() {
        let pre = pre_parse(&args(&["verse-agent", "--lang", "sw", "search"]));
        assert_eq!(pre.lang.as_deref(), Some("sw"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        build_cli(&LocaleBundle::new(Language::Rw)).debug_assert();
    }

    #[test]
    fn unknown_language_error_is_localized() {
        let config = AgentConfig {
            language: Some(Language::Fr),
            ..AgentConfig::default()
        };
        let message = resolve_language(&config, Some("xx")).unwrap_err().to_string();
        assert!(message.starts_with("Code de langue non pris en charge"));
        assert!(message.contains("unknown language code 'xx'"));
        assert!(message.ends_with("(supported: en, fr, sw, rw)"));

        assert_eq!(resolve_language(&config, Some("sw")).unwrap(), Language::Sw);
        assert!(resolve_language(&config, Some("SW")).is_err());
    }

    #[test]
    fn perspectives_default_to_config() {
        let config = AgentConfig::default();
        let bundle = LocaleBundle::new(Language::En);
        let matches = build_cli(&bundle)
            .try_get_matches_from(["verse-agent", "commentary", "John 3:16", "-p", "practical"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(perspectives_from(sub, &config), [Perspective::Practical]);

        let matches = build_cli(&bundle)
            .try_get_matches_from(["verse-agent", "commentary", "John 3:16"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(perspectives_from(sub, &config), Perspective::ALL);
    }
}
