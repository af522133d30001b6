#![cfg(feature = "cli")]

use clap::Parser;
use picolog::cli::{Cli, Command, describe_token};
use picolog::fmt::FormatTemplate;

#[test]
fn describe_tokens() {
    let template = FormatTemplate::parse("[%LVL%] %RED_HI_BG%%MSG%%RST%");
    let described: Vec<String> = template
        .tokens()
        .iter()
        .map(|t| describe_token(&template, t))
        .collect();
    assert_eq!(
        described,
        [
            "Text \"[\"",
            "Level",
            "Text \"] \"",
            "Color RED_HI_BG",
            "Message",
            "Style RST",
        ]
    );
}

#[test]
fn parse_log_command() {
    let cli = Cli::try_parse_from([
        "picolog",
        "log",
        "warn",
        "battery",
        "low",
        "--no-ansi",
        "--template",
        "%MSG%",
    ])
    .unwrap();
    let Command::Log {
        message,
        template,
        no_ansi,
        no_style_tags,
        ..
    } = cli.command
    else {
        panic!("expected log command");
    };
    assert_eq!(message, ["battery", "low"]);
    assert_eq!(template.as_deref(), Some("%MSG%"));
    assert!(no_ansi);
    assert!(!no_style_tags);
}

#[test]
fn parse_rejects_unknown_level() {
    assert!(Cli::try_parse_from(["picolog", "log", "trace", "x"]).is_err());
}

#[test]
fn parse_tokens_and_levels() {
    let cli = Cli::try_parse_from(["picolog", "--config", "/tmp/p.toml", "tokens"]).unwrap();
    assert!(matches!(cli.command, Command::Tokens { template: None }));
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/p.toml")));

    let cli = Cli::try_parse_from(["picolog", "levels"]).unwrap();
    assert!(matches!(cli.command, Command::Levels));
}
