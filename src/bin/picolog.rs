//! `picolog` binary: render lines, inspect templates, list levels.
//!
//! Usage:
//!   picolog log <level> <message>... [--template T] [--no-ansi] [--no-style-tags]
//!   picolog tokens [--template T]
//!   picolog levels

use clap::Parser;
use picolog::cli::{Cli, Command, LogOptions, cmd_levels, cmd_log, cmd_tokens};
use picolog::config::Config;
use picolog::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config drives level, template and sink, so it loads before any logger is created
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config);

    match cli.command {
        Command::Log {
            level,
            message,
            template,
            no_ansi,
            no_style_tags,
        } => {
            let options = LogOptions {
                template,
                no_ansi,
                no_style_tags,
            };
            cmd_log(level.into(), &message, options, &config)
        }
        Command::Tokens { template } => {
            cmd_tokens(template.as_deref().unwrap_or(&config.format.template))
        }
        Command::Levels => cmd_levels(config.format.ansi_styling),
    }
}
