//! CLI module for picolog.
//!
//! Mostly a way to try templates and style tags from a shell before baking
//! them into firmware.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
            LogLevel::Fatal => Self::Fatal,
        }
    }
}

/// picolog - Render log lines from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "picolog",
    version,
    about = "Render log lines from the command line"
)]
pub struct Cli {
    /// Config file (defaults to <config_dir>/picolog/picolog.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log one line through a logger built from config.
    Log {
        /// Log level
        #[arg(value_enum)]
        level: LogLevel,
        /// Message words, joined with spaces. Style tags are honored.
        #[arg(required = true)]
        message: Vec<String>,
        /// Override the line template
        #[arg(long)]
        template: Option<String>,
        /// Disable ANSI escape sequences
        #[arg(long)]
        no_ansi: bool,
        /// Leave %TAG% sequences in the message untouched
        #[arg(long)]
        no_style_tags: bool,
    },
    /// Print the token sequence a template parses into.
    Tokens {
        /// Template to parse (defaults to the configured one)
        #[arg(long)]
        template: Option<String>,
    },
    /// List severity levels with their labels and colors.
    Levels,
}

pub use commands::{LogOptions, cmd_levels, cmd_log, cmd_tokens, describe_token};
