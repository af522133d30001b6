//! The most common CLI operation: render a single line exactly as the
//! configured logger would.

use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::logger::{CallSite, Logger};
use std::process::ExitCode;

/// Per-invocation overrides on top of the loaded config.
#[derive(Debug, Default)]
pub struct LogOptions {
    pub template: Option<String>,
    pub no_ansi: bool,
    pub no_style_tags: bool,
}

impl LogOptions {
    fn apply(self, config: &Config) -> Config {
        let mut config = config.clone();
        if let Some(template) = self.template {
            config.format.template = template;
        }
        if self.no_ansi {
            config.format.ansi_styling = false;
        }
        if self.no_style_tags {
            config.format.style_tags = false;
        }
        config
    }
}

#[must_use]
pub fn cmd_log(level: Level, message: &[String], options: LogOptions, config: &Config) -> ExitCode {
    let config = options.apply(config);
    let logger = match Logger::from_config(&config) {
        Ok(logger) => logger,
        Err(e) => {
            internal::error(&format!("Cannot build logger: {e}"));
            return ExitCode::FAILURE;
        }
    };

    // The shell already did any formatting, so the words are the whole message.
    let site = CallSite::new("main", "picolog", 0);
    logger.log(&site, level, &message.join(" "), &[]);

    if let Err(e) = logger.flush() {
        internal::error(&format!("Flush failed: {e}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
