//! picolog's own diagnostic logger, so config problems and sink failures are
//! reported through the same rendering pipeline as everything else.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if
//! multiple entry points (CLI, FFI, tests) race to call `init`. Calls made
//! before `init` are silently dropped.

use crate::config::Config;
use crate::level::Level;
use crate::logger::{CallSite, Logger};
use crate::output::TerminalSink;
use std::panic::Location;
use std::sync::OnceLock;

/// Internal lines go to stderr with a fixed prefix.
pub const INTERNAL_TEMPLATE: &str = "[picolog] [%LVL%] %MSG%";

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Initializes with defaults (debug level, ANSI on).
pub fn init() {
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(Level::Debug, true));
}

/// Preferred initializer: follows the user's level and ANSI setting.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER
        .get_or_init(|| build_internal_logger(config.parse_level(), config.format.ansi_styling));
    if !was_init {
        debug(&format!("Log level: {}", config.general.level));
        debug(&format!("Template: {}", config.format.template));
        debug("Internal logger ready");
    }
}

fn build_internal_logger(level: Level, ansi: bool) -> Logger {
    Logger::builder()
        .level(level)
        .template(INTERNAL_TEMPLATE)
        .ansi_styling(ansi)
        .style_tags(false)
        .sink(TerminalSink::stderr())
        .build()
}

#[track_caller]
fn log(level: Level, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        let location = Location::caller();
        let site = CallSite::new("picolog", location.file(), location.line());
        // `{}` so braces inside diagnostics are printed literally.
        logger.log(&site, level, "{}", &[&msg]);
    }
}

/// Startup and teardown diagnostics.
#[track_caller]
pub fn debug(msg: &str) {
    log(Level::Debug, msg);
}

/// Normal operational milestones: config loaded, sink opened.
#[track_caller]
pub fn info(msg: &str) {
    log(Level::Info, msg);
}

/// Non-fatal anomalies: missing include, unknown level name.
#[track_caller]
pub fn warn(msg: &str) {
    log(Level::Warn, msg);
}

/// Failures the caller will also see as an `Err`.
#[track_caller]
pub fn error(msg: &str) {
    log(Level::Error, msg);
}
