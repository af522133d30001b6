//! Configuration struct definitions.

use crate::fmt::DEFAULT_TEMPLATE;
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

/// Line template and styling switches.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Line template, e.g. `"[%TSTMP%] [%LVL%] %MSG%"`.
    pub template: String,
    /// Emit ANSI escape sequences.
    pub ansi_styling: bool,
    /// Process `%RED%`-style tags inside message bodies.
    pub style_tags: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            ansi_styling: true,
            style_tags: true,
        }
    }
}

/// Sink selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `stdout`, `stderr` or `file`.
    pub target: String,
    /// Log file path when `target = "file"`. `~` is expanded.
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            target: "stdout".to_string(),
            path: "picolog.log".to_string(),
        }
    }
}
