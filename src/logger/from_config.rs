//! Logger construction from a loaded [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;
use crate::output::{FileSink, TerminalSink};

impl Logger {
    /// Loads the default config file and builds a logger from it.
    ///
    /// # Errors
    /// Config loading fails, or the configured output cannot be opened.
    pub fn from_default_config() -> Result<Self, crate::Error> {
        let config = Config::load()?;
        Self::from_config(&config)
    }

    /// Builds a logger from an already loaded config.
    ///
    /// # Errors
    /// `output.target` is not `stdout`, `stderr` or `file`, or the log file cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        internal::debug("Building logger from config");
        let builder = Self::builder()
            .level(config.parse_level())
            .template(config.format.template.clone())
            .ansi_styling(config.format.ansi_styling)
            .style_tags(config.format.style_tags);

        let builder = Self::configure_output(builder, config)?;
        internal::debug(&format!("Output target: {}", config.output.target));
        Ok(builder.build())
    }

    fn configure_output(
        builder: LoggerBuilder,
        config: &Config,
    ) -> Result<LoggerBuilder, crate::Error> {
        match config.output.target.to_ascii_lowercase().as_str() {
            "stdout" => Ok(builder.sink(TerminalSink::stdout())),
            "stderr" => Ok(builder.sink(TerminalSink::stderr())),
            "file" => {
                let path = shellexpand::tilde(&config.output.path);
                let sink = FileSink::open(path.as_ref())?;
                Ok(builder.sink(sink))
            }
            other => {
                internal::error(&format!("Unknown output target: {other}"));
                Err(crate::Error::InvalidOutput(other.to_string()))
            }
        }
    }
}
