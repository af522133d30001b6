//! TOML configuration loading and `source = "..."` include resolution.
//!
//! Separated from struct definitions so that the loading logic (file I/O, cycle
//! detection, merge strategy) stays independent of the serde schema.

mod structs;

pub use structs::{FormatConfig, GeneralConfig, OutputConfig};

use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working logger, so every
/// section is `#[serde(default)]`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Severity filtering.
    pub general: GeneralConfig,
    /// Line template and ANSI switches.
    pub format: FormatConfig,
    /// Where rendered lines go.
    pub output: OutputConfig,
}

/// Scans raw TOML for `source = "..."` directives before deserialization,
/// since serde cannot handle them.
/// Returns the extracted paths and the remaining TOML content stripped of those lines.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("source") && trimmed.contains('=') {
            if let Some(path) = trimmed
                .split('=')
                .nth(1)
                .map(|s| s.trim().trim_matches('"').trim_matches('\''))
                && !path.is_empty()
            {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Loads the user's config from the default location, includes resolved.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_from(&config_path)?;
        internal::info(&format!("Config loaded from {}", config_path.display()));
        Ok(config)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let table = Self::load_with_sources(path, &mut HashSet::new())?;
        Ok(toml::Value::Table(table).try_into()?)
    }

    /// Parses a config from TOML text. `source` lines are ignored here.
    ///
    /// # Errors
    /// TOML syntax or type errors.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        let (_, toml_content) = extract_sources(content);
        Ok(toml::from_str(&toml_content)?)
    }

    /// Recursive loader that expands `source = "..."` includes.
    ///
    /// `chain` holds the files on the current include path only, so a file
    /// sourced from two siblings loads twice while a real cycle is rejected.
    fn load_with_sources(
        path: &Path,
        chain: &mut HashSet<PathBuf>,
    ) -> Result<toml::Table, crate::Error> {
        if !path.exists() {
            internal::debug("Config file not found, using defaults");
            return Ok(toml::Table::new());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !chain.insert(canonical.clone()) {
            internal::warn(&format!("Cyclic include detected: {}", canonical.display()));
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let result = Self::load_file_with_sources(path, chain);
        chain.remove(&canonical);
        result
    }

    fn load_file_with_sources(
        path: &Path,
        chain: &mut HashSet<PathBuf>,
    ) -> Result<toml::Table, crate::Error> {
        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut table: toml::Table = toml::from_str(&toml_content)?;

        for source_path in sources {
            internal::debug(&format!("Processing source: {source_path}"));
            let expanded = shellexpand::tilde(&source_path);
            let source_file = Path::new(expanded.as_ref());
            if source_file.exists() {
                let included = Self::load_with_sources(source_file, chain)?;
                merge_tables(&mut table, included);
            } else {
                internal::warn(&format!("Source file not found: {source_path}"));
            }
        }

        Ok(table)
    }

    /// `<config_dir>/picolog/picolog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("picolog").join("picolog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Strict form of [`Config::parse_level`].
    ///
    /// # Errors
    /// `general.level` is not a known level name.
    pub fn try_level(&self) -> Result<Level, crate::Error> {
        Ok(self.general.level.parse()?)
    }

    /// Config stores the level as a string for TOML ergonomics; this converts to the enum.
    /// An unknown name falls back to `Debug` so a typo never silences the logger.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.try_level().unwrap_or_else(|e| {
            internal::warn(&format!("{e}, falling back to debug"));
            Level::Debug
        })
    }
}

/// Folds an included table into `base` without overwriting existing keys, so
/// the including file's values take precedence. Nested tables merge key by key.
fn merge_tables(base: &mut toml::Table, other: toml::Table) {
    for (key, value) in other {
        match base.get_mut(&key) {
            Some(toml::Value::Table(existing)) => {
                if let toml::Value::Table(incoming) = value {
                    merge_tables(existing, incoming);
                }
            }
            Some(_) => {}
            None => {
                base.insert(key, value);
            }
        }
    }
}
