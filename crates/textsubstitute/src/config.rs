//! Configuration management for textsubstitute.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::borrow::Cow;
use std::path::PathBuf;

use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::format::AllowedFormats;
use crate::substitute::ConfigProvider;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "textsubstitute";

/// Environment variable overrides and the setting each one replaces.
///
/// Values are taken verbatim: no trimming and no parsing into numbers or
/// arrays, so `007` stays `007`.
const ENV_OVERRIDES: [(&str, &str); 3] = [
    ("TEXTSUBSTITUTE_FILTER_SEARCHTERM", "filter.searchterm"),
    ("TEXTSUBSTITUTE_FILTER_SUBSTITUTETERM", "filter.substituteterm"),
    ("TEXTSUBSTITUTE_FILTER_FORMATS", "filter.formats"),
];

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `TEXTSUBSTITUTE_`)
/// 2. TOML config file at `~/.config/textsubstitute/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Substitution filter settings.
    pub filter: FilterSettings,
}

/// The three stored filter settings, kept as raw strings.
///
/// Field names match the setting keys, so the TOML table reads:
///
/// ```toml
/// [filter]
/// searchterm = "Moodle"
/// substituteterm = "Workplace"
/// formats = "1,4,0,2"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// The old term to replace. Empty disables the filter.
    pub searchterm: String,
    /// The new term to substitute the old term with.
    pub substituteterm: String,
    /// Comma-joined format identifiers the filter applies to.
    pub formats: String,
}

impl ConfigProvider for FilterSettings {
    fn search_term(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.searchterm)
    }

    fn substitute_term(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.substituteterm)
    }

    fn formats(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.formats)
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `TEXTSUBSTITUTE_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// Unrecognised format entries are not rejected here; the filter ignores
    /// them. Use [`Config::validate`] to report them.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file));

        for (var, key) in ENV_OVERRIDES {
            match std::env::var(var) {
                Ok(raw) => figment = figment.merge(Serialized::default(key, raw)),
                Err(std::env::VarError::NotPresent) => {}
                Err(std::env::VarError::NotUnicode(_)) => {
                    warn!(var, "Ignoring environment override that is not valid UTF-8");
                }
            }
        }

        let config: Config = figment.extract()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `formats` contains entries that name no known format.
    pub fn validate(&self) -> Result<()> {
        let unknown = AllowedFormats::unrecognised(&self.filter.formats);
        if !unknown.is_empty() {
            let listed = unknown
                .iter()
                .map(|entry| format!("'{entry}'"))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(Error::config_validation(format!(
                "formats contains unrecognised entries: {listed}"
            )));
        }

        Ok(())
    }

    /// The parsed allowed-formats set.
    #[must_use]
    pub fn allowed_formats(&self) -> AllowedFormats {
        AllowedFormats::parse(&self.filter.formats)
    }
}
