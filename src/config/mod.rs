//! Application configuration.
//!
//! Settings live in the platform config directory and are loaded once at
//! startup. Command-line flags take precedence over stored values.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_NAME: &str = "code_breaker";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Start sessions in secret mode
    pub secret_mode: bool,
    /// Replacement for the built-in normal word list
    pub word_list: Option<String>,
    /// Replacement for the built-in secret word list
    pub secret_word_list: Option<String>,
    pub log_level: String,
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            secret_mode: false,
            word_list: None,
            secret_word_list: None,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// Values given on the command line; `None` defers to the stored config
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub secret: bool,
    pub word_list: Option<String>,
    pub secret_word_list: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

/// Effective settings after merging config and overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub secret_mode: bool,
    pub word_list: Option<PathBuf>,
    pub secret_word_list: Option<PathBuf>,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    #[must_use]
    pub fn resolve(config: AppConfig, overrides: Overrides) -> Self {
        Self {
            secret_mode: overrides.secret || config.secret_mode,
            word_list: overrides.word_list.or(config.word_list).map(PathBuf::from),
            secret_word_list: overrides
                .secret_word_list
                .or(config.secret_word_list)
                .map(PathBuf::from),
            log_level: overrides.log_level.unwrap_or(config.log_level),
            log_file: overrides.log_file.or(config.log_file).map(PathBuf::from),
        }
    }
}

/// Load the stored config, falling back to defaults if it cannot be read
#[must_use]
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Persist `cfg` to the platform config directory
///
/// # Errors
/// Returns `ConfyError` if the file cannot be serialized or written.
pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

/// Location of the stored config file
///
/// # Errors
/// Returns `ConfyError` if the platform config directory cannot be resolved.
pub fn config_path() -> Result<PathBuf, confy::ConfyError> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
}
