//! Application configuration
//!
//! Persisted with confy under the `fleetlog` app name.

use serde::{Deserialize, Serialize};

use super::ConfigError;

const APP_NAME: &str = "fleetlog";
const CONFIG_NAME: &str = "config";

/// Largest log file the reader will load.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 32 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub log_directory: String,
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
    #[serde(default)]
    pub pretty_json: bool,
}

fn default_max_file_bytes() -> u64 {
    DEFAULT_MAX_FILE_BYTES
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_log_directory(String::new())
    }
}

impl AppConfig {
    pub fn with_log_directory(log_directory: String) -> Self {
        Self {
            log_directory,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            pretty_json: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Defaults
// ─────────────────────────────────────────────────────────────────────────────

fn default_log_directory() -> String {
    dirs::document_dir()
        .map(|p| p.join("EVE").join("logs").join("Gamelogs"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_default()
}

// ─────────────────────────────────────────────────────────────────────────────
// AppConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for AppConfig persistence
pub trait AppConfigExt: Sized {
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn load_with_defaults() -> Self;
    fn save(&self) -> Result<(), ConfigError>;
}

impl AppConfigExt for AppConfig {
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default configuration");
            Self::load_with_defaults()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        let mut config: AppConfig = confy::load(APP_NAME, CONFIG_NAME)?;
        if config.log_directory.is_empty() {
            config.log_directory = default_log_directory();
        }
        Ok(config)
    }

    /// Load with platform-specific defaults (used when no config file exists)
    fn load_with_defaults() -> Self {
        AppConfig::with_log_directory(default_log_directory())
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }
}
