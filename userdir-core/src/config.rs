//! Configuration management
//!
//! Settings are read from `settings.json` in the data directory:
//! ```json
//! {
//!   "directory": { "minimumAge": 18 },
//!   "logging": { "level": "info", "format": "pretty" }
//! }
//! ```
//! Every field is optional. `USERDIR_MINIMUM_AGE` and `USERDIR_LOG` override
//! the file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::domain::MINIMUM_AGE;

pub const SETTINGS_FILE: &str = "settings.json";
pub const MINIMUM_AGE_ENV: &str = "USERDIR_MINIMUM_AGE";
pub const LOG_LEVEL_ENV: &str = "USERDIR_LOG";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    directory: DirectorySettings,
    #[serde(default)]
    logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DirectorySettings {
    #[serde(default)]
    minimum_age: Option<i64>,
}

/// Logging settings consumed by the CLI when installing its subscriber
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "userdir_core=debug"
    #[serde(default)]
    pub level: Option<String>,
    /// "pretty", "compact" or "json"
    #[serde(default)]
    pub format: Option<String>,
}

/// userdir configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub minimum_age: i64,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            minimum_age: MINIMUM_AGE,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load config from the data directory, applying environment overrides
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::load_with_env(data_dir, |key| std::env::var(key).ok())
    }

    /// Load config with a custom environment lookup
    pub fn load_with_env<F>(data_dir: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings_path = data_dir.join(SETTINGS_FILE);

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content)?
        } else {
            SettingsFile::default()
        };

        let minimum_age = match env(MINIMUM_AGE_ENV) {
            Some(value) => value.trim().parse::<i64>().map_err(|_| {
                Error::config(format!("{} must be an integer, got {:?}", MINIMUM_AGE_ENV, value))
            })?,
            None => raw.directory.minimum_age.unwrap_or(MINIMUM_AGE),
        };

        check_minimum_age(minimum_age)?;

        let mut logging = raw.logging;
        if let Some(level) = env(LOG_LEVEL_ENV) {
            logging.level = Some(level);
        }

        Ok(Self {
            minimum_age,
            logging,
        })
    }

    /// Save config to the data directory, which must already exist
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        check_minimum_age(self.minimum_age)?;

        let settings = SettingsFile {
            directory: DirectorySettings {
                minimum_age: Some(self.minimum_age),
            },
            logging: self.logging.clone(),
        };

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(data_dir.join(SETTINGS_FILE), content)?;
        Ok(())
    }
}

/// The configured floor may only be raised above the default
fn check_minimum_age(minimum_age: i64) -> Result<()> {
    if minimum_age < MINIMUM_AGE {
        return Err(Error::config(format!(
            "minimum age cannot be lower than {} (got {})",
            MINIMUM_AGE, minimum_age
        )));
    }
    Ok(())
}
