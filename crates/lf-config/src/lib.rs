//! # lf-config
//!
//! Layered configuration loading for the lost & found board using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LOSTFOUND_*` prefix, `__` as separator)
//! 2. Project-level `.lostfound/config.toml`
//! 3. User-level `~/.config/lostfound/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LOSTFOUND_ADMIN__PASSWORD` -> `admin.password`,
//! `LOSTFOUND_STORAGE__DIR` -> `storage.dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lf_config::BoardConfig;
//!
//! let config = BoardConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! println!("data lives in {}", config.storage.dir.display());
//! ```

mod admin;
mod error;
mod general;
mod storage;

pub use admin::AdminConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".lostfound/config.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "LOSTFOUND_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl BoardConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer more providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values the board cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.admin.password.is_empty() {
            return Err(invalid("admin.password", "must not be empty"));
        }
        if self.general.default_limit == 0 {
            return Err(invalid("general.default_limit", "must be at least 1"));
        }
        if self.general.photo_max_bytes == 0 {
            return Err(invalid("general.photo_max_bytes", "must be at least 1"));
        }
        if self.storage.dir.as_os_str().is_empty() {
            return Err(invalid("storage.dir", "must not be empty"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lostfound").join("config.toml"))
    }

    /// Load `.env` from the current directory or its ancestors. Silently does
    /// nothing if none is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage.dir, PathBuf::from(".lostfound/data"));
        assert!(config.admin.uses_default_password());
    }

    #[test]
    fn empty_password_is_rejected() {
        let mut config = BoardConfig::default();
        config.admin.password.clear();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "admin.password"
        ));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut config = BoardConfig::default();
        config.general.default_limit = 0;
        assert!(config.validate().is_err());
    }
}
