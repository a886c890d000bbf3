//! # desk-config
//!
//! Layered configuration loading for StudyDesk using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DESK_*` prefix, `__` as separator)
//! 2. `GEMINI_API_KEY`, then `API_KEY`, for the Gemini credential only
//! 3. Project-level `.desk/config.toml`
//! 4. User-level `~/.config/studydesk/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DESK_GEMINI__API_KEY` -> `gemini.api_key`,
//! `DESK_GENERAL__DEFAULT_TAB` -> `general.default_tab`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use desk_config::DeskConfig;
//!
//! let config = DeskConfig::load_with_dotenv().expect("config");
//! if !config.gemini.is_configured() {
//!     eprintln!("AI features will answer with a fallback message");
//! }
//! ```

mod error;
mod gemini;
mod general;

pub use error::ConfigError;
pub use gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Conventional credential variables, lowest priority first.
const CREDENTIAL_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl DeskConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (if present) before building
    /// the figment. This is the typical entry point for the CLI.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".desk/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Conventional credential variables
        for var in CREDENTIAL_VARS {
            figment = figment.merge(
                Env::raw()
                    .only(&[var])
                    .map(|_| "gemini.api_key".into()),
            );
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("DESK_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("studydesk").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.gemini.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "gemini.model".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.gemini.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "gemini.timeout_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = DeskConfig::default();
        assert!(!config.gemini.is_configured());
        assert!(config.general.seed_samples);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = DeskConfig::default();
        config.gemini.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("gemini.timeout_secs"));
    }
}
