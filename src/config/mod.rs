//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `SKILLGUARD_`
//! prefix; nested values use `__` as separator (e.g.
//! `SKILLGUARD_AI__GEMINI_API_KEY`).
//!
//! # Example
//!
//! ```no_run
//! use skillguard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! if config.ai.mock_mode() {
//!     println!("Running with the deterministic mock advisor");
//! }
//! ```

mod ai;
mod error;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// AI advisor configuration (Gemini credential, mock switch).
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// environment variables with the `SKILLGUARD` prefix.
    pub fn load() -> Result<Self, ConfigError> {
        // Ignore a missing .env file; only development uses one.
        let _ = dotenvy::dotenv();

        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("SKILLGUARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate the loaded configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_and_mock() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.ai.mock_mode());
    }
}
