//! AI advisor configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI advisor configuration.
///
/// With no API key configured the application forces mock mode; the
/// `force_mock` flag keeps mock mode on even when a key is present.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key. Absent means mock mode.
    pub gemini_api_key: Option<String>,

    /// Force the deterministic mock advisor even with a key configured.
    #[serde(default)]
    pub force_mock: bool,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL for the Gemini API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a Gemini credential is configured.
    pub fn has_credential(&self) -> bool {
        self.gemini_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Whether the application should run with the mock advisor.
    pub fn mock_mode(&self) -> bool {
        self.force_mock || !self.has_credential()
    }

    /// Validate AI configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.model.is_empty() {
            return Err(ValidationError::MissingRequired("ai.model"));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            force_mock: false,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.force_mock);
    }

    #[test]
    fn test_missing_key_forces_mock_mode() {
        let config = AiConfig::default();
        assert!(!config.has_credential());
        assert!(config.mock_mode());
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        let config = AiConfig {
            gemini_api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.has_credential());
        assert!(config.mock_mode());
    }

    #[test]
    fn test_key_enables_live_mode() {
        let config = AiConfig {
            gemini_api_key: Some("AIza-test".to_string()),
            ..Default::default()
        };
        assert!(!config.mock_mode());
    }

    #[test]
    fn test_force_mock_overrides_key() {
        let config = AiConfig {
            gemini_api_key: Some("AIza-test".to_string()),
            force_mock: true,
            ..Default::default()
        };
        assert!(config.mock_mode());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = AiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }
}
