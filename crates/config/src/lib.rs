//! Configuration loading, validation, and management for OppChat.
//!
//! Loads configuration from `~/.oppchat/config.toml` with environment
//! variable overrides. Validates all settings at startup; the resulting
//! [`ChatbotConfig`] is read-only for the life of the process.
//!
//! Provider credentials being absent is a first-class, expected state: the
//! engine checks [`ChatbotConfig::provider_available`] and routes straight to
//! its deterministic fallback when it returns false.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.oppchat/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct ChatbotConfig {
    /// Number of prior history turns included in the generation prompt
    #[serde(default = "default_max_history_messages")]
    pub max_history_messages: usize,

    /// Token cap for a single generated response
    #[serde(default = "default_max_response_tokens")]
    pub max_response_tokens: u32,

    /// Upper bound on a single generation call, in seconds
    #[serde(default = "default_generation_timeout_secs")]
    pub generation_timeout_secs: u64,

    /// Generation provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
}

fn default_max_history_messages() -> usize {
    10
}
fn default_max_response_tokens() -> u32 {
    512
}
fn default_generation_timeout_secs() -> u64 {
    15
}

/// Settings for the external generation provider.
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key. `None` means the provider is unavailable — an expected
    /// state, not an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_api_url() -> String {
    "https://api.openai.com/v1".into()
}
fn default_model() -> String {
    "gpt-4o-mini".into()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            model: default_model(),
        }
    }
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish()
    }
}

impl std::fmt::Debug for ChatbotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatbotConfig")
            .field("max_history_messages", &self.max_history_messages)
            .field("max_response_tokens", &self.max_response_tokens)
            .field("generation_timeout_secs", &self.generation_timeout_secs)
            .field("provider", &self.provider)
            .finish()
    }
}

impl ChatbotConfig {
    /// Load configuration from the default path (~/.oppchat/config.toml).
    ///
    /// Also checks environment variables for the API key:
    /// - `OPPCHAT_API_KEY` (highest priority)
    /// - `OPENROUTER_API_KEY`
    /// - `OPENAI_API_KEY`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        // Environment variable overrides (highest priority)
        if config.provider.api_key.is_none() {
            config.provider.api_key = std::env::var("OPPCHAT_API_KEY")
                .ok()
                .or_else(|| std::env::var("OPENROUTER_API_KEY").ok())
                .or_else(|| std::env::var("OPENAI_API_KEY").ok());
        }

        if let Ok(url) = std::env::var("OPPCHAT_API_URL") {
            config.provider.api_url = url;
        }

        if let Ok(model) = std::env::var("OPPCHAT_MODEL") {
            config.provider.model = model;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".oppchat")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_history_messages == 0 {
            return Err(ConfigError::ValidationError(
                "max_history_messages must be at least 1".into(),
            ));
        }

        if self.max_response_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "max_response_tokens must be at least 1".into(),
            ));
        }

        if self.generation_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "generation_timeout_secs must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Whether the generation provider has a usable credential.
    pub fn provider_available(&self) -> bool {
        self.provider
            .api_key
            .as_ref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    /// Generate a default config TOML string (for first-run setup).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            max_history_messages: default_max_history_messages(),
            max_response_tokens: default_max_response_tokens(),
            generation_timeout_secs: default_generation_timeout_secs(),
            provider: ProviderConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ChatbotConfig::default();
        assert_eq!(config.max_history_messages, 10);
        assert_eq!(config.max_response_tokens, 512);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn provider_unavailable_by_default() {
        let config = ChatbotConfig::default();
        assert!(!config.provider_available());
    }

    #[test]
    fn blank_api_key_counts_as_unavailable() {
        let mut config = ChatbotConfig::default();
        config.provider.api_key = Some("   ".into());
        assert!(!config.provider_available());

        config.provider.api_key = Some("sk-test".into());
        assert!(config.provider_available());
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = ChatbotConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: ChatbotConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.max_history_messages, config.max_history_messages);
        assert_eq!(parsed.provider.model, config.provider.model);
    }

    #[test]
    fn zero_window_rejected() {
        let config = ChatbotConfig {
            max_history_messages: 0,
            ..ChatbotConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = ChatbotConfig {
            generation_timeout_secs: 0,
            ..ChatbotConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let result = ChatbotConfig::load_from(Path::new("/nonexistent/config.toml"));
        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.max_history_messages, 10);
    }

    #[test]
    fn partial_config_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
max_history_messages = 6

[provider]
api_key = "sk-test"
model = "gpt-4o"
"#,
        )
        .unwrap();

        let config = ChatbotConfig::load_from(&path).unwrap();
        assert_eq!(config.max_history_messages, 6);
        assert_eq!(config.max_response_tokens, 512);
        assert_eq!(config.provider.model, "gpt-4o");
        assert!(config.provider_available());
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let mut config = ChatbotConfig::default();
        config.provider.api_key = Some("sk-secret-value".into());
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret-value"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn default_toml_generation() {
        let toml_str = ChatbotConfig::default_toml();
        assert!(toml_str.contains("max_history_messages"));
        assert!(toml_str.contains("gpt-4o-mini"));
    }
}
