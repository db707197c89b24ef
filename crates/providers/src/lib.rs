//! Generation provider implementations for OppChat.
//!
//! All providers implement the `oppchat_core::GenerationProvider` trait.
//! [`build_from_config`] turns validated configuration into a provider
//! handle — or `None` when no credential is configured, which the engine
//! treats as the expected provider-unavailable state rather than an error.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatProvider;

use oppchat_config::ChatbotConfig;
use oppchat_core::GenerationProvider;
use std::sync::Arc;

/// Build the generation provider from configuration.
///
/// Returns `None` when no API key is configured. The orchestrator
/// short-circuits to its deterministic fallback in that case, so credential
/// absence never surfaces as a failure.
pub fn build_from_config(config: &ChatbotConfig) -> Option<Arc<dyn GenerationProvider>> {
    let api_key = config.provider.api_key.as_ref()?;
    if api_key.trim().is_empty() {
        return None;
    }

    tracing::debug!(
        api_url = %config.provider.api_url,
        model = %config.provider.model,
        "Building generation provider from config"
    );

    Some(Arc::new(OpenAiCompatProvider::new(
        "openai-compat",
        &config.provider.api_url,
        api_key,
        &config.provider.model,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_api_key_means_no_provider() {
        let config = ChatbotConfig::default();
        assert!(build_from_config(&config).is_none());
    }

    #[test]
    fn blank_api_key_means_no_provider() {
        let mut config = ChatbotConfig::default();
        config.provider.api_key = Some("  ".into());
        assert!(build_from_config(&config).is_none());
    }

    #[test]
    fn api_key_yields_provider() {
        let mut config = ChatbotConfig::default();
        config.provider.api_key = Some("sk-test".into());
        let provider = build_from_config(&config).unwrap();
        assert_eq!(provider.name(), "openai-compat");
    }
}
