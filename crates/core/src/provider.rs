//! GenerationProvider trait — the abstraction over the external generative
//! capability.
//!
//! A provider knows how to turn a role-tagged prompt sequence into generated
//! text, or fail trying. The engine makes exactly one call per request and
//! treats any non-success outcome as a signal to fall back; it does not
//! distinguish authentication failure from network failure from quota
//! exhaustion.

use crate::error::ProviderError;
use crate::message::PromptTurn;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Configuration for a single generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The prompt sequence: persona turn, bounded history window, current
    /// user turn
    pub turns: Vec<PromptTurn>,

    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Create a request from a prompt sequence with no token cap.
    pub fn new(turns: Vec<PromptTurn>) -> Self {
        Self {
            turns,
            max_tokens: None,
        }
    }

    /// Cap the response length.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }
}

/// The generation provider trait.
///
/// Implemented by real backends (OpenAI-compatible endpoints) and by test
/// mocks. The orchestrator calls `generate()` without knowing which
/// implementation is behind the trait object.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// A human-readable name for this provider (e.g., "openai", "openrouter").
    fn name(&self) -> &str;

    /// Send a prompt sequence and get generated text back.
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::PromptTurn;

    #[test]
    fn request_defaults() {
        let req = GenerationRequest::new(vec![PromptTurn::user("hello")]);
        assert!(req.max_tokens.is_none());
        assert_eq!(req.turns.len(), 1);
    }

    #[test]
    fn request_with_token_cap() {
        let req = GenerationRequest::new(vec![]).with_max_tokens(512);
        assert_eq!(req.max_tokens, Some(512));
    }

    #[test]
    fn request_serialization_skips_absent_cap() {
        let req = GenerationRequest::new(vec![PromptTurn::system("persona")]);
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("max_tokens"));
        assert!(json.contains("system"));
    }
}
