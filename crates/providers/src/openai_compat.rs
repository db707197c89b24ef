//! OpenAI-compatible provider implementation.
//!
//! Works with: OpenAI, OpenRouter, Ollama, vLLM, and any endpoint exposing an
//! OpenAI-compatible `/v1/chat/completions` route. Non-streaming only — the
//! engine makes a single bounded call per request and needs the whole reply
//! before it can build an envelope.

use async_trait::async_trait;
use oppchat_core::error::ProviderError;
use oppchat_core::message::{PromptTurn, Role};
use oppchat_core::provider::{GenerationProvider, GenerationRequest};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// An OpenAI-compatible generation provider.
pub struct OpenAiCompatProvider {
    name: String,
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiCompatProvider {
    /// Create a new OpenAI-compatible provider.
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            client,
        }
    }

    /// Create an OpenAI provider (convenience constructor).
    pub fn openai(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new("openai", "https://api.openai.com/v1", api_key, model)
    }

    /// Create an OpenRouter provider (convenience constructor).
    pub fn openrouter(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new("openrouter", "https://openrouter.ai/api/v1", api_key, model)
    }

    /// Convert prompt turns to OpenAI API format.
    fn to_api_messages(turns: &[PromptTurn]) -> Vec<ApiMessage> {
        turns
            .iter()
            .map(|t| ApiMessage {
                role: match t.role {
                    Role::User => "user".into(),
                    Role::Assistant => "assistant".into(),
                    Role::System => "system".into(),
                },
                content: t.content.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl GenerationProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);

        let mut body = serde_json::json!({
            "model": self.model,
            "messages": Self::to_api_messages(&request.turns),
            "stream": false,
        });

        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }

        debug!(provider = %self.name, model = %self.model, turns = request.turns.len(), "Sending generation request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(ProviderError::RateLimited {
                retry_after_secs: 5,
            });
        }

        if status == 401 || status == 403 {
            return Err(ProviderError::AuthenticationFailed(
                "Invalid API key or insufficient permissions".into(),
            ));
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Provider returned error");
            return Err(ProviderError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::MalformedResponse("No choices in response".into()))?;

        Ok(choice.message.content.unwrap_or_default())
    }
}

// --- OpenAI API types (internal) ---

#[derive(Debug, Serialize, Deserialize)]
struct ApiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ApiResponseMessage {
    #[serde(default)]
    content: Option<String>,
}
