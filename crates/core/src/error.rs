//! Error types for the OppChat domain.
//!
//! Uses `thiserror` for ergonomic error definitions. Provider errors are
//! clonable values: the orchestrator pattern-matches on them to choose the
//! fallback path rather than letting them propagate to the caller.

use thiserror::Error;

/// Failures of the external generation call.
///
/// The engine treats every variant uniformly as "fall back"; the taxonomy
/// exists for logging and tests, not for differentiated recovery.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
