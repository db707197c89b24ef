//! The response envelope — the only externally observable output shape.
//!
//! Every code path through the engine terminates in a `ResponseEnvelope`.
//! There is no separate error shape: even the "something went wrong" case is
//! a well-formed envelope with a user-presentable reply, so the consuming UI
//! never needs special-case error rendering.

use serde::{Deserialize, Serialize};

/// Maximum number of follow-up suggestions an envelope may carry.
pub const MAX_SUGGESTIONS: usize = 3;

/// Coarse confidence label attached to every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    /// The question is outside the platform's domain
    None,
    /// Generic fallback guidance
    Low,
    /// Keyword-heuristic guidance
    Medium,
    /// Curated or generated answer to an on-topic question
    High,
}

/// The structured response returned for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// User-presentable reply text (always non-empty)
    pub reply: String,

    /// Topic label for the terminal state that produced this response
    pub topic: String,

    /// Confidence tier
    pub relevance: Relevance,

    /// Ordered follow-up prompts (at most [`MAX_SUGGESTIONS`], each non-empty)
    pub suggestions: Vec<String>,
}

impl ResponseEnvelope {
    /// Create an envelope, truncating suggestions to [`MAX_SUGGESTIONS`] and
    /// dropping empty ones.
    pub fn new(
        reply: impl Into<String>,
        topic: impl Into<String>,
        relevance: Relevance,
        suggestions: Vec<String>,
    ) -> Self {
        let suggestions = suggestions
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .take(MAX_SUGGESTIONS)
            .collect();
        Self {
            reply: reply.into(),
            topic: topic.into(),
            relevance,
            suggestions,
        }
    }

    /// Structural well-formedness: non-empty reply, bounded non-empty
    /// suggestions. The invariant every terminal state must uphold.
    pub fn well_formed(&self) -> bool {
        !self.reply.trim().is_empty()
            && self.suggestions.len() <= MAX_SUGGESTIONS
            && self.suggestions.iter().all(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_caps_suggestions() {
        let env = ResponseEnvelope::new(
            "reply",
            "applications",
            Relevance::High,
            vec![
                "one".into(),
                "two".into(),
                "three".into(),
                "four".into(),
            ],
        );
        assert_eq!(env.suggestions.len(), MAX_SUGGESTIONS);
        assert!(env.well_formed());
    }

    #[test]
    fn envelope_drops_empty_suggestions() {
        let env = ResponseEnvelope::new(
            "reply",
            "fallback",
            Relevance::Low,
            vec!["".into(), "  ".into(), "keep me".into()],
        );
        assert_eq!(env.suggestions, vec!["keep me".to_string()]);
    }

    #[test]
    fn empty_reply_is_not_well_formed() {
        let env = ResponseEnvelope::new("  ", "fallback", Relevance::Low, vec![]);
        assert!(!env.well_formed());
    }

    #[test]
    fn relevance_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Relevance::None).unwrap(), "\"none\"");
        assert_eq!(serde_json::to_string(&Relevance::High).unwrap(), "\"high\"");
        let back: Relevance = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(back, Relevance::Medium);
    }

    #[test]
    fn envelope_serialization_roundtrip() {
        let env = ResponseEnvelope::new(
            "You can track applications from your dashboard.",
            "applications",
            Relevance::Medium,
            vec!["How do I apply?".into()],
        );
        let json = serde_json::to_string(&env).unwrap();
        assert!(json.contains("\"relevance\":\"medium\""));
        let back: ResponseEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(back, env);
    }
}
