//! The generation orchestrator — the state machine that sequences the FAQ
//! matcher, classifiers, window builder, and fallback responder around the
//! one point of contact with the external generation provider.
//!
//! State order: FAQ check → provider availability → self-reference → domain
//! gate → generate → fallback. Every reachable state has a defined terminal
//! envelope; no error from the provider ever reaches the caller.

use crate::classify::{DomainLexicon, SelfReferenceLexicon};
use crate::faq::RuleTable;
use crate::{fallback, suggest, window};
use oppchat_config::ChatbotConfig;
use oppchat_core::{
    ConversationMessage, GenerationProvider, GenerationRequest, ProviderError, Relevance,
    ResponseEnvelope,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Fixed decline for questions outside the platform's domain.
const OUT_OF_DOMAIN_REPLY: &str = "I can only help with questions about the opportunities \
    platform — jobs, internships, projects, applications, comments, and profiles. Could you \
    ask me something about those?";

/// Substituted when the provider succeeds but returns empty text.
const COULD_NOT_GENERATE_REPLY: &str = "I couldn't come up with an answer for that just now — \
    could you rephrase the question?";

/// Which terminal state produced an envelope. Logged, never surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    FaqResponse,
    OutOfDomain,
    AiGenerated,
    Fallback,
}

impl RouteOutcome {
    fn as_str(self) -> &'static str {
        match self {
            Self::FaqResponse => "faq",
            Self::OutOfDomain => "out-of-domain",
            Self::AiGenerated => "ai-generated",
            Self::Fallback => "fallback",
        }
    }
}

/// The assistant routing engine.
///
/// Holds only read-only state: configuration, the rule table, the two
/// lexicons, and an optional provider handle. Requests are independent, so a
/// single engine can serve any number of concurrent conversations.
pub struct ChatEngine {
    config: ChatbotConfig,
    rules: RuleTable,
    domain: DomainLexicon,
    self_ref: SelfReferenceLexicon,
    provider: Option<Arc<dyn GenerationProvider>>,
}

impl ChatEngine {
    /// Create an engine with the default rule table and lexicons.
    ///
    /// `provider` is `None` when no credential is configured; the engine then
    /// answers every non-FAQ question from the deterministic fallback.
    pub fn new(config: ChatbotConfig, provider: Option<Arc<dyn GenerationProvider>>) -> Self {
        Self {
            config,
            rules: RuleTable::default(),
            domain: DomainLexicon::default(),
            self_ref: SelfReferenceLexicon::default(),
            provider,
        }
    }

    /// Create an engine from configuration alone, building the provider from
    /// the configured credentials (if any).
    pub fn from_config(config: ChatbotConfig) -> Self {
        let provider = oppchat_providers::build_from_config(&config);
        Self::new(config, provider)
    }

    /// Replace the rule table.
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the domain lexicon.
    pub fn with_domain_lexicon(mut self, domain: DomainLexicon) -> Self {
        self.domain = domain;
        self
    }

    /// Replace the self-reference lexicon.
    pub fn with_self_reference_lexicon(mut self, self_ref: SelfReferenceLexicon) -> Self {
        self.self_ref = self_ref;
        self
    }

    /// Answer one message given the caller's history.
    ///
    /// Infallible at the signature level: every path, including provider
    /// failure and blank input, terminates in a well-formed envelope.
    pub async fn respond(
        &self,
        message: &str,
        history: &[ConversationMessage],
    ) -> ResponseEnvelope {
        let message = message.trim();

        // The boundary layer rejects empty input before it gets here; if it
        // arrives anyway, degrade to the generic fallback rather than fail.
        if message.is_empty() {
            warn!("Empty message reached the engine, returning generic fallback");
            return self.finish(RouteOutcome::Fallback, self.fallback_envelope(message));
        }

        // FAQ_CHECK — curated answers win outright.
        if let Some(rule) = self.rules.match_rule(message) {
            debug!(rule = %rule.id, topic = %rule.topic, "FAQ rule matched");
            return self.finish(RouteOutcome::FaqResponse, rule.to_envelope());
        }

        // PROVIDER_AVAILABILITY_CHECK — no credential, no generation; skip
        // the domain gate entirely and answer deterministically.
        let Some(provider) = &self.provider else {
            debug!("No generation provider configured");
            return self.finish(RouteOutcome::Fallback, self.fallback_envelope(message));
        };

        // SELF_REFERENCE_CHECK / DOMAIN_GATE — questions about the assistant
        // itself bypass the gate; everything else must be on-topic.
        if !self.self_ref.is_self_referential(message) && !self.domain.is_relevant(message) {
            return self.finish(RouteOutcome::OutOfDomain, Self::out_of_domain_envelope());
        }

        // GENERATE — one bounded attempt, no retry. Any failure falls back.
        let turns = window::build_prompt(history, message, self.config.max_history_messages);
        let request = GenerationRequest::new(turns).with_max_tokens(self.config.max_response_tokens);
        let timeout = Duration::from_secs(self.config.generation_timeout_secs);

        match tokio::time::timeout(timeout, provider.generate(request)).await {
            Ok(Ok(text)) => {
                let reply = text.trim();
                let reply = if reply.is_empty() {
                    COULD_NOT_GENERATE_REPLY
                } else {
                    reply
                };
                let envelope = ResponseEnvelope::new(
                    reply,
                    "ai-generated",
                    Relevance::High,
                    suggest::suggest(message),
                );
                self.finish(RouteOutcome::AiGenerated, envelope)
            }
            Ok(Err(e)) => {
                warn!(provider = %provider.name(), error = %e, "Generation failed, using fallback");
                self.finish(RouteOutcome::Fallback, self.fallback_envelope(message))
            }
            Err(_) => {
                let e = ProviderError::Timeout(format!(
                    "generation exceeded {}s",
                    self.config.generation_timeout_secs
                ));
                warn!(provider = %provider.name(), error = %e, "Generation timed out, using fallback");
                self.finish(RouteOutcome::Fallback, self.fallback_envelope(message))
            }
        }
    }

    fn fallback_envelope(&self, message: &str) -> ResponseEnvelope {
        fallback::respond(message, &self.rules, &self.self_ref)
    }

    fn out_of_domain_envelope() -> ResponseEnvelope {
        ResponseEnvelope::new(
            OUT_OF_DOMAIN_REPLY,
            "out-of-domain",
            Relevance::None,
            vec![
                "How do I apply for an opportunity?".into(),
                "How do I update my profile?".into(),
                "What can you help me with?".into(),
            ],
        )
    }

    fn finish(&self, outcome: RouteOutcome, envelope: ResponseEnvelope) -> ResponseEnvelope {
        debug!(
            outcome = outcome.as_str(),
            topic = %envelope.topic,
            "Routed message to terminal state"
        );
        envelope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use oppchat_core::error::ProviderError;
    use std::sync::Mutex;

    /// A mock provider that returns fixed text.
    struct CannedProvider {
        text: String,
        calls: Mutex<usize>,
    }

    impl CannedProvider {
        fn new(text: &str) -> Self {
            Self {
                text: text.into(),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl GenerationProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        async fn generate(
            &self,
            _request: GenerationRequest,
        ) -> std::result::Result<String, ProviderError> {
            *self.calls.lock().unwrap() += 1;
            Ok(self.text.clone())
        }
    }

    /// A mock provider that always fails.
    struct FailingProvider;

    #[async_trait]
    impl GenerationProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn generate(
            &self,
            _request: GenerationRequest,
        ) -> std::result::Result<String, ProviderError> {
            Err(ProviderError::Network("connection refused".into()))
        }
    }

    /// A mock provider that hangs forever (for timeout testing).
    struct HangingProvider;

    #[async_trait]
    impl GenerationProvider for HangingProvider {
        fn name(&self) -> &str {
            "hanging"
        }

        async fn generate(
            &self,
            _request: GenerationRequest,
        ) -> std::result::Result<String, ProviderError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            unreachable!()
        }
    }

    fn engine_with(provider: Option<Arc<dyn GenerationProvider>>) -> ChatEngine {
        ChatEngine::new(ChatbotConfig::default(), provider)
    }

    #[tokio::test]
    async fn faq_match_skips_provider_entirely() {
        let provider = Arc::new(CannedProvider::new("should not be used"));
        let engine = engine_with(Some(provider.clone()));

        let env = engine
            .respond("How do I apply for an opportunity?", &[])
            .await;
        assert_eq!(env.topic, "applications");
        assert_eq!(env.relevance, Relevance::High);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn no_provider_means_fallback_not_out_of_domain() {
        // Provider-availability check runs before the domain gate, so even an
        // off-topic question gets the fallback envelope, not the decline.
        let engine = engine_with(None);
        let env = engine.respond("what's the weather today?", &[]).await;
        assert_eq!(env.topic, "fallback");
        assert_eq!(env.relevance, Relevance::Low);
        assert!(env.well_formed());
    }

    #[tokio::test]
    async fn off_topic_question_declined_when_provider_present() {
        let engine = engine_with(Some(Arc::new(CannedProvider::new("text"))));
        let env = engine.respond("what's the weather today?", &[]).await;
        assert_eq!(env.topic, "out-of-domain");
        assert_eq!(env.relevance, Relevance::None);
    }

    #[tokio::test]
    async fn self_reference_bypasses_domain_gate() {
        let provider = Arc::new(CannedProvider::new("I route questions through rules."));
        let engine = engine_with(Some(provider.clone()));

        let env = engine.respond("how were you built?", &[]).await;
        assert_ne!(env.topic, "out-of-domain");
        assert_eq!(env.topic, "ai-generated");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn generation_success_trims_and_labels() {
        let provider = Arc::new(CannedProvider::new("  Generated answer.  \n"));
        let engine = engine_with(Some(provider));

        let env = engine.respond("when is the internship deadline?", &[]).await;
        assert_eq!(env.reply, "Generated answer.");
        assert_eq!(env.topic, "ai-generated");
        assert_eq!(env.relevance, Relevance::High);
        assert!(!env.suggestions.is_empty());
    }

    #[tokio::test]
    async fn empty_generation_substitutes_fixed_sentence() {
        let provider = Arc::new(CannedProvider::new("   "));
        let engine = engine_with(Some(provider));

        let env = engine.respond("when is the internship deadline?", &[]).await;
        assert_eq!(env.topic, "ai-generated");
        assert!(env.reply.contains("rephrase"));
        assert!(env.well_formed());
    }

    #[tokio::test]
    async fn provider_failure_falls_back() {
        let engine = engine_with(Some(Arc::new(FailingProvider)));
        let env = engine.respond("when is the internship deadline?", &[]).await;
        assert_eq!(env.topic, "fallback");
        assert!(env.well_formed());
    }

    #[tokio::test]
    async fn provider_timeout_falls_back() {
        let config = ChatbotConfig {
            generation_timeout_secs: 1,
            ..ChatbotConfig::default()
        };
        let engine = ChatEngine::new(config, Some(Arc::new(HangingProvider)));

        let env = engine.respond("when is the internship deadline?", &[]).await;
        assert_eq!(env.topic, "fallback");
        assert!(env.well_formed());
    }

    #[tokio::test]
    async fn blank_input_degrades_to_generic_envelope() {
        let engine = engine_with(Some(Arc::new(CannedProvider::new("text"))));
        let env = engine.respond("   ", &[]).await;
        assert_eq!(env.topic, "fallback");
        assert!(env.well_formed());
    }

    #[tokio::test]
    async fn every_terminal_state_is_well_formed() {
        let with_provider = engine_with(Some(Arc::new(CannedProvider::new("answer"))));
        let without_provider = engine_with(None);
        let failing = engine_with(Some(Arc::new(FailingProvider)));

        for msg in [
            "How do I apply for an opportunity?",
            "what's the weather today?",
            "how does this chatbot work?",
            "when is the internship deadline?",
        ] {
            for engine in [&with_provider, &without_provider, &failing] {
                let env = engine.respond(msg, &[]).await;
                assert!(env.well_formed(), "not well-formed for {msg:?}");
            }
        }
    }
}
