//! The deterministic fallback responder.
//!
//! Used when no FAQ rule matched and the generation provider is unavailable
//! or failed. No network access anywhere in this module; every branch returns
//! a fully-formed envelope, so the engine's "always answer" contract holds
//! even with everything external down.

use crate::classify::SelfReferenceLexicon;
use crate::faq::RuleTable;
use oppchat_core::{Relevance, ResponseEnvelope};

/// Fixed explanation returned for self-referential questions on this path.
const ARCHITECTURE_REPLY: &str = "I'm the platform's built-in assistant. I answer from a \
    curated FAQ list first, then check whether your question is about the platform, and for \
    open questions I consult an AI language model. When that isn't available — like right now — \
    I answer from built-in guidance instead.";

/// Generic guidance when nothing more specific applies.
const GENERIC_REPLY: &str = "I couldn't find a specific answer for that. I can help with \
    opportunities, applications, comments, and profiles on the platform — try asking about one \
    of those, or browse the View Opportunities page.";

/// Produce a deterministic response for a message.
///
/// Check order: FAQ re-match, self-reference, keyword-pair heuristics,
/// generic default. The FAQ re-match takes precedence so a rule hit behaves
/// identically whether or not the provider was reachable.
pub fn respond(
    message: &str,
    rules: &RuleTable,
    self_ref: &SelfReferenceLexicon,
) -> ResponseEnvelope {
    if let Some(rule) = rules.match_rule(message) {
        return rule.to_envelope();
    }

    if self_ref.is_self_referential(message) {
        return ResponseEnvelope::new(
            ARCHITECTURE_REPLY,
            "chatbot-meta",
            Relevance::High,
            vec![
                "What can you help me with?".into(),
                "How do I apply for an opportunity?".into(),
            ],
        );
    }

    let lowercased = message.to_lowercase();

    if lowercased.contains("application")
        && ["where", "see", "track"].iter().any(|w| lowercased.contains(w))
    {
        return ResponseEnvelope::new(
            "You can track every application from the My Applications tab on your dashboard; \
             each entry shows its current status and any response from the poster.",
            "applications",
            Relevance::Medium,
            vec![
                "Can I withdraw an application?".into(),
                "How do I apply for an opportunity?".into(),
            ],
        );
    }

    if lowercased.contains("comment")
        && ["public", "private", "difference"]
            .iter()
            .any(|w| lowercased.contains(w))
    {
        return ResponseEnvelope::new(
            "Public comments are visible to everyone who can see the posting; private comments \
             are only visible to you and the poster. You choose the visibility when you write \
             the comment.",
            "comments",
            Relevance::Medium,
            vec![
                "Who can see my comments?".into(),
                "Can I edit a comment after posting it?".into(),
            ],
        );
    }

    if lowercased.contains("comment") || lowercased.contains("discussion") {
        return ResponseEnvelope::new(
            "Every opportunity has a comment thread underneath it — use it to ask the poster \
             questions before applying. You can comment publicly or privately.",
            "comments",
            Relevance::Medium,
            vec![
                "What's the difference between public and private comments?".into(),
                "How do I apply for an opportunity?".into(),
            ],
        );
    }

    ResponseEnvelope::new(
        GENERIC_REPLY,
        "fallback",
        Relevance::Low,
        vec![
            "How do I apply for an opportunity?".into(),
            "How do I update my profile?".into(),
            "What can you help me with?".into(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::SelfReferenceLexicon;
    use crate::faq::RuleTable;

    fn fixtures() -> (RuleTable, SelfReferenceLexicon) {
        (RuleTable::default(), SelfReferenceLexicon::default())
    }

    #[test]
    fn faq_rematch_takes_precedence() {
        let (rules, self_ref) = fixtures();
        let env = respond("How do I apply for an opportunity?", &rules, &self_ref);
        assert_eq!(env.topic, "applications");
        assert_eq!(env.relevance, Relevance::High);
        assert!(env.reply.contains("View Opportunities"));
    }

    #[test]
    fn self_reference_gets_architecture_explanation() {
        let (rules, self_ref) = fixtures();
        let env = respond("how does this chatbot work?", &rules, &self_ref);
        assert_eq!(env.topic, "chatbot-meta");
        assert_eq!(env.relevance, Relevance::High);
        assert!(env.reply.contains("FAQ"));
    }

    #[test]
    fn application_tracking_heuristic() {
        let (rules, self_ref) = fixtures();
        let env = respond("where can I see my application status", &rules, &self_ref);
        assert_eq!(env.topic, "applications");
        assert_eq!(env.relevance, Relevance::Medium);
        assert!(env.reply.contains("My Applications"));
    }

    #[test]
    fn comment_visibility_heuristic() {
        let (rules, self_ref) = fixtures();
        let env = respond(
            "what is the difference between public and private comments",
            &rules,
            &self_ref,
        );
        assert_eq!(env.topic, "comments");
        assert!(env.reply.contains("visible"));
    }

    #[test]
    fn bare_comment_keyword_gets_generic_comment_guidance() {
        let (rules, self_ref) = fixtures();
        let env = respond("tell me about discussions", &rules, &self_ref);
        assert_eq!(env.topic, "comments");
        assert!(env.reply.contains("comment thread"));
    }

    #[test]
    fn default_branch_is_low_relevance_fallback() {
        let (rules, self_ref) = fixtures();
        let env = respond("what's the weather today?", &rules, &self_ref);
        assert_eq!(env.topic, "fallback");
        assert_eq!(env.relevance, Relevance::Low);
    }

    #[test]
    fn every_branch_is_well_formed() {
        let (rules, self_ref) = fixtures();
        for msg in [
            "How do I apply for an opportunity?",
            "are you an ai?",
            "where do I see my application",
            "public or private comment?",
            "comment",
            "completely unrelated question",
        ] {
            let env = respond(msg, &rules, &self_ref);
            assert!(env.well_formed(), "branch for {msg:?} not well-formed");
        }
    }
}
