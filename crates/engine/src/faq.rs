//! The FAQ rule table and matcher.
//!
//! An ordered, immutable list of curated question→answer rules, checked
//! before anything else the engine does. Table order is the match-priority
//! order: the first rule whose matcher fires wins, so ties are impossible.

use oppchat_core::{Relevance, ResponseEnvelope};

/// How a rule decides whether it applies to a message.
///
/// A tagged union rather than duck typing: both variants sit behind the
/// single [`RuleMatcher::matches`] capability.
pub enum RuleMatcher {
    /// Matches iff every keyword is a substring of the lowercased message.
    Keywords(Vec<String>),
    /// Arbitrary predicate over the lowercased message.
    Predicate(fn(&str) -> bool),
}

impl RuleMatcher {
    /// Build a keyword matcher from string literals.
    pub fn keywords(words: &[&str]) -> Self {
        Self::Keywords(words.iter().map(|w| w.to_lowercase()).collect())
    }

    /// Whether this matcher fires for the given lowercased message.
    pub fn matches(&self, lowercased: &str) -> bool {
        match self {
            Self::Keywords(words) => words.iter().all(|w| lowercased.contains(w.as_str())),
            Self::Predicate(test) => test(lowercased),
        }
    }
}

impl std::fmt::Debug for RuleMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keywords(words) => f.debug_tuple("Keywords").field(words).finish(),
            Self::Predicate(_) => f.debug_tuple("Predicate").field(&"<fn>").finish(),
        }
    }
}

/// A single curated FAQ rule.
#[derive(Debug)]
pub struct FaqRule {
    /// Stable identifier, used in logs
    pub id: String,

    /// Topic label carried into the response envelope
    pub topic: String,

    /// The curated reply text
    pub reply: String,

    /// Follow-up prompts (at most 3)
    pub suggestions: Vec<String>,

    /// The matching strategy
    pub matcher: RuleMatcher,
}

impl FaqRule {
    /// Produce the envelope for this rule: reply, topic, and suggestions
    /// verbatim, relevance always high.
    pub fn to_envelope(&self) -> ResponseEnvelope {
        ResponseEnvelope::new(
            self.reply.clone(),
            self.topic.clone(),
            Relevance::High,
            self.suggestions.clone(),
        )
    }
}

/// The ordered rule table. Constructed once at startup and passed by
/// reference into the engine; never mutated afterwards.
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<FaqRule>,
}

impl RuleTable {
    /// Build a table from an ordered rule list.
    pub fn new(rules: Vec<FaqRule>) -> Self {
        Self { rules }
    }

    /// Walk the table in order and return the first matching rule.
    ///
    /// Lowercases the message once; pure, no side effects.
    pub fn match_rule(&self, message: &str) -> Option<&FaqRule> {
        let lowercased = message.to_lowercase();
        self.rules.iter().find(|r| r.matcher.matches(&lowercased))
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn is_greeting(lowercased: &str) -> bool {
    let t = lowercased.trim().trim_end_matches(['!', '.', '?']).trim_end();
    matches!(
        t,
        "hi" | "hello" | "hey" | "good morning" | "good afternoon" | "good evening"
    )
}

impl Default for RuleTable {
    /// The curated platform rule set, in priority order.
    fn default() -> Self {
        Self::new(vec![
            FaqRule {
                id: "apply-opportunity".into(),
                topic: "applications".into(),
                reply: "To apply for an opportunity, open the View Opportunities page, pick a \
                        posting that interests you, and submit your application with your CV \
                        attached. You'll get a notification when the poster responds."
                    .into(),
                suggestions: vec![
                    "Where can I see my applications?".into(),
                    "How do I upload my CV?".into(),
                    "Are there application deadlines?".into(),
                ],
                matcher: RuleMatcher::keywords(&["apply", "opportunit"]),
            },
            FaqRule {
                id: "track-applications".into(),
                topic: "applications".into(),
                reply: "Your dashboard lists every application you've submitted, together with \
                        its current status. Open it from the My Applications tab."
                    .into(),
                suggestions: vec![
                    "How do I apply for an opportunity?".into(),
                    "Can I withdraw an application?".into(),
                ],
                matcher: RuleMatcher::keywords(&["track", "application"]),
            },
            FaqRule {
                id: "upload-cv".into(),
                topic: "profile".into(),
                reply: "You can upload or replace your CV from your profile page. Accepted \
                        formats are PDF and DOCX; the newest upload is the one attached to \
                        future applications."
                    .into(),
                suggestions: vec![
                    "How do I update my profile?".into(),
                    "How do I apply for an opportunity?".into(),
                ],
                matcher: RuleMatcher::keywords(&["upload", "cv"]),
            },
            FaqRule {
                id: "post-opportunity".into(),
                topic: "posting".into(),
                reply: "Industry partners and staff can post opportunities from the Post an \
                        Opportunity page: fill in the role details, set a deadline, and publish. \
                        Students see it immediately under View Opportunities."
                    .into(),
                suggestions: vec![
                    "Who can see my posting?".into(),
                    "How do I edit a posted opportunity?".into(),
                ],
                matcher: RuleMatcher::keywords(&["post", "opportunit"]),
            },
            // Narrow on purpose: the broader self-reference phrase set is a
            // separate check that runs after FAQ matching, so only this exact
            // keyword combination gets the curated identity answer.
            FaqRule {
                id: "chatbot-identity".into(),
                topic: "chatbot-meta".into(),
                reply: "I'm the platform's built-in assistant. I answer from a curated FAQ \
                        first, and for open questions I consult an AI language model, falling \
                        back to built-in guidance when it isn't available."
                    .into(),
                suggestions: vec![
                    "What can you help me with?".into(),
                    "How do I apply for an opportunity?".into(),
                ],
                matcher: RuleMatcher::keywords(&["what", "ai", "model"]),
            },
            FaqRule {
                id: "greeting".into(),
                topic: "greeting".into(),
                reply: "Hello! I can help you with opportunities, applications, comments, and \
                        profiles on the platform. What would you like to know?"
                    .into(),
                suggestions: vec![
                    "How do I apply for an opportunity?".into(),
                    "How do I update my profile?".into(),
                    "What can you help me with?".into(),
                ],
                matcher: RuleMatcher::Predicate(is_greeting),
            },
        ])
    }
}
