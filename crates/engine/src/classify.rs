//! Domain-relevance and self-reference classifiers.
//!
//! Both are pure substring predicates over fixed lowercase term sets,
//! constructed once at startup and passed by reference into the engine.
//! Self-reference deliberately overrides the domain gate: a question about
//! the assistant itself is always answerable even when it contains none of
//! the platform vocabulary.

/// The fixed vocabulary defining what counts as "on-topic" for the platform.
#[derive(Debug, Clone)]
pub struct DomainLexicon {
    terms: Vec<String>,
}

impl DomainLexicon {
    /// Build a lexicon from lowercase terms.
    pub fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }

    /// True iff any term is a substring of the lowercased message.
    /// Pure and total.
    pub fn is_relevant(&self, message: &str) -> bool {
        let lowercased = message.to_lowercase();
        self.terms.iter().any(|t| lowercased.contains(t.as_str()))
    }
}

impl Default for DomainLexicon {
    fn default() -> Self {
        Self::new(
            [
                "job",
                "internship",
                "opportunit",
                "application",
                "apply",
                "student",
                "company",
                "employer",
                "recruit",
                "profile",
                "cv",
                "resume",
                "skill",
                "comment",
                "discussion",
                "deadline",
                "interview",
                "platform",
                "account",
                "dashboard",
                "project",
                "posting",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        )
    }
}

/// The fixed phrase set identifying questions about the assistant itself.
#[derive(Debug, Clone)]
pub struct SelfReferenceLexicon {
    phrases: Vec<String>,
}

impl SelfReferenceLexicon {
    /// Build a lexicon from lowercase phrases.
    pub fn new(phrases: Vec<String>) -> Self {
        Self { phrases }
    }

    /// True iff any phrase is a substring of the lowercased message.
    pub fn is_self_referential(&self, message: &str) -> bool {
        let lowercased = message.to_lowercase();
        self.phrases.iter().any(|p| lowercased.contains(p.as_str()))
    }
}

impl Default for SelfReferenceLexicon {
    fn default() -> Self {
        Self::new(
            [
                "chatbot",
                "chat bot",
                "this bot",
                "are you a bot",
                "are you an ai",
                "are you real",
                "who are you",
                "what are you",
                "how do you work",
                "how were you built",
                "language model",
                "who made you",
                "your creator",
                "virtual assistant",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        )
    }
}
