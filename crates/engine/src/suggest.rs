//! Follow-up suggestion generator.
//!
//! A pure keyword-driven mapping from the raw message to one of a small
//! number of fixed topic suggestion lists, with a fixed default when nothing
//! matches. Used only on the AI-generated path — the other terminal states
//! carry their own suggestions.

/// Fixed default suggestions when no topic keyword matches.
fn default_suggestions() -> Vec<String> {
    vec![
        "How do I apply for an opportunity?".into(),
        "How do I update my profile?".into(),
        "What can you help me with?".into(),
    ]
}

/// Map a message to at most 3 ordered follow-up prompts.
///
/// Comparisons are case-insensitive; check order is fixed so the mapping is
/// deterministic.
pub fn suggest(message: &str) -> Vec<String> {
    let lowercased = message.to_lowercase();

    if lowercased.contains("apply") || lowercased.contains("application") {
        return vec![
            "Where can I see my applications?".into(),
            "Can I withdraw an application?".into(),
            "Are there application deadlines?".into(),
        ];
    }

    if lowercased.contains("comment") || lowercased.contains("discussion") {
        return vec![
            "Who can see my comments?".into(),
            "What's the difference between public and private comments?".into(),
        ];
    }

    if lowercased.contains("profile") || lowercased.contains("cv") || lowercased.contains("resume")
    {
        return vec![
            "How do I upload my CV?".into(),
            "Who can view my profile?".into(),
        ];
    }

    if lowercased.contains("post") || lowercased.contains("publish") {
        return vec![
            "How do I post an opportunity?".into(),
            "How do I edit a posted opportunity?".into(),
        ];
    }

    if lowercased.contains("chatbot") || lowercased.contains("assistant") {
        return vec![
            "What can you help me with?".into(),
            "What AI model do you use?".into(),
        ];
    }

    default_suggestions()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_keywords_map_to_applications_list() {
        let s = suggest("I just sent my application");
        assert!(s[0].contains("applications"));
        assert!(s.len() <= 3);
    }

    #[test]
    fn comparison_is_case_insensitive() {
        let upper = suggest("WHERE IS MY APPLICATION?");
        let lower = suggest("where is my application?");
        assert_eq!(upper, lower);
    }

    #[test]
    fn comment_keywords_map_to_comments_list() {
        let s = suggest("can I leave a comment?");
        assert!(s.iter().any(|x| x.contains("comments")));
    }

    #[test]
    fn unmatched_message_gets_default_list() {
        let s = suggest("tell me about the partner companies");
        assert_eq!(s, default_suggestions());
    }

    #[test]
    fn first_matching_topic_wins() {
        // "application" is checked before "comment".
        let s = suggest("a comment on my application");
        assert!(s[0].contains("applications"));
    }

    #[test]
    fn all_lists_are_bounded_and_nonempty() {
        for msg in [
            "application",
            "comment",
            "profile",
            "post",
            "chatbot",
            "anything else",
        ] {
            let s = suggest(msg);
            assert!(!s.is_empty());
            assert!(s.len() <= 3);
            assert!(s.iter().all(|x| !x.trim().is_empty()));
        }
    }
}
