//! Conversation window builder.
//!
//! Shapes caller-supplied history into the bounded prompt sequence sent to
//! the generation provider: one fixed persona turn, the last
//! `max_history_messages` history turns (oldest within the window first),
//! then the current user turn. Output length is bounded regardless of input
//! history length; truncation always drops the oldest turns, never the most
//! recent ones or the current message.

use oppchat_core::{ConversationMessage, PromptTurn};

/// The fixed persona/instruction turn prepended to every generation prompt.
pub const PERSONA_PROMPT: &str = "You are OppChat, the assistant built into a platform that \
    connects students, academic staff, and industry partners around jobs, internships, and \
    projects. Answer only questions about the platform: opportunities, applications, comments, \
    profiles, and postings. Keep answers short, practical, and friendly. If you are not sure, \
    say so and point the user to the relevant page.";

/// Build the prompt sequence for one generation call.
///
/// The window size comes in as an explicit argument rather than a hard-coded
/// slice; the engine passes `ChatbotConfig::max_history_messages`.
pub fn build_prompt(
    history: &[ConversationMessage],
    message: &str,
    max_history_messages: usize,
) -> Vec<PromptTurn> {
    let start = history.len().saturating_sub(max_history_messages);
    let window = &history[start..];

    let mut turns = Vec::with_capacity(window.len() + 2);
    turns.push(PromptTurn::system(PERSONA_PROMPT));
    turns.extend(window.iter().map(PromptTurn::from));
    turns.push(PromptTurn::user(message));
    turns
}
