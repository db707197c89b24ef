//! CLI command implementations.

pub mod ask;
pub mod chat;
pub mod init;

use oppchat_core::ResponseEnvelope;

/// Render an envelope for terminal output.
pub fn render_envelope(envelope: &ResponseEnvelope) -> String {
    let mut out = String::new();
    out.push_str(&envelope.reply);
    if !envelope.suggestions.is_empty() {
        out.push_str("\n\nYou could also ask:\n");
        for suggestion in &envelope.suggestions {
            out.push_str(&format!("  - {suggestion}\n"));
        }
    }
    out
}
