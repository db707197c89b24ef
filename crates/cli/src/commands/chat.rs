//! `oppchat chat` — interactive conversation mode.
//!
//! History lives only in this process, caller-side: the engine itself is
//! stateless and windows whatever it is handed.

use oppchat_config::ChatbotConfig;
use oppchat_core::ConversationMessage;
use oppchat_engine::ChatEngine;
use std::io::{BufRead, Write};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ChatbotConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let provider_status = if config.provider_available() {
        "available"
    } else {
        "not configured (built-in guidance only)"
    };

    let engine = ChatEngine::from_config(config);

    println!();
    println!("  OppChat — Interactive Mode");
    println!("  Provider: {provider_status}");
    println!("  Type 'exit' or press Ctrl-D to quit.");
    println!();

    let stdin = std::io::stdin();
    let mut history: Vec<ConversationMessage> = Vec::new();

    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        let envelope = engine.respond(message, &history).await;
        println!();
        println!("{}", super::render_envelope(&envelope));

        history.push(ConversationMessage::user(message));
        history.push(ConversationMessage::assistant(envelope.reply.clone()));
    }

    println!("Bye!");
    Ok(())
}
