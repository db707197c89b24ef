//! `oppchat ask` — answer a single question and exit.

use oppchat_config::ChatbotConfig;
use oppchat_engine::ChatEngine;

pub async fn run(message: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = ChatbotConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if !config.provider_available() {
        tracing::debug!("No API key configured; answers will come from built-in guidance only");
    }

    let engine = ChatEngine::from_config(config);
    let envelope = engine.respond(message, &[]).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!("{}", super::render_envelope(&envelope));
    }

    Ok(())
}
