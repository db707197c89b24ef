//! `oppchat init` — write a default config file.

use oppchat_config::ChatbotConfig;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = ChatbotConfig::config_dir();
    let config_path = config_dir.join("config.toml");

    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        println!("Edit it directly, or delete it and re-run `oppchat init`.");
        return Ok(());
    }

    std::fs::create_dir_all(&config_dir)?;
    std::fs::write(&config_path, ChatbotConfig::default_toml())?;

    println!("Wrote default config to {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Set an API key: export OPPCHAT_API_KEY=sk-...");
    println!("     (OPENROUTER_API_KEY and OPENAI_API_KEY also work)");
    println!("  2. Try it out:     oppchat ask \"How do I apply for an opportunity?\"");

    Ok(())
}
