//! OppChat CLI — the main entry point.
//!
//! Commands:
//! - `init`  — Write a default config file
//! - `ask`   — Answer a single question
//! - `chat`  — Interactive conversation mode

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "oppchat",
    about = "OppChat — the opportunities-platform assistant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file to ~/.oppchat/config.toml
    Init,

    /// Answer a single question and exit
    Ask {
        /// The question to answer
        message: String,

        /// Print the raw response envelope as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive conversation mode
    Chat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init => commands::init::run()?,
        Commands::Ask { message, json } => commands::ask::run(&message, json).await?,
        Commands::Chat => commands::chat::run().await?,
    }

    Ok(())
}
