//! Shelfwise CLI — the main entry point.
//!
//! Commands:
//! - `init` — Write a sample config file
//! - `ask`  — Answer a single question
//! - `chat` — Interactive chat session

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "shelfwise",
    about = "Shelfwise — a library assistant chatbot",
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
    /// Write a sample configuration file
    Init,

    /// Ask a single question and exit
    Ask {
        /// Member id or name (unknown identifiers are served as guests)
        #[arg(short, long, default_value = "guest")]
        member: String,

        /// The question
        question: String,
    },

    /// Start an interactive chat session
    Chat {
        /// Member id or name (unknown identifiers are served as guests)
        #[arg(short, long, default_value = "guest")]
        member: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init => commands::init::run()?,
        Commands::Ask { member, question } => commands::ask::run(&member, &question).await?,
        Commands::Chat { member } => commands::chat::run(&member).await?,
    }

    Ok(())
}
