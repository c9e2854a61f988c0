//! CLI command implementations and shared wiring.

pub mod ask;
pub mod chat;
pub mod init;

use anyhow::Context;
use shelfwise_agent::Assistant;
use shelfwise_config::AppConfig;
use shelfwise_library::{BookCatalog, MemberRegistry, OpeningHours};
use std::sync::Arc;

/// Everything a command needs to serve queries.
pub(crate) struct Runtime {
    pub assistant: Assistant,
    pub members: Arc<MemberRegistry>,
    pub config: AppConfig,
}

/// Load config and wire the stores, provider, guardrail, and router.
pub(crate) fn build_runtime() -> anyhow::Result<Runtime> {
    let config = AppConfig::load().context("Failed to load config")?;

    // Answers are always phrased by the provider, so a missing key is a
    // startup error, not a mid-conversation surprise.
    if !config.has_api_key() {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    SHELFWISE_API_KEY   (generic)");
        eprintln!("    GEMINI_API_KEY      (for the default Gemini endpoint)");
        eprintln!("    OPENAI_API_KEY      (for OpenAI-compatible endpoints)");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        anyhow::bail!("No API key found. See above for setup instructions.");
    }

    let catalog = Arc::new(BookCatalog::from_config(&config.library));
    let members = Arc::new(MemberRegistry::from_config(&config.library));
    let hours = Arc::new(OpeningHours::from_config(&config.library));

    let provider = shelfwise_providers::build_from_config(&config.provider);
    let classifier = shelfwise_guardrail::build_from_config(&config, provider.clone());
    let tools = Arc::new(shelfwise_tools::default_registry(
        catalog.clone(),
        members.clone(),
        hours,
    ));

    let assistant = Assistant::new(
        provider,
        classifier,
        tools,
        catalog,
        config.persona.clone(),
        config.provider.model.clone(),
    )
    .with_temperature(config.provider.temperature)
    .with_max_tokens(config.provider.max_tokens);

    Ok(Runtime {
        assistant,
        members,
        config,
    })
}
