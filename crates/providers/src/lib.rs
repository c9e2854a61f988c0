//! LLM provider implementations for Shelfwise.
//!
//! All providers implement the `shelfwise_core::Provider` trait. The
//! assistant only ever needs two completions per query (one verdict, one
//! answer), so a single non-streaming chat-completions backend covers
//! every endpoint the original targets, Gemini's OpenAI-compatible API
//! included.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatProvider;

use shelfwise_config::ProviderConfig;
use std::sync::Arc;

/// Build the configured provider.
pub fn build_from_config(config: &ProviderConfig) -> Arc<dyn shelfwise_core::Provider> {
    Arc::new(OpenAiCompatProvider::new(
        &config.name,
        &config.api_url,
        config.api_key.clone().unwrap_or_default(),
    ))
}
