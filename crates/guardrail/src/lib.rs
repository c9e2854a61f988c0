//! Scope classifier implementations for Shelfwise.
//!
//! Two ways to answer "is this a library question": delegate the verdict
//! to the language model (the default), or match against a keyword
//! allow-list (deterministic, works offline, and doubles as the test
//! stand-in). Both implement `shelfwise_core::ScopeClassifier`.

pub mod keyword;
pub mod llm;

pub use keyword::KeywordScopeClassifier;
pub use llm::LlmScopeClassifier;

use shelfwise_config::{AppConfig, GuardrailMode};
use shelfwise_core::Provider;
use std::sync::Arc;

/// Build the classifier selected in configuration.
pub fn build_from_config(
    config: &AppConfig,
    provider: Arc<dyn Provider>,
) -> Arc<dyn shelfwise_core::ScopeClassifier> {
    match config.guardrail.mode {
        GuardrailMode::Llm => Arc::new(LlmScopeClassifier::new(
            provider,
            config.provider.model.clone(),
        )),
        GuardrailMode::Keyword => Arc::new(KeywordScopeClassifier::new(
            config.guardrail.keywords.clone(),
        )),
    }
}
