//! LLM-delegated scope classifier.
//!
//! Sends the query to the provider under a strict gatekeeper instruction:
//! the model must reply with exactly `ALLOW` or `BLOCK`. Anything that is
//! not `ALLOW` — including malformed replies — counts as out-of-scope.
//! A provider failure propagates to the caller; the check fails closed
//! rather than guessing a verdict.

use async_trait::async_trait;
use shelfwise_core::error::ProviderError;
use shelfwise_core::guardrail::{ScopeClassifier, ScopeVerdict};
use shelfwise_core::message::Message;
use shelfwise_core::provider::{Provider, ProviderRequest};
use std::sync::Arc;
use tracing::debug;

const GATEKEEPER_INSTRUCTIONS: &str = "You are a strict gatekeeper for a library assistant. \
If the user's message is about books, availability, membership, or library timings, \
respond with EXACTLY 'ALLOW'. For anything else (e.g., sports, politics, finance, \
chit-chat), respond with EXACTLY 'BLOCK'. No extra words.";

pub struct LlmScopeClassifier {
    provider: Arc<dyn Provider>,
    model: String,
}

impl LlmScopeClassifier {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }
}

#[async_trait]
impl ScopeClassifier for LlmScopeClassifier {
    fn name(&self) -> &str {
        "llm"
    }

    async fn classify(&self, text: &str) -> std::result::Result<ScopeVerdict, ProviderError> {
        let request = ProviderRequest::new(
            self.model.clone(),
            vec![
                Message::system(GATEKEEPER_INSTRUCTIONS),
                Message::user(text),
            ],
        )
        // The verdict must be reproducible, not creative.
        .with_temperature(0.0)
        .with_max_tokens(8);

        let response = self.provider.complete(request).await?;
        let raw = response.message.content.trim().to_uppercase();

        debug!(verdict = %raw, "Gatekeeper verdict");

        if raw == "ALLOW" {
            Ok(ScopeVerdict::in_scope())
        } else {
            Ok(ScopeVerdict::out_of_scope(format!(
                "gatekeeper replied '{raw}'"
            )))
        }
    }
}
