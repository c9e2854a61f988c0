//! Keyword allow-list classifier.
//!
//! A query is in scope iff it contains any configured keyword,
//! case-insensitive. Deterministic and offline; used as a config-selected
//! alternative to the LLM gatekeeper and as the test double in suites
//! that must not depend on a model.

use async_trait::async_trait;
use shelfwise_core::error::ProviderError;
use shelfwise_core::guardrail::{ScopeClassifier, ScopeVerdict};

pub struct KeywordScopeClassifier {
    keywords: Vec<String>,
}

impl KeywordScopeClassifier {
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

#[async_trait]
impl ScopeClassifier for KeywordScopeClassifier {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn classify(&self, text: &str) -> std::result::Result<ScopeVerdict, ProviderError> {
        let lowered = text.to_lowercase();
        for keyword in &self.keywords {
            if lowered.contains(keyword) {
                return Ok(ScopeVerdict::in_scope());
            }
        }
        Ok(ScopeVerdict::out_of_scope("no library keyword matched"))
    }
}
