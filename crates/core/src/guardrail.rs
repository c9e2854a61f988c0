//! Scope guardrail — the pre-check that gates every query.
//!
//! Before any routing happens, the free-text query is classified as
//! library-related or not. The classifier is a trait so the LLM-delegated
//! implementation can be swapped for a deterministic keyword allow-list
//! in tests and offline runs.
//!
//! Failure semantics are strict: if the classifier itself fails (network,
//! timeout), the error propagates and the caller reports the service as
//! unavailable. A failed check never silently passes or refuses.

use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The verdict of a scope classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeVerdict {
    /// True when the query is about books, membership, or library hours.
    pub in_scope: bool,

    /// Optional classifier detail, for logs only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ScopeVerdict {
    pub fn in_scope() -> Self {
        Self {
            in_scope: true,
            detail: None,
        }
    }

    pub fn out_of_scope(detail: impl Into<String>) -> Self {
        Self {
            in_scope: false,
            detail: Some(detail.into()),
        }
    }
}

/// Binary in-scope classification of a free-text query.
#[async_trait]
pub trait ScopeClassifier: Send + Sync {
    /// A human-readable name for this classifier (e.g., "llm", "keyword").
    fn name(&self) -> &str;

    /// Classify the query text. Errors mean the check could not be
    /// performed at all and must be surfaced, not swallowed.
    async fn classify(
        &self,
        text: &str,
    ) -> std::result::Result<ScopeVerdict, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_constructors() {
        assert!(ScopeVerdict::in_scope().in_scope);
        let out = ScopeVerdict::out_of_scope("sports question");
        assert!(!out.in_scope);
        assert_eq!(out.detail.as_deref(), Some("sports question"));
    }

    #[test]
    fn verdict_serialization_skips_empty_detail() {
        let json = serde_json::to_string(&ScopeVerdict::in_scope()).unwrap();
        assert!(!json.contains("detail"));
    }
}
