//! Query and Reply value objects, plus the per-query lifecycle.
//!
//! A query flows: received → classified → (refused | routed → tools
//! invoked → answered). Refusal and answer are the only terminal states,
//! and a refused query never reaches a tool.

use crate::member::Member;
use serde::{Deserialize, Serialize};

/// One incoming request: a resolved member plus their free-text question.
/// Created per request, consumed by the classifier and router, not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    pub member: Member,
    pub text: String,
}

impl Query {
    pub fn new(member: Member, text: impl Into<String>) -> Self {
        Self {
            member,
            text: text.into(),
        }
    }
}

/// The single response produced for a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// The text shown to the member.
    pub text: String,

    /// True iff the guardrail rejected the query. A refused reply is
    /// produced without invoking any tool.
    pub refused: bool,
}

impl Reply {
    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            refused: false,
        }
    }

    pub fn refusal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            refused: true,
        }
    }
}

/// Lifecycle phases of a query, emitted as tracing fields by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPhase {
    Received,
    Classified,
    Refused,
    Routed,
    ToolsInvoked,
    Answered,
}

impl std::fmt::Display for QueryPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            QueryPhase::Received => "received",
            QueryPhase::Classified => "classified",
            QueryPhase::Refused => "refused",
            QueryPhase::Routed => "routed",
            QueryPhase::ToolsInvoked => "tools_invoked",
            QueryPhase::Answered => "answered",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refusal_sets_flag() {
        let r = Reply::refusal("library questions only");
        assert!(r.refused);
        assert_eq!(r.text, "library questions only");
    }

    #[test]
    fn answer_is_not_refused() {
        let r = Reply::answer("We have 3 copies.");
        assert!(!r.refused);
    }

    #[test]
    fn phase_display_names() {
        assert_eq!(QueryPhase::Received.to_string(), "received");
        assert_eq!(QueryPhase::ToolsInvoked.to_string(), "tools_invoked");
    }
}
