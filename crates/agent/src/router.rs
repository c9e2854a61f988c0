//! The request router.
//!
//! One query, one pass: classify against the guardrail, detect intents,
//! invoke the matching lookup tools, and hand the collected results to
//! the provider for a single composed answer. No retries. A refused
//! query terminates before any tool runs; a provider failure at either
//! end propagates so the caller can report the service as unavailable.

use crate::intent;
use shelfwise_core::error::{Error, Result};
use shelfwise_core::member::Member;
use shelfwise_core::message::Message;
use shelfwise_core::persona::Persona;
use shelfwise_core::provider::{Provider, ProviderRequest};
use shelfwise_core::query::{Query, QueryPhase, Reply};
use shelfwise_core::tool::{ToolCall, ToolOutcome, ToolRegistry};
use shelfwise_core::{ScopeClassifier, ScopeVerdict};
use shelfwise_library::BookCatalog;
use std::sync::Arc;
use tracing::{debug, info};

/// The fixed refusal for out-of-scope queries.
pub const REFUSAL_TEXT: &str =
    "I can only help with library questions: books, copy availability, \
     membership, and opening hours.";

/// The fallback when an in-scope query names nothing we can look up.
pub const NO_BOOK_TEXT: &str =
    "I couldn't match that to a book in our catalog. Could you give me the \
     exact title?";

/// The assistant: guardrail, router, and answer composer in one.
pub struct Assistant {
    provider: Arc<dyn Provider>,
    classifier: Arc<dyn ScopeClassifier>,
    tools: Arc<ToolRegistry>,
    catalog: Arc<BookCatalog>,
    persona: Persona,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
}

impl Assistant {
    pub fn new(
        provider: Arc<dyn Provider>,
        classifier: Arc<dyn ScopeClassifier>,
        tools: Arc<ToolRegistry>,
        catalog: Arc<BookCatalog>,
        persona: Persona,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            classifier,
            tools,
            catalog,
            persona,
            model: model.into(),
            temperature: 0.7,
            max_tokens: None,
        }
    }

    /// Set the sampling temperature for answer phrasing.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the max tokens per phrased answer.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Process one query end to end.
    ///
    /// Errors only when the external service fails (classification or
    /// phrasing); everything else — refusals, unknown books, membership
    /// denials — is a `Reply`.
    pub async fn handle(&self, query: &Query) -> Result<Reply> {
        info!(
            member_id = %query.member.member_id,
            phase = %QueryPhase::Received,
            "Handling query"
        );

        // Fail closed: a classifier error propagates instead of guessing.
        let verdict: ScopeVerdict = self.classifier.classify(&query.text).await?;
        debug!(
            phase = %QueryPhase::Classified,
            in_scope = verdict.in_scope,
            classifier = self.classifier.name(),
            "Guardrail verdict"
        );

        if !verdict.in_scope {
            info!(
                phase = %QueryPhase::Refused,
                detail = verdict.detail.as_deref().unwrap_or(""),
                "Query refused by guardrail"
            );
            return Ok(Reply::refusal(REFUSAL_TEXT));
        }

        let intents = intent::detect(&query.text, &self.catalog);
        debug!(
            phase = %QueryPhase::Routed,
            titles = intents.titles.len(),
            availability = intents.availability,
            hours = intents.hours,
            "Intents detected"
        );

        if intents.is_empty() {
            info!(phase = %QueryPhase::Answered, "No lookup target identified");
            return Ok(Reply::answer(NO_BOOK_TEXT));
        }

        let calls = plan_calls(&intents, &query.member);
        let mut results: Vec<(String, ToolOutcome)> = Vec::with_capacity(calls.len());
        for call in &calls {
            let outcome = self.tools.execute(call).await.map_err(Error::from)?;
            results.push((call.name.clone(), outcome));
        }
        debug!(
            phase = %QueryPhase::ToolsInvoked,
            tools = results.len(),
            "Lookups complete"
        );

        let reply = self.compose_answer(query, &results).await?;
        info!(phase = %QueryPhase::Answered, "Query answered");
        Ok(reply)
    }

    /// One provider call phrases the whole answer from the lookup results.
    async fn compose_answer(
        &self,
        query: &Query,
        results: &[(String, ToolOutcome)],
    ) -> Result<Reply> {
        let context = render_results(results);
        let user = format!(
            "{}\n\nLookup results:\n{}\n\nAnswer the member's question using \
             only these results, covering every sub-question. If a result was \
             denied, explain the membership requirement without giving any \
             numbers.",
            query.text, context
        );

        let mut request = ProviderRequest::new(
            self.model.clone(),
            vec![
                Message::system(self.persona.system_prompt(&query.member)),
                Message::user(user),
            ],
        )
        .with_temperature(self.temperature);
        if let Some(max_tokens) = self.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }

        let response = self.provider.complete(request).await?;
        Ok(Reply::answer(response.message.content))
    }
}

/// Turn detected intents into tool calls, one pass, no retries.
///
/// The authenticated member id is injected here; the availability gate in
/// the tool sees only this id, never anything from the query text.
fn plan_calls(intents: &intent::Intents, member: &Member) -> Vec<ToolCall> {
    let mut calls = Vec::new();

    for title in &intents.titles {
        calls.push(ToolCall::new(
            "search_book",
            serde_json::json!({ "title": title }),
        ));
        if intents.availability {
            calls.push(ToolCall::new(
                "check_availability",
                serde_json::json!({
                    "title": title,
                    "member_id": member.member_id,
                }),
            ));
        }
    }

    if intents.hours {
        let arguments = match &intents.day {
            Some(day) => serde_json::json!({ "day": day }),
            None => serde_json::json!({}),
        };
        calls.push(ToolCall::new("opening_hours", arguments));
    }

    calls
}

/// Render outcomes as context lines for the phrasing call.
fn render_results(results: &[(String, ToolOutcome)]) -> String {
    results
        .iter()
        .map(|(name, outcome)| {
            if outcome.denied {
                format!("- {name}: denied — {}", outcome.output)
            } else {
                format!("- {name}: {}", outcome.output)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::Intents;
    use async_trait::async_trait;
    use shelfwise_core::error::ProviderError;
    use shelfwise_core::provider::{ProviderResponse, Usage};
    use shelfwise_library::{MemberRegistry, OpeningHours};
    use std::sync::Mutex;

    /// Records every request; replies with fixed text or a fixed error.
    struct MockProvider {
        requests: Mutex<Vec<ProviderRequest>>,
        reply: std::result::Result<String, ProviderError>,
    }

    impl MockProvider {
        fn answering(text: &str) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(vec![]),
                reply: Ok(text.into()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(vec![]),
                reply: Err(ProviderError::Network("connection refused".into())),
            })
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn last_user_content(&self) -> String {
            let requests = self.requests.lock().unwrap();
            let request = requests.last().expect("no provider call recorded");
            request
                .messages
                .iter()
                .map(|m| m.content.clone())
                .collect::<Vec<_>>()
                .join("\n")
        }
    }

    #[async_trait]
    impl Provider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn complete(
            &self,
            request: ProviderRequest,
        ) -> std::result::Result<ProviderResponse, ProviderError> {
            self.requests.lock().unwrap().push(request);
            match &self.reply {
                Ok(text) => Ok(ProviderResponse {
                    message: Message::assistant(text),
                    usage: Some(Usage {
                        prompt_tokens: 50,
                        completion_tokens: 20,
                        total_tokens: 70,
                    }),
                    model: "mock-model".into(),
                }),
                Err(e) => Err(e.clone()),
            }
        }
    }

    /// A classifier with a fixed verdict, or a fixed failure.
    struct StaticClassifier {
        verdict: std::result::Result<bool, ProviderError>,
    }

    #[async_trait]
    impl ScopeClassifier for StaticClassifier {
        fn name(&self) -> &str {
            "static"
        }

        async fn classify(
            &self,
            _text: &str,
        ) -> std::result::Result<ScopeVerdict, ProviderError> {
            match &self.verdict {
                Ok(true) => Ok(ScopeVerdict::in_scope()),
                Ok(false) => Ok(ScopeVerdict::out_of_scope("static")),
                Err(e) => Err(e.clone()),
            }
        }
    }

    fn in_scope() -> Arc<StaticClassifier> {
        Arc::new(StaticClassifier { verdict: Ok(true) })
    }

    fn out_of_scope() -> Arc<StaticClassifier> {
        Arc::new(StaticClassifier { verdict: Ok(false) })
    }

    fn broken_classifier() -> Arc<StaticClassifier> {
        Arc::new(StaticClassifier {
            verdict: Err(ProviderError::Timeout("classifier timed out".into())),
        })
    }

    fn assistant(
        provider: Arc<MockProvider>,
        classifier: Arc<StaticClassifier>,
    ) -> Assistant {
        let catalog = Arc::new(BookCatalog::from_entries([
            ("Dune".to_string(), 3),
            ("Clean Code".to_string(), 2),
        ]));
        let members = Arc::new(MemberRegistry::from_members([
            Member::registered("M-1001", "Alice"),
            Member {
                member_id: "M-2002".into(),
                name: "Bob".into(),
                is_valid: false,
            },
        ]));
        let hours = Arc::new(OpeningHours::from_config(
            &shelfwise_config::LibraryConfig::default(),
        ));
        let tools = Arc::new(shelfwise_tools::default_registry(
            catalog.clone(),
            members,
            hours,
        ));
        Assistant::new(
            provider,
            classifier,
            tools,
            catalog,
            Persona::default_persona(),
            "mock-model",
        )
        .with_temperature(0.0)
        .with_max_tokens(256)
    }

    fn alice() -> Member {
        Member::registered("M-1001", "Alice")
    }

    fn bob() -> Member {
        Member {
            member_id: "M-2002".into(),
            name: "Bob".into(),
            is_valid: false,
        }
    }

    #[tokio::test]
    async fn out_of_scope_gets_fixed_refusal_and_no_tools() {
        let provider = MockProvider::answering("should never be used");
        let agent = assistant(provider.clone(), out_of_scope());

        let reply = agent
            .handle(&Query::new(alice(), "What's the weather today?"))
            .await
            .unwrap();

        assert!(reply.refused);
        assert_eq!(reply.text, REFUSAL_TEXT);
        // No phrasing call either: the provider was never touched
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn combined_existence_and_availability_in_one_pass() {
        let provider = MockProvider::answering("Yes — Dune is in the catalog with 3 copies.");
        let agent = assistant(provider.clone(), in_scope());

        let reply = agent
            .handle(&Query::new(alice(), "Do you have Dune and how many copies?"))
            .await
            .unwrap();

        assert!(!reply.refused);
        assert_eq!(reply.text, "Yes — Dune is in the catalog with 3 copies.");
        assert_eq!(provider.calls(), 1);

        let context = provider.last_user_content();
        assert!(context.contains("'Dune' is in the catalog."));
        assert!(context.contains("'Dune' has 3 available copies."));
    }

    #[tokio::test]
    async fn invalid_member_sees_denial_and_never_a_count() {
        let provider = MockProvider::answering("Sorry Bob, availability is members-only.");
        let agent = assistant(provider.clone(), in_scope());

        let reply = agent
            .handle(&Query::new(
                bob(),
                "How many copies of Dune are available?",
            ))
            .await
            .unwrap();

        assert!(!reply.refused);
        let context = provider.last_user_content();
        assert!(context.contains("denied"));
        assert!(!context.contains("has 3 available copies"));
    }

    #[tokio::test]
    async fn unknown_book_falls_back_without_provider_call() {
        let provider = MockProvider::answering("unused");
        let agent = assistant(provider.clone(), in_scope());

        let reply = agent
            .handle(&Query::new(alice(), "Do you have The Silmarillion?"))
            .await
            .unwrap();

        assert!(!reply.refused);
        assert_eq!(reply.text, NO_BOOK_TEXT);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn hours_question_routes_to_hours_tool() {
        let provider = MockProvider::answering("We're open 10:00 – 16:00 on Saturdays.");
        let agent = assistant(provider.clone(), in_scope());

        let reply = agent
            .handle(&Query::new(bob(), "What are your hours on saturday?"))
            .await
            .unwrap();

        // Hours are not member-gated; Bob gets an answer
        assert!(!reply.refused);
        let context = provider.last_user_content();
        assert!(context.contains("saturday: 10:00 – 16:00"));
    }

    #[tokio::test]
    async fn classifier_failure_surfaces_as_error() {
        let provider = MockProvider::answering("unused");
        let agent = assistant(provider.clone(), broken_classifier());

        let err = agent
            .handle(&Query::new(alice(), "Do you have Dune?"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Provider(ProviderError::Timeout(_))));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn phrasing_failure_surfaces_as_error() {
        let provider = MockProvider::failing();
        let agent = assistant(provider.clone(), in_scope());

        let err = agent
            .handle(&Query::new(alice(), "Do you have Dune?"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Provider(ProviderError::Network(_))));
    }

    #[tokio::test]
    async fn failed_query_does_not_poison_the_next_one() {
        let provider = MockProvider::answering("Dune is catalogued.");
        // First query fails in classification...
        let broken = assistant(provider.clone(), broken_classifier());
        assert!(broken
            .handle(&Query::new(alice(), "Do you have Dune?"))
            .await
            .is_err());

        // ...and the same stores keep serving subsequent queries.
        let working = assistant(provider.clone(), in_scope());
        let reply = working
            .handle(&Query::new(alice(), "Do you have Dune?"))
            .await
            .unwrap();
        assert!(!reply.refused);
    }

    #[test]
    fn plan_injects_authenticated_member_id() {
        let intents = Intents {
            titles: vec!["Dune".into()],
            availability: true,
            hours: false,
            day: None,
        };
        let calls = plan_calls(&intents, &alice());
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].name, "search_book");
        assert_eq!(calls[1].name, "check_availability");
        assert_eq!(calls[1].arguments["member_id"], "M-1001");
    }

    #[test]
    fn plan_without_availability_searches_only() {
        let intents = Intents {
            titles: vec!["Dune".into(), "Clean Code".into()],
            availability: false,
            hours: false,
            day: None,
        };
        let calls = plan_calls(&intents, &alice());
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|c| c.name == "search_book"));
    }

    #[test]
    fn render_marks_denials() {
        let results = vec![
            (
                "search_book".to_string(),
                ToolOutcome::ok("'Dune' is in the catalog.", serde_json::json!({})),
            ),
            (
                "check_availability".to_string(),
                ToolOutcome::denial("members only"),
            ),
        ];
        let rendered = render_results(&results);
        assert!(rendered.contains("- search_book: 'Dune' is in the catalog."));
        assert!(rendered.contains("- check_availability: denied — members only"));
    }
}
