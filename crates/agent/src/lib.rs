//! Request routing for Shelfwise.
//!
//! The `Assistant` takes a validated query through the full lifecycle:
//! guardrail classification, presence-based intent detection, lookup-tool
//! dispatch, and answer composition via the language-model provider.

pub mod intent;
pub mod router;

pub use intent::Intents;
pub use router::Assistant;
