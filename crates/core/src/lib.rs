//! # Shelfwise Core
//!
//! Domain types, traits, and error definitions for the Shelfwise library
//! assistant. This crate has **zero framework dependencies** — it defines
//! the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every collaborator is defined as a trait here: the LLM backend
//! (`Provider`), the lookup tools (`Tool`), and the request guardrail
//! (`ScopeClassifier`). Implementations live in their respective crates.
//! This enables:
//! - Swapping implementations via configuration
//! - Deterministic test doubles for every external call
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod guardrail;
pub mod member;
pub mod message;
pub mod persona;
pub mod provider;
pub mod query;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use error::{Error, Result};
pub use guardrail::{ScopeClassifier, ScopeVerdict};
pub use member::Member;
pub use message::{Message, Role};
pub use persona::Persona;
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
pub use query::{Query, QueryPhase, Reply};
pub use tool::{Tool, ToolCall, ToolOutcome, ToolRegistry};
