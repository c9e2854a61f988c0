//! Tool trait — the abstraction over library lookup functions.
//!
//! Tools are pure reads over the library's in-memory stores: does a title
//! exist, how many copies are on the shelf, when is the building open.
//! The router decides which tools to invoke for a query; the model never
//! picks tools itself, so there is no parameter schema to ship anywhere.

use crate::error::ToolError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A request to execute a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to execute
    pub name: String,

    /// Arguments as a JSON value
    pub arguments: serde_json::Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// The result of a tool execution.
///
/// A denial is an outcome, not an error: the privileged tool answered,
/// and its answer is "no". The router turns denied outcomes into polite
/// reply text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutcome {
    /// Human-readable output, rendered into the answer context
    pub output: String,

    /// Structured result data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    /// True when an authorization gate refused to produce data
    #[serde(default)]
    pub denied: bool,
}

impl ToolOutcome {
    pub fn ok(output: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            output: output.into(),
            data: Some(data),
            denied: false,
        }
    }

    pub fn denial(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            data: None,
            denied: true,
        }
    }
}

/// The core Tool trait.
///
/// Each lookup (search_book, check_availability, opening_hours) implements
/// this trait. Tools are registered in the ToolRegistry and invoked by the
/// router.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name of this tool (e.g., "search_book").
    fn name(&self) -> &str;

    /// A one-line description of what this tool does.
    fn description(&self) -> &str;

    /// Execute the tool with the given arguments.
    async fn execute(
        &self,
        arguments: serde_json::Value,
    ) -> std::result::Result<ToolOutcome, ToolError>;
}

/// A registry of available tools, keyed by name.
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// Execute a tool call.
    pub async fn execute(&self, call: &ToolCall) -> std::result::Result<ToolOutcome, ToolError> {
        let tool = self
            .tools
            .get(&call.name)
            .ok_or_else(|| ToolError::NotFound(call.name.clone()))?;
        tool.execute(call.arguments.clone()).await
    }

    /// List all registered tool names, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
