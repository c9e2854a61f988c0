//! Book search tool — does a title exist in the catalog.
//!
//! Open to everyone, guests included. Matching is case-insensitive exact;
//! a blank title is reported as not found rather than an error.

use async_trait::async_trait;
use shelfwise_core::error::ToolError;
use shelfwise_core::tool::{Tool, ToolOutcome};
use shelfwise_library::BookCatalog;
use std::sync::Arc;

pub struct SearchBookTool {
    catalog: Arc<BookCatalog>,
}

impl SearchBookTool {
    pub fn new(catalog: Arc<BookCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for SearchBookTool {
    fn name(&self) -> &str {
        "search_book"
    }

    fn description(&self) -> &str {
        "Check whether a book title exists in the library catalog."
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolOutcome, ToolError> {
        let title = arguments["title"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'title' argument".into()))?;

        let in_catalog = self.catalog.contains(title);
        let display_title = self
            .catalog
            .canonical_title(title)
            .unwrap_or(title)
            .to_string();

        let data = serde_json::json!({
            "title": display_title,
            "in_catalog": in_catalog,
        });

        let output = if in_catalog {
            format!("'{display_title}' is in the catalog.")
        } else {
            format!("'{display_title}' is not in the catalog.")
        };

        Ok(ToolOutcome::ok(output, data))
    }
}
