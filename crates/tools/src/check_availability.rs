//! Copy availability tool — member-gated.
//!
//! The membership check is a hard authorization gate: an invalid or
//! unknown member gets a denial outcome before the catalog is consulted,
//! and never a numeric count. The router injects the authenticated
//! member id into the arguments, so nothing upstream can widen access by
//! naming someone else's id.

use async_trait::async_trait;
use shelfwise_core::error::ToolError;
use shelfwise_core::tool::{Tool, ToolOutcome};
use shelfwise_library::{BookCatalog, MemberRegistry};
use std::sync::Arc;
use tracing::debug;

pub struct CheckAvailabilityTool {
    catalog: Arc<BookCatalog>,
    members: Arc<MemberRegistry>,
}

impl CheckAvailabilityTool {
    pub fn new(catalog: Arc<BookCatalog>, members: Arc<MemberRegistry>) -> Self {
        Self { catalog, members }
    }
}

#[async_trait]
impl Tool for CheckAvailabilityTool {
    fn name(&self) -> &str {
        "check_availability"
    }

    fn description(&self) -> &str {
        "Report how many copies of a book are available. Registered members only."
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolOutcome, ToolError> {
        let title = arguments["title"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'title' argument".into()))?;
        let member_id = arguments["member_id"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'member_id' argument".into()))?;

        // Authorization first; the catalog is not consulted for invalid members.
        if !self.members.is_valid(member_id) {
            debug!(member_id, "Availability lookup denied");
            return Ok(ToolOutcome::denial(
                "Copy availability is only shown to members with a valid membership.",
            ));
        }

        match self.catalog.copies(title) {
            Some(copies) => {
                let display_title = self.catalog.canonical_title(title).unwrap_or(title);
                Ok(ToolOutcome::ok(
                    format!("'{display_title}' has {copies} available copies."),
                    serde_json::json!({
                        "title": display_title,
                        "available_copies": copies,
                    }),
                ))
            }
            None => Ok(ToolOutcome::ok(
                format!("'{title}' is not in the catalog."),
                serde_json::json!({
                    "title": title,
                    "in_catalog": false,
                    "note": "Not in catalog.",
                }),
            )),
        }
    }
}
