//! Opening hours tool.
//!
//! Not member-gated: anyone may ask when the library is open. With a
//! `day` argument it answers for that day; without one it lists the
//! whole week.

use async_trait::async_trait;
use shelfwise_core::error::ToolError;
use shelfwise_core::tool::{Tool, ToolOutcome};
use shelfwise_library::OpeningHours;
use std::sync::Arc;

pub struct OpeningHoursTool {
    hours: Arc<OpeningHours>,
}

impl OpeningHoursTool {
    pub fn new(hours: Arc<OpeningHours>) -> Self {
        Self { hours }
    }
}

#[async_trait]
impl Tool for OpeningHoursTool {
    fn name(&self) -> &str {
        "opening_hours"
    }

    fn description(&self) -> &str {
        "Report the library's opening hours for a day, or the whole week."
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolOutcome, ToolError> {
        match arguments["day"].as_str() {
            Some(day) if !day.trim().is_empty() => match self.hours.for_day(day) {
                Some(hours) => Ok(ToolOutcome::ok(
                    format!("{}: {hours}", day.trim()),
                    serde_json::json!({"day": day.trim(), "hours": hours}),
                )),
                None => Ok(ToolOutcome::ok(
                    format!("'{}' is not a day I know.", day.trim()),
                    serde_json::json!({"day": day.trim(), "hours": "Unknown day."}),
                )),
            },
            _ => {
                let week = self.hours.week();
                let listing = week
                    .iter()
                    .map(|(day, hours)| format!("{day}: {hours}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                let data: serde_json::Map<String, serde_json::Value> = week
                    .iter()
                    .map(|(day, hours)| (day.to_string(), serde_json::json!(hours)))
                    .collect();
                Ok(ToolOutcome::ok(listing, serde_json::Value::Object(data)))
            }
        }
    }
}
