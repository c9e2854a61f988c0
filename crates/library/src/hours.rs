//! Opening hours — weekday to hours-string table.
//!
//! Day lookup is case-insensitive. An unrecognized day yields `None`,
//! which the hours tool reports as "unknown day" rather than an error.

use shelfwise_config::LibraryConfig;
use std::collections::HashMap;

/// Weekdays in display order.
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Read-only opening-hours table.
pub struct OpeningHours {
    // Keyed by lowercased weekday.
    hours: HashMap<String, String>,
}

impl OpeningHours {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let hours = entries
            .into_iter()
            .map(|(day, hours)| (day.to_lowercase(), hours))
            .collect();
        Self { hours }
    }

    pub fn from_config(config: &LibraryConfig) -> Self {
        Self::from_entries(config.hours.iter().map(|(d, h)| (d.clone(), h.clone())))
    }

    /// Hours for a single day, if it is a known day.
    pub fn for_day(&self, day: &str) -> Option<&str> {
        self.hours
            .get(&day.trim().to_lowercase())
            .map(String::as_str)
    }

    /// All configured days in weekday order, for "when are you open"
    /// questions that name no particular day.
    pub fn week(&self) -> Vec<(&str, &str)> {
        WEEKDAYS
            .iter()
            .filter_map(|day| self.hours.get(*day).map(|h| (*day, h.as_str())))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }
}
