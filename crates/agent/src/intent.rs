//! Presence-based intent detection.
//!
//! No grammar parsing: a query routes to a lookup when the text mentions
//! a catalogued title, or contains availability or hours phrasing. A
//! single query may carry several intents at once ("do you have Dune and
//! how many copies?") and each one becomes a tool call.

use shelfwise_library::{BookCatalog, hours::WEEKDAYS};

/// Cues that the member is asking about copy availability.
const AVAILABILITY_CUES: [&str; 8] = [
    "how many",
    "copies",
    "copy",
    "available",
    "availability",
    "in stock",
    "borrow",
    "lend",
];

/// Cues that the member is asking about opening hours.
const HOURS_CUES: [&str; 6] = ["hour", "timing", "open", "close", "closing", "opening"];

/// The intents detected in one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intents {
    /// Catalogued titles mentioned in the text, canonical casing.
    pub titles: Vec<String>,

    /// The member asked about copy availability.
    pub availability: bool,

    /// The member asked about opening hours.
    pub hours: bool,

    /// The weekday named in the text, if any.
    pub day: Option<String>,
}

impl Intents {
    /// True when nothing actionable was recognized.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty() && !self.hours
    }
}

/// Scan the query text against the catalog and the cue lists.
pub fn detect(text: &str, catalog: &BookCatalog) -> Intents {
    let lowered = text.to_lowercase();

    let titles: Vec<String> = catalog
        .titles()
        .iter()
        .filter(|title| lowered.contains(&title.to_lowercase()))
        .cloned()
        .collect();

    let availability = AVAILABILITY_CUES.iter().any(|cue| lowered.contains(cue));
    let hours = HOURS_CUES.iter().any(|cue| lowered.contains(cue));
    let day = WEEKDAYS
        .iter()
        .find(|day| lowered.contains(*day))
        .map(|day| day.to_string());

    Intents {
        titles,
        availability,
        hours,
        day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> BookCatalog {
        BookCatalog::from_entries([
            ("Dune".to_string(), 3),
            ("Clean Code".to_string(), 2),
            ("Deep Learning".to_string(), 4),
        ])
    }

    #[test]
    fn detects_single_title() {
        let intents = detect("Do you have Dune?", &catalog());
        assert_eq!(intents.titles, vec!["Dune"]);
        assert!(!intents.availability);
        assert!(!intents.hours);
    }

    #[test]
    fn detects_title_case_insensitively() {
        let intents = detect("is CLEAN CODE on the shelf?", &catalog());
        assert_eq!(intents.titles, vec!["Clean Code"]);
    }

    #[test]
    fn detects_multiple_titles() {
        let intents = detect("Do you have Dune or Deep Learning?", &catalog());
        assert_eq!(intents.titles, vec!["Deep Learning", "Dune"]);
    }

    #[test]
    fn detects_availability_cue() {
        let intents = detect("How many copies of Dune are available?", &catalog());
        assert_eq!(intents.titles, vec!["Dune"]);
        assert!(intents.availability);
    }

    #[test]
    fn detects_combined_existence_and_availability() {
        let intents = detect("Do you have Dune and how many copies?", &catalog());
        assert_eq!(intents.titles, vec!["Dune"]);
        assert!(intents.availability);
    }

    #[test]
    fn detects_hours_with_day() {
        let intents = detect("What are your hours on Saturday?", &catalog());
        assert!(intents.hours);
        assert_eq!(intents.day.as_deref(), Some("saturday"));
        assert!(intents.titles.is_empty());
    }

    #[test]
    fn detects_hours_without_day() {
        let intents = detect("When are you open?", &catalog());
        assert!(intents.hours);
        assert_eq!(intents.day, None);
    }

    #[test]
    fn unrecognized_query_is_empty() {
        let intents = detect("Tell me about your rare manuscripts", &catalog());
        assert!(intents.is_empty());
    }

    #[test]
    fn hours_query_is_not_empty() {
        let intents = detect("opening timing?", &catalog());
        assert!(!intents.is_empty());
    }
}
