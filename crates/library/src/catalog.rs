//! Book catalog — static mapping from title to available-copy count.
//!
//! Title matching is case-insensitive exact match: "clean code" finds
//! "Clean Code", but no partial or fuzzy matching is performed. An empty
//! or blank title is simply "not found", never an error.

use shelfwise_config::LibraryConfig;
use std::collections::HashMap;

struct BookRecord {
    /// Title in its original casing, for display.
    title: String,
    copies: u32,
}

/// Read-only catalog of the library's books.
pub struct BookCatalog {
    // Keyed by lowercased title.
    books: HashMap<String, BookRecord>,
    // Original-casing titles, sorted, for scanning and display.
    titles: Vec<String>,
}

impl BookCatalog {
    /// Build a catalog from (title, copies) pairs. Later duplicates of a
    /// title (case-insensitive) replace earlier ones; config validation
    /// rejects duplicates before this is ever hit.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, u32)>) -> Self {
        let mut books = HashMap::new();
        for (title, copies) in entries {
            books.insert(
                title.to_lowercase(),
                BookRecord {
                    title,
                    copies,
                },
            );
        }
        let mut titles: Vec<String> = books.values().map(|b| b.title.clone()).collect();
        titles.sort_unstable();
        tracing::debug!(books = titles.len(), "Catalog built");
        Self { books, titles }
    }

    pub fn from_config(config: &LibraryConfig) -> Self {
        Self::from_entries(config.books.iter().map(|b| (b.title.clone(), b.copies)))
    }

    /// Whether a title exists in the catalog.
    pub fn contains(&self, title: &str) -> bool {
        let key = title.trim().to_lowercase();
        !key.is_empty() && self.books.contains_key(&key)
    }

    /// Copy count for a title, or `None` when the title is not catalogued.
    pub fn copies(&self, title: &str) -> Option<u32> {
        let key = title.trim().to_lowercase();
        self.books.get(&key).map(|b| b.copies)
    }

    /// The canonical (original-casing) form of a title, if catalogued.
    pub fn canonical_title(&self, title: &str) -> Option<&str> {
        let key = title.trim().to_lowercase();
        self.books.get(&key).map(|b| b.title.as_str())
    }

    /// All titles, sorted, in original casing.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
