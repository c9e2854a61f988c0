//! In-memory library data for Shelfwise.
//!
//! Three read-only stores, built once from configuration at startup:
//! the book catalog, the member registry, and the opening hours. All
//! lookups are pure; nothing here mutates after construction, so the
//! stores can be shared across concurrent queries without locking.

pub mod catalog;
pub mod hours;
pub mod registry;

pub use catalog::BookCatalog;
pub use hours::OpeningHours;
pub use registry::MemberRegistry;
