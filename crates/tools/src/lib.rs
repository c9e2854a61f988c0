//! Lookup tools for Shelfwise.
//!
//! Three pure reads over the library stores: book search, copy
//! availability, and opening hours. The availability tool carries the
//! membership gate; the other two are open to guests.

pub mod check_availability;
pub mod opening_hours;
pub mod search_book;

pub use check_availability::CheckAvailabilityTool;
pub use opening_hours::OpeningHoursTool;
pub use search_book::SearchBookTool;

use shelfwise_core::tool::ToolRegistry;
use shelfwise_library::{BookCatalog, MemberRegistry, OpeningHours};
use std::sync::Arc;

/// Create the default tool registry over the given stores.
pub fn default_registry(
    catalog: Arc<BookCatalog>,
    members: Arc<MemberRegistry>,
    hours: Arc<OpeningHours>,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(SearchBookTool::new(catalog.clone())));
    registry.register(Box::new(CheckAvailabilityTool::new(catalog, members)));
    registry.register(Box::new(OpeningHoursTool::new(hours)));
    registry
}
