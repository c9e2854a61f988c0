//! Member domain type.
//!
//! A member is a registered library patron. The `is_valid` flag gates
//! privileged operations: only valid members may ask for copy counts.
//! Unknown visitors are represented as guests with `is_valid = false`
//! rather than rejected outright — guests can still search the catalog
//! and ask for opening hours.

use serde::{Deserialize, Serialize};

/// A library patron, resolved once per query from the member registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique membership identifier (e.g., "M-1001"). Guests carry the
    /// identifier they presented, or "guest" when none was given.
    pub member_id: String,

    /// Display name used to personalize responses.
    pub name: String,

    /// Whether this membership is valid. Gates the availability tool.
    pub is_valid: bool,
}

impl Member {
    /// A registered member with a valid membership.
    pub fn registered(member_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            name: name.into(),
            is_valid: true,
        }
    }

    /// An unregistered visitor. Keeps whatever name they gave so replies
    /// can still address them.
    pub fn guest(name: impl Into<String>) -> Self {
        Self {
            member_id: "guest".into(),
            name: name.into(),
            is_valid: false,
        }
    }
}
