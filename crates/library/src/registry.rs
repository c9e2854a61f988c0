//! Member registry — who may use privileged lookups.
//!
//! Resolution is forgiving: a query may carry a member id ("M-1001") or a
//! display name ("Ayesha", matched case-insensitively). Anything the
//! registry does not recognize resolves to a guest, who can still search
//! the catalog and ask for hours but never sees copy counts.

use shelfwise_config::LibraryConfig;
use shelfwise_core::member::Member;
use std::collections::HashMap;

/// Read-only registry of library members.
pub struct MemberRegistry {
    // Keyed by member id (exact).
    by_id: HashMap<String, Member>,
    // Keyed by lowercased display name.
    by_name: HashMap<String, Member>,
}

impl MemberRegistry {
    pub fn from_members(members: impl IntoIterator<Item = Member>) -> Self {
        let mut by_id = HashMap::new();
        let mut by_name = HashMap::new();
        for member in members {
            by_name.insert(member.name.to_lowercase(), member.clone());
            by_id.insert(member.member_id.clone(), member);
        }
        tracing::debug!(members = by_id.len(), "Member registry built");
        Self { by_id, by_name }
    }

    pub fn from_config(config: &LibraryConfig) -> Self {
        Self::from_members(config.members.iter().map(|m| Member {
            member_id: m.member_id.clone(),
            name: m.name.clone(),
            is_valid: m.valid,
        }))
    }

    /// Look up a member by exact id.
    pub fn get(&self, member_id: &str) -> Option<&Member> {
        self.by_id.get(member_id)
    }

    /// Whether the id belongs to a member with a valid membership.
    /// Unknown ids are not valid.
    pub fn is_valid(&self, member_id: &str) -> bool {
        self.by_id.get(member_id).is_some_and(|m| m.is_valid)
    }

    /// Resolve an identifier — member id or display name — to a member.
    ///
    /// Unknown identifiers become a guest carrying the presented text as
    /// their name, so replies can still address them.
    pub fn resolve(&self, identifier: &str) -> Member {
        let identifier = identifier.trim();
        if let Some(member) = self.by_id.get(identifier) {
            return member.clone();
        }
        if let Some(member) = self.by_name.get(&identifier.to_lowercase()) {
            return member.clone();
        }
        let name = if identifier.is_empty() {
            "visitor"
        } else {
            identifier
        };
        tracing::debug!(identifier = %name, "Unknown identifier resolved as guest");
        Member::guest(name)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemberRegistry {
        MemberRegistry::from_members([
            Member::registered("M-1001", "Ayesha"),
            Member::registered("M-2002", "Bilal"),
            Member {
                member_id: "M-9999".into(),
                name: "Lapsed".into(),
                is_valid: false,
            },
        ])
    }

    #[test]
    fn resolve_by_id() {
        let registry = sample();
        let m = registry.resolve("M-1001");
        assert_eq!(m.name, "Ayesha");
        assert!(m.is_valid);
    }

    #[test]
    fn resolve_by_name_case_insensitive() {
        let registry = sample();
        let m = registry.resolve("ayesha");
        assert_eq!(m.member_id, "M-1001");
        assert!(m.is_valid);
    }

    #[test]
    fn unknown_identifier_becomes_guest() {
        let registry = sample();
        let m = registry.resolve("Omer");
        assert_eq!(m.member_id, "guest");
        assert_eq!(m.name, "Omer");
        assert!(!m.is_valid);
    }

    #[test]
    fn blank_identifier_becomes_anonymous_visitor() {
        let registry = sample();
        let m = registry.resolve("  ");
        assert_eq!(m.name, "visitor");
        assert!(!m.is_valid);
    }

    #[test]
    fn lapsed_membership_resolves_but_is_invalid() {
        let registry = sample();
        let m = registry.resolve("M-9999");
        assert_eq!(m.name, "Lapsed");
        assert!(!m.is_valid);
        assert!(!registry.is_valid("M-9999"));
    }

    #[test]
    fn is_valid_for_unknown_id_is_false() {
        let registry = sample();
        assert!(!registry.is_valid("M-0000"));
        assert!(registry.is_valid("M-2002"));
    }

    #[test]
    fn from_config_respects_valid_flag() {
        let registry = MemberRegistry::from_config(&LibraryConfig::default());
        assert_eq!(registry.len(), 3);
        assert!(registry.is_valid("M-1001"));
    }
}
