//! Persona — assistant personality and system prompt construction.
//!
//! The system prompt is personalized per member (name and membership id)
//! as a pure formatting function. There is no mutable prompt state: the
//! same persona and member always produce the same prompt.

use crate::member::Member;
use serde::{Deserialize, Serialize};

/// The assistant's persona configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// The assistant's name
    pub name: String,

    /// The library it serves
    pub library_name: String,

    /// Extra style guidance appended to the system prompt
    #[serde(default)]
    pub style: String,
}

impl Persona {
    /// The built-in persona used when no configuration overrides it.
    pub fn default_persona() -> Self {
        Self {
            name: "Shelfwise".into(),
            library_name: "the library".into(),
            style: "Answer politely and keep responses short.".into(),
        }
    }

    /// Build the system prompt for a query from this member.
    ///
    /// The prompt states the assistant's duties, the member's identity,
    /// and whether privileged lookups apply to them.
    pub fn system_prompt(&self, member: &Member) -> String {
        let membership = if member.is_valid {
            format!("a registered member (ID: {})", member.member_id)
        } else {
            "a guest without a valid membership".to_string()
        };

        let mut prompt = String::with_capacity(512);
        prompt.push_str(&format!(
            "You are {}, the assistant for {}. ",
            self.name, self.library_name
        ));
        prompt.push_str(
            "You answer questions about books in the catalog, copy availability, \
             and opening hours, based only on the lookup results provided to you. ",
        );
        prompt.push_str(&format!(
            "You are speaking with {}, {}. ",
            member.name, membership
        ));
        prompt.push_str(
            "Do not invent catalog data. If a lookup reported a denial, explain it \
             without revealing numbers. ",
        );
        if !self.style.is_empty() {
            prompt.push_str(&self.style);
        }
        prompt
    }

    /// A short greeting line for the interactive session banner.
    pub fn greeting(&self, member: &Member) -> String {
        format!(
            "Hello {}! I am {}, the {} assistant.",
            member.name, self.name, self.library_name
        )
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::default_persona()
    }
}
