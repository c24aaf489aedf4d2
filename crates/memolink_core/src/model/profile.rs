//! Relationship profile roster model.
//!
//! Profiles are stored elsewhere; the core only needs id and name to resolve
//! `[Contact: id]` tags and to suppress already-known people.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Known relationship entry supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipProfile {
    /// Identifier referenced by `[Contact: <id>]` tags.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl RelationshipProfile {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display name, `"{first} {last}"` with blanks trimmed away.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// Resolves contact ids from `[Contact: id]` tags into display names.
pub trait ProfileLookup {
    /// Returns the display name for `contact_id`, or `None` when unknown.
    fn display_name(&self, contact_id: &str) -> Option<String>;
}

impl ProfileLookup for [RelationshipProfile] {
    fn display_name(&self, contact_id: &str) -> Option<String> {
        let wanted = contact_id.trim();
        self.iter()
            .find(|profile| profile.id == wanted)
            .map(RelationshipProfile::full_name)
            .filter(|name| !name.is_empty())
    }
}

impl ProfileLookup for Vec<RelationshipProfile> {
    fn display_name(&self, contact_id: &str) -> Option<String> {
        self.as_slice().display_name(contact_id)
    }
}

impl ProfileLookup for HashMap<String, RelationshipProfile> {
    fn display_name(&self, contact_id: &str) -> Option<String> {
        self.get(contact_id.trim())
            .map(RelationshipProfile::full_name)
            .filter(|name| !name.is_empty())
    }
}
