//! Tri-state persistence identity.
//!
//! Replaces id-string shape sniffing (the old "does it contain a
//! hyphen" heuristic) with an explicit state carried on every master
//! entity. The storage gateway classifies CREATE vs UPDATE from this
//! state alone.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persistence identity of a master-data entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Identity {
    /// Never saved anywhere; the backend will assign an id.
    #[default]
    Unassigned,
    /// Client-chosen placeholder id, valid only in the local fallback
    /// store. Stripped before any remote upsert.
    LocalPending(String),
    /// Backend-assigned id; remote saves update in place.
    Persisted(Uuid),
}

impl Identity {
    /// Classify an externally-sourced id string. A well-formed UUID is
    /// a backend-assigned id; anything else is a local placeholder.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Identity::Unassigned;
        }
        match Uuid::parse_str(raw) {
            Ok(id) => Identity::Persisted(id),
            Err(_) => Identity::LocalPending(raw.to_string()),
        }
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self, Identity::Persisted(_))
    }

    /// Storage key for exact-match lookups, if one exists.
    pub fn key(&self) -> Option<String> {
        match self {
            Identity::Unassigned => None,
            Identity::LocalPending(raw) => Some(raw.clone()),
            Identity::Persisted(id) => Some(id.to_string()),
        }
    }
}

impl From<Option<String>> for Identity {
    fn from(raw: Option<String>) -> Self {
        match raw {
            None => Identity::Unassigned,
            Some(s) => Identity::parse(&s),
        }
    }
}

impl From<Identity> for Option<String> {
    fn from(id: Identity) -> Self {
        id.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_strings_classify_as_persisted() {
        let id = Uuid::new_v4();
        assert_eq!(Identity::parse(&id.to_string()), Identity::Persisted(id));
    }

    #[test]
    fn plain_strings_classify_as_local_pending() {
        assert_eq!(
            Identity::parse("p1"),
            Identity::LocalPending("p1".to_string())
        );
    }

    #[test]
    fn empty_string_is_unassigned() {
        assert_eq!(Identity::parse(""), Identity::Unassigned);
        assert_eq!(Identity::Unassigned.key(), None);
    }

    #[test]
    fn serde_round_trips_through_optional_string() {
        let id = Identity::LocalPending("c1".into());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"c1\"");
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        let none: Identity = serde_json::from_str("null").unwrap();
        assert_eq!(none, Identity::Unassigned);
    }
}
