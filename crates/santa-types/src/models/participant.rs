//! Participant and prior-round models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A member of the exchange. `email_id` is unique within one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Participant {
    /// Display name, not required to be unique
    pub name: String,
    /// Unique identifier (the employee e-mail)
    pub email_id: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, email_id: impl Into<String>) -> Self {
        Self { name: name.into(), email_id: email_id.into() }
    }
}

/// Who each giver was paired with in an earlier round.
///
/// A partial function from giver id to recipient id. Givers without an entry
/// carry no exclusion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PriorMapping(HashMap<String, String>);

impl PriorMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a prior pairing, returning the recipient it replaced.
    pub fn insert(
        &mut self,
        giver_id: impl Into<String>,
        recipient_id: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(giver_id.into(), recipient_id.into())
    }

    /// The recipient `giver_id` had last round, if any.
    pub fn get(&self, giver_id: &str) -> Option<&str> {
        self.0.get(giver_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overlay `other` on top of `self`; entries in `other` win per giver.
    pub fn overlay(mut self, other: PriorMapping) -> Self {
        self.0.extend(other.0);
        self
    }
}

impl<G, R> FromIterator<(G, R)> for PriorMapping
where
    G: Into<String>,
    R: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (G, R)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(g, r)| (g.into(), r.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prior_lookup() {
        let prior: PriorMapping = [("a@x", "b@x")].into_iter().collect();
        assert_eq!(prior.get("a@x"), Some("b@x"));
        assert_eq!(prior.get("b@x"), None);
        assert_eq!(prior.len(), 1);
    }

    #[test]
    fn test_overlay_prefers_other() {
        let inline: PriorMapping = [("a@x", "b@x"), ("c@x", "a@x")].into_iter().collect();
        let explicit: PriorMapping = [("a@x", "c@x")].into_iter().collect();

        let merged = inline.overlay(explicit);
        assert_eq!(merged.get("a@x"), Some("c@x"));
        assert_eq!(merged.get("c@x"), Some("a@x"));
    }
}
