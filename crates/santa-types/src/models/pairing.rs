//! Assignment and pairing models.

use serde::{Deserialize, Serialize};

use super::participant::Participant;

/// One giver → recipient record of a pairing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignment {
    pub giver_name: String,
    pub giver_id: String,
    pub recipient_name: String,
    pub recipient_id: String,
}

impl Assignment {
    pub fn new(giver: &Participant, recipient: &Participant) -> Self {
        Self {
            giver_name: giver.name.clone(),
            giver_id: giver.email_id.clone(),
            recipient_name: recipient.name.clone(),
            recipient_id: recipient.email_id.clone(),
        }
    }
}

/// A complete pairing, one assignment per participant in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Pairing(Vec<Assignment>);

impl Pairing {
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self(assignments)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.0.iter()
    }

    /// Recipient id assigned to `giver_id`.
    pub fn recipient_of(&self, giver_id: &str) -> Option<&str> {
        self.0.iter().find(|a| a.giver_id == giver_id).map(|a| a.recipient_id.as_str())
    }
}

impl<'a> IntoIterator for &'a Pairing {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
