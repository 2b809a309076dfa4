//! Unvalidated exchange input, as entered by people

use serde::{Deserialize, Serialize};

/// An exchange as submitted: names instead of identifiers, levels as text
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExchangeDraft {
    /// Exchange name
    pub name: String,

    /// Participant names
    #[serde(default)]
    pub participants: Vec<String>,

    /// Pairings to avoid
    #[serde(default)]
    pub constraints: Vec<ConstraintDraft>,
}

/// One pairing to avoid, referring to participants by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintDraft {
    /// Name of the giver
    pub giver: String,

    /// Name of the giftee
    pub giftee: String,

    /// Strength level name, e.g. `never` or `2_past_exchange`
    pub level: String,
}

impl ConstraintDraft {
    /// Create a constraint draft
    pub fn new(giver: impl Into<String>, giftee: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            giver: giver.into(),
            giftee: giftee.into(),
            level: level.into(),
        }
    }
}
