//! Exchange module - everything that belongs to one gift exchange

use crate::participant::{participant_by_active_name, participant_by_id};
use crate::{Constraint, Matching, Participant, ParticipantId};

/// One gift exchange: who takes part, what to avoid, and who was drawn
///
/// The exchange is the unit a storage layer keeps. The matching is empty
/// until a draw has been made.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    /// Name identifying the exchange
    pub name: String,

    /// People taking part
    pub participants: Vec<Participant>,

    /// Pairings to avoid when drawing
    pub constraints: Vec<Constraint>,

    /// Result of the draw, if one has been made
    pub matching: Option<Matching>,
}

impl Exchange {
    /// Create an exchange that has not been drawn yet
    pub fn new(
        name: impl Into<String>,
        participants: Vec<Participant>,
        constraints: Vec<Constraint>,
    ) -> Self {
        Self {
            name: name.into(),
            participants,
            constraints,
            matching: None,
        }
    }

    /// Attach the result of a draw
    pub fn with_matching(mut self, matching: Matching) -> Self {
        self.matching = Some(matching);
        self
    }

    /// Identifiers of all participants, in participant order
    pub fn participant_ids(&self) -> Vec<ParticipantId> {
        self.participants.iter().map(Participant::id).collect()
    }

    /// Look up a participant by identifier
    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        participant_by_id(&self.participants, id)
    }

    /// Look up a participant by their current name
    pub fn participant_named(&self, name: &str) -> Option<&Participant> {
        participant_by_active_name(&self.participants, name)
    }

    /// The giftee drawn for the participant currently called `name`
    pub fn giftee_for_name(&self, name: &str) -> Option<&Participant> {
        let giver = self.participant_named(name)?;
        let giftee = self.matching.as_ref()?.giftee_of(giver.id())?;
        self.participant(giftee)
    }

    /// The giver drawn for the participant currently called `name`
    pub fn giver_for_name(&self, name: &str) -> Option<&Participant> {
        let giftee = self.participant_named(name)?;
        let giver = self.matching.as_ref()?.giver_of(giftee.id())?;
        self.participant(giver)
    }
}
