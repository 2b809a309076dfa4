//! Matching module - the giver → giftee assignments an exchange produces

use crate::ParticipantId;
use std::collections::HashSet;
use std::fmt;

/// Assignment of one giver to one giftee
///
/// A participant is never their own giftee; [`Match::new`] refuses such a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    giver: ParticipantId,
    giftee: ParticipantId,
}

impl Match {
    /// Create a match, rejecting self-assignment
    pub fn new(giver: ParticipantId, giftee: ParticipantId) -> Result<Self, String> {
        if giver == giftee {
            return Err(format!("Participant {} cannot give to themselves", giver));
        }
        Ok(Self { giver, giftee })
    }

    /// Participant giving the gift
    pub fn giver(&self) -> ParticipantId {
        self.giver
    }

    /// Participant receiving the gift
    pub fn giftee(&self) -> ParticipantId {
        self.giftee
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.giver, self.giftee)
    }
}

/// The complete set of assignments for one exchange
///
/// Order follows the giver order in which the matching was produced and
/// carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matching {
    matches: Vec<Match>,
}

impl Matching {
    /// Wrap a list of matches
    pub fn new(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    /// Build a matching from raw (giver, giftee) pairs
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (ParticipantId, ParticipantId)>,
    ) -> Result<Self, String> {
        let matches = pairs
            .into_iter()
            .map(|(giver, giftee)| Match::new(giver, giftee))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { matches })
    }

    /// Who `giver` gives a gift to
    pub fn giftee_of(&self, giver: ParticipantId) -> Option<ParticipantId> {
        self.matches
            .iter()
            .find(|m| m.giver == giver)
            .map(|m| m.giftee)
    }

    /// Who gives a gift to `giftee`
    pub fn giver_of(&self, giftee: ParticipantId) -> Option<ParticipantId> {
        self.matches
            .iter()
            .find(|m| m.giftee == giftee)
            .map(|m| m.giver)
    }

    /// Iterate over the matches
    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    /// Number of matches
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether the matching is empty
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The matches as a slice
    pub fn as_slice(&self) -> &[Match] {
        &self.matches
    }

    /// Check the derangement property against a participant set
    ///
    /// True when every id in `participants` gives exactly once and receives
    /// exactly once, nobody outside the set appears, and nobody gives to
    /// themselves.
    pub fn is_derangement_of(&self, participants: &[ParticipantId]) -> bool {
        let expected: HashSet<ParticipantId> = participants.iter().copied().collect();
        if expected.len() != participants.len() || self.matches.len() != expected.len() {
            return false;
        }

        let mut givers = HashSet::with_capacity(self.matches.len());
        let mut giftees = HashSet::with_capacity(self.matches.len());
        for m in &self.matches {
            if m.giver == m.giftee
                || !expected.contains(&m.giver)
                || !expected.contains(&m.giftee)
                || !givers.insert(m.giver)
                || !giftees.insert(m.giftee)
            {
                return false;
            }
        }

        true
    }
}

impl<'a> IntoIterator for &'a Matching {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

impl fmt::Display for Matching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .matches
            .iter()
            .map(|m| format!("'{}': '{}'", m.giver, m.giftee))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u128) -> ParticipantId {
        ParticipantId::from_value(n)
    }

    #[test]
    fn test_match_rejects_self_assignment() {
        assert!(Match::new(id(1), id(1)).is_err());
        assert!(Match::new(id(1), id(2)).is_ok());
    }

    #[test]
    fn test_lookups() {
        let matching = Matching::from_pairs([(id(1), id(2)), (id(2), id(3)), (id(3), id(1))]).unwrap();

        assert_eq!(matching.giftee_of(id(1)), Some(id(2)));
        assert_eq!(matching.giver_of(id(1)), Some(id(3)));
        assert_eq!(matching.giftee_of(id(9)), None);
        assert_eq!(matching.len(), 3);
    }

    #[test]
    fn test_derangement_check() {
        let people = [id(1), id(2), id(3)];
        let cycle = Matching::from_pairs([(id(1), id(2)), (id(2), id(3)), (id(3), id(1))]).unwrap();
        assert!(cycle.is_derangement_of(&people));

        // id(2) receives twice, id(1) never
        let skewed = Matching::from_pairs([(id(1), id(2)), (id(3), id(2)), (id(2), id(3))]).unwrap();
        assert!(!skewed.is_derangement_of(&people));

        let partial = Matching::from_pairs([(id(1), id(2)), (id(2), id(1))]).unwrap();
        assert!(!partial.is_derangement_of(&people));
        assert!(partial.is_derangement_of(&[id(1), id(2)]));

        let outsider = Matching::from_pairs([(id(1), id(4)), (id(4), id(1))]).unwrap();
        assert!(!outsider.is_derangement_of(&[id(1), id(2)]));
    }

    #[test]
    fn test_from_pairs_propagates_self_assignment() {
        assert!(Matching::from_pairs([(id(1), id(2)), (id(2), id(2))]).is_err());
    }
}
