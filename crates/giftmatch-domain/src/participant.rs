//! Participant module - who takes part in an exchange and what they are called

use std::fmt;
use std::hash::{Hash, Hasher};

/// Stable identifier for a participant based on UUIDv7
///
/// The identifier is assigned once when the participant is created and never
/// changes, even when the participant is renamed. All identity comparisons in
/// the engine go through this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(u128);

impl ParticipantId {
    /// Generate a new UUIDv7-based ParticipantId
    ///
    /// # Examples
    ///
    /// ```
    /// use giftmatch_domain::ParticipantId;
    ///
    /// let id = ParticipantId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a ParticipantId from a raw u128 value
    ///
    /// This is primarily for restoring identifiers held by a storage layer.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a ParticipantId from its hyphenated UUID form
    ///
    /// Any UUID version is accepted, so identifiers minted elsewhere can be
    /// restored.
    ///
    /// # Examples
    ///
    /// ```
    /// use giftmatch_domain::ParticipantId;
    ///
    /// let id = ParticipantId::new();
    /// let parsed = ParticipantId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid participant id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A person taking part in a gift exchange
///
/// A participant keeps every name they were ever known by, in the order the
/// names were added, and marks one of them as active. The active index always
/// points into the name list, which is never empty.
///
/// Equality and hashing use the identifier only, so renaming a participant
/// does not change who they are.
#[derive(Debug, Clone)]
pub struct Participant {
    id: ParticipantId,
    names: Vec<String>,
    active_name: usize,
}

impl Participant {
    /// Create a participant with a fresh identifier and a single name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(),
            names: vec![name.into()],
            active_name: 0,
        }
    }

    /// Restore a participant from stored parts
    ///
    /// Fails when `names` is empty or `active_name` is out of range.
    pub fn from_parts(
        id: ParticipantId,
        names: Vec<String>,
        active_name: usize,
    ) -> Result<Self, String> {
        if names.is_empty() {
            return Err(format!("Participant {} has no names", id));
        }
        if active_name >= names.len() {
            return Err(format!(
                "Active name index {} out of range for {} name(s)",
                active_name,
                names.len()
            ));
        }

        Ok(Self {
            id,
            names,
            active_name,
        })
    }

    /// The participant's identifier
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    /// The currently active name
    pub fn name(&self) -> &str {
        &self.names[self.active_name]
    }

    /// Every name this participant has used, oldest first
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Index of the active name in [`Participant::names`]
    pub fn active_index(&self) -> usize {
        self.active_name
    }

    /// Add a name without making it the active one
    pub fn add_name(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    /// Add a name and make it the active one
    pub fn change_name(&mut self, name: impl Into<String>) {
        self.add_name(name);
        self.active_name = self.names.len() - 1;
    }

    /// Switch back to a name that is already known
    pub fn set_active_name(&mut self, index: usize) -> Result<(), String> {
        if index >= self.names.len() {
            return Err(format!(
                "Active name index {} out of range for {} name(s)",
                index,
                self.names.len()
            ));
        }
        self.active_name = index;
        Ok(())
    }

    /// Whether `name` appears anywhere in this participant's name history
    pub fn has_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Participant {}

impl Hash for Participant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All participants that have used `name` at some point
pub fn participants_by_name<'a>(participants: &'a [Participant], name: &str) -> Vec<&'a Participant> {
    participants.iter().filter(|p| p.has_name(name)).collect()
}

/// The one participant that has used `name`
///
/// Fails when no participant or more than one participant matches.
pub fn single_participant_by_name<'a>(
    participants: &'a [Participant],
    name: &str,
) -> Result<&'a Participant, String> {
    match participants_by_name(participants, name).as_slice() {
        [single] => Ok(*single),
        found => Err(format!(
            "Found {} participants named '{}'",
            found.len(),
            name
        )),
    }
}

/// Look up a participant by identifier
pub fn participant_by_id(participants: &[Participant], id: ParticipantId) -> Option<&Participant> {
    participants.iter().find(|p| p.id == id)
}

/// Look up a participant by the name they currently go by
pub fn participant_by_active_name<'a>(
    participants: &'a [Participant],
    name: &str,
) -> Option<&'a Participant> {
    participants.iter().find(|p| p.name() == name)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: identifier ordering matches u128 ordering
        #[test]
        fn test_id_ordering_property(a: u128, b: u128) {
            let id_a = ParticipantId::from_value(a);
            let id_b = ParticipantId::from_value(b);

            prop_assert_eq!(id_a < id_b, a < b);
            prop_assert_eq!(id_a == id_b, a == b);
        }

        /// Property: the active index stays valid through any rename sequence
        #[test]
        fn test_active_index_always_valid(renames in proptest::collection::vec(("[a-z]{1,8}", any::<bool>()), 0..20)) {
            let mut p = Participant::new("start");
            for (name, activate) in renames {
                if activate {
                    p.change_name(name);
                } else {
                    p.add_name(name);
                }
                prop_assert!(p.active_index() < p.names().len());
            }
        }
    }
}
