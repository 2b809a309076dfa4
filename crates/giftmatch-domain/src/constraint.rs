//! Constraint module - directed exclusion preferences and their resolution
//!
//! A set of constraints resolves into one effective acceptance probability per
//! directed (giver, giftee) pair:
//!
//! 1. Among constraints on exactly `(giver, giftee)`, the most restrictive level wins.
//! 2. A `never` constraint on the reverse pair `(giftee, giver)` forces `never`.
//! 3. Pairs with no constraint in either direction resolve to `none` (probability 1).
//!
//! Only `never` crosses direction. Every other level is direction-specific.

use crate::{ParticipantId, StrengthLevel};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// One directed exclusion preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraint {
    /// Participant that would be giving the gift
    pub giver: ParticipantId,

    /// Participant that would be receiving the gift
    pub giftee: ParticipantId,

    /// How strongly to avoid this pairing
    pub level: StrengthLevel,
}

impl Constraint {
    /// Create a new constraint
    pub fn new(giver: ParticipantId, giftee: ParticipantId, level: StrengthLevel) -> Self {
        Self { giver, giftee, level }
    }

    /// Whether this constraint is recorded on exactly `(giver, giftee)`
    pub fn applies_to(&self, giver: ParticipantId, giftee: ParticipantId) -> bool {
        self.giver == giver && self.giftee == giftee
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.level.is_symmetric() { "↔" } else { "→" };
        write!(f, "{} {} {}: {}", self.giver, arrow, self.giftee, self.level)
    }
}

/// Resolve the effective strength level for a directed pair
pub fn resolve_level(
    constraints: &[Constraint],
    giver: ParticipantId,
    giftee: ParticipantId,
) -> StrengthLevel {
    let mut level = StrengthLevel::None;

    for c in constraints {
        if c.applies_to(giver, giftee) {
            level = level.min(c.level);
        } else if c.applies_to(giftee, giver) && c.level.is_symmetric() {
            level = StrengthLevel::Never;
        }
    }

    level
}

/// Resolve the effective acceptance probability for a directed pair
///
/// Total: an unconstrained pair resolves to 1.0.
///
/// # Examples
///
/// ```
/// use giftmatch_domain::{Constraint, ParticipantId, StrengthLevel};
/// use giftmatch_domain::constraint::resolve_probability;
///
/// let (a, b) = (ParticipantId::new(), ParticipantId::new());
/// let constraints = vec![
///     Constraint::new(a, b, StrengthLevel::TwoPastExchange),
///     Constraint::new(b, a, StrengthLevel::Never),
/// ];
///
/// assert_eq!(resolve_probability(&constraints, a, b), 0.0);
/// assert_eq!(resolve_probability(&constraints, b, a), 0.0);
/// ```
pub fn resolve_probability(
    constraints: &[Constraint],
    giver: ParticipantId,
    giftee: ParticipantId,
) -> f64 {
    resolve_level(constraints, giver, giftee).probability()
}

/// Directed pairs that have at least one explicit constraint record
///
/// A reverse `never` does not add the mirrored pair here; it only changes
/// the resolved probability of a pair that is already listed.
pub fn restricted_pairs(constraints: &[Constraint]) -> HashSet<(ParticipantId, ParticipantId)> {
    constraints.iter().map(|c| (c.giver, c.giftee)).collect()
}

/// Strength levels that actually occur in `constraints`
pub fn used_levels(constraints: &[Constraint]) -> BTreeSet<StrengthLevel> {
    constraints.iter().map(|c| c.level).collect()
}

/// Acceptance probabilities of the used levels, most restrictive first
pub fn probability_values(constraints: &[Constraint]) -> Vec<f64> {
    used_levels(constraints)
        .into_iter()
        .map(|level| level.probability())
        .collect()
}
