//! Acceptance sampling
//!
//! Decides whether a candidate matching is kept. Every match on a restricted
//! pair draws one uniform value in [0, 1); a draw above the pair's resolved
//! probability times the current multiplier rejects the whole candidate at
//! once. Unrestricted pairs never consume randomness.

use giftmatch_domain::constraint::{resolve_probability, restricted_pairs};
use giftmatch_domain::{Constraint, Matching, ParticipantId};
use rand::Rng;
use std::collections::HashMap;
use tracing::trace;

/// Resolved acceptance probabilities for every restricted pair
///
/// Built once per draw so that candidate evaluation is a map lookup instead
/// of a scan over all constraints.
#[derive(Debug, Clone, Default)]
pub struct ProbabilityTable {
    probabilities: HashMap<(ParticipantId, ParticipantId), f64>,
}

impl ProbabilityTable {
    /// Resolve every restricted pair in `constraints`
    pub fn from_constraints(constraints: &[Constraint]) -> Self {
        let probabilities = restricted_pairs(constraints)
            .into_iter()
            .map(|(giver, giftee)| {
                let probability = resolve_probability(constraints, giver, giftee);
                ((giver, giftee), probability)
            })
            .collect();

        Self { probabilities }
    }

    /// Resolved probability of a restricted pair, `None` when unrestricted
    pub fn probability(&self, giver: ParticipantId, giftee: ParticipantId) -> Option<f64> {
        self.probabilities.get(&(giver, giftee)).copied()
    }

    /// Number of restricted pairs
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Whether no pair is restricted
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Accept or reject a candidate matching as a whole
    ///
    /// `multiplier` is applied as-is; an effective probability above 1 simply
    /// always accepts.
    pub fn accept<R: Rng + ?Sized>(&self, matching: &Matching, multiplier: f64, rng: &mut R) -> bool {
        for m in matching {
            let Some(probability) = self.probability(m.giver(), m.giftee()) else {
                continue;
            };

            let draw: f64 = rng.gen();
            if draw > probability * multiplier {
                trace!(
                    "Rejected candidate on {} -> {} (draw {:.3} > {:.3})",
                    m.giver(),
                    m.giftee(),
                    draw,
                    probability * multiplier
                );
                return false;
            }
        }

        true
    }
}

/// Accept or reject `matching` against `constraints`
///
/// Convenience form of [`ProbabilityTable::accept`] that resolves the
/// constraints on every call.
pub fn accept<R: Rng + ?Sized>(
    constraints: &[Constraint],
    matching: &Matching,
    multiplier: f64,
    rng: &mut R,
) -> bool {
    ProbabilityTable::from_constraints(constraints).accept(matching, multiplier, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftmatch_domain::StrengthLevel;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn id(n: u128) -> ParticipantId {
        ParticipantId::from_value(n)
    }

    /// Counts calls into the wrapped generator
    struct CountingRng<R> {
        rng: R,
        draws: u64,
    }

    impl CountingRng<StdRng> {
        fn new(seed: u64) -> Self {
            Self {
                rng: StdRng::seed_from_u64(seed),
                draws: 0,
            }
        }
    }

    impl<R: rand::RngCore> rand::RngCore for CountingRng<R> {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.rng.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.rng.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.draws += 1;
            self.rng.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.draws += 1;
            self.rng.try_fill_bytes(dest)
        }
    }

    fn cycle() -> Matching {
        Matching::from_pairs([(id(1), id(2)), (id(2), id(3)), (id(3), id(1))]).unwrap()
    }

    #[test]
    fn test_table_resolves_restricted_pairs_only() {
        let constraints = vec![
            Constraint::new(id(1), id(2), StrengthLevel::ThreePastExchange),
            Constraint::new(id(2), id(1), StrengthLevel::Never),
        ];
        let table = ProbabilityTable::from_constraints(&constraints);

        assert_eq!(table.len(), 2);
        assert_eq!(table.probability(id(1), id(2)), Some(0.0));
        assert_eq!(table.probability(id(2), id(1)), Some(0.0));
        assert_eq!(table.probability(id(2), id(3)), None);
    }

    #[test]
    fn test_unconstrained_matching_always_accepted() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            assert!(accept(&[], &cycle(), 1.0, &mut rng));
        }
    }

    #[test]
    fn test_zero_probability_pair_rejects() {
        let constraints = vec![Constraint::new(id(1), id(2), StrengthLevel::Never)];
        let mut rng = StdRng::seed_from_u64(5);

        let accepted = (0..100)
            .filter(|_| accept(&constraints, &cycle(), 1.0, &mut rng))
            .count();
        assert_eq!(accepted, 0);
    }

    #[test]
    fn test_constraint_off_the_matching_is_ignored() {
        // 2 -> 1 is not part of the cycle
        let constraints = vec![Constraint::new(id(2), id(1), StrengthLevel::OnePastExchange)];
        let mut rng = StdRng::seed_from_u64(5);

        assert!(accept(&constraints, &cycle(), 1.0, &mut rng));
    }

    #[test]
    fn test_unrestricted_pairs_draw_nothing() {
        // Only the reverse of 1 -> 2 carries a record
        let constraints = vec![Constraint::new(id(2), id(1), StrengthLevel::Never)];
        let mut rng = CountingRng::new(9);

        assert!(accept(&constraints, &cycle(), 1.0, &mut rng));
        assert_eq!(rng.draws, 0);
    }

    #[test]
    fn test_one_draw_per_restricted_match() {
        let constraints = vec![Constraint::new(id(3), id(1), StrengthLevel::ThreePastExchange)];
        let table = ProbabilityTable::from_constraints(&constraints);
        let mut rng = CountingRng::new(9);

        // 0.4 * 3.0 > 1, so the single restricted match always passes
        for _ in 0..10 {
            assert!(table.accept(&cycle(), 3.0, &mut rng));
        }
        assert_eq!(rng.draws, 10);
    }

    #[test]
    fn test_first_rejection_stops_drawing() {
        let constraints = vec![
            Constraint::new(id(1), id(2), StrengthLevel::Never),
            Constraint::new(id(2), id(3), StrengthLevel::Never),
        ];
        let mut rng = CountingRng::new(9);

        assert!(!accept(&constraints, &cycle(), 1.0, &mut rng));
        assert_eq!(rng.draws, 1);
    }

    #[test]
    fn test_multiplier_above_one_always_accepts() {
        let constraints = vec![Constraint::new(id(1), id(2), StrengthLevel::TwoPastExchange)];
        let table = ProbabilityTable::from_constraints(&constraints);
        let mut rng = StdRng::seed_from_u64(11);

        // 0.2 * 5.0 = 1.0 and draws are < 1
        for _ in 0..200 {
            assert!(table.accept(&cycle(), 5.0, &mut rng));
        }
    }

    #[test]
    fn test_acceptance_rate_tracks_probability() {
        let constraints = vec![Constraint::new(id(1), id(2), StrengthLevel::ThreePastExchange)];
        let table = ProbabilityTable::from_constraints(&constraints);
        let mut rng = StdRng::seed_from_u64(2024);

        let accepted = (0..2000)
            .filter(|_| table.accept(&cycle(), 1.0, &mut rng))
            .count();

        // Expect about 800 at p = 0.4
        assert!((650..=950).contains(&accepted), "accepted {}", accepted);
    }
}
