//! Derangement generation
//!
//! Produces one candidate matching in which everybody gives exactly once,
//! receives exactly once, and nobody draws themselves.

use crate::MatchError;
use giftmatch_domain::{Match, Matching, ParticipantId};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// Generate one random derangement of `participants`
///
/// The giver order is shuffled once per call. The giftee order is reshuffled
/// from scratch until no position lines a participant up with themselves,
/// then both orders are zipped into matches.
///
/// There is no cap on reshuffles. For two or more participants the chance that
/// a uniform shuffle has no fixed point is at least about 1/e, so the loop
/// ends after O(1) reshuffles in expectation and terminates almost surely.
///
/// Duplicate identifiers in `participants` are not supported.
///
/// # Errors
///
/// [`MatchError::InsufficientParticipants`] for fewer than two participants.
pub fn generate<R: Rng + ?Sized>(
    participants: &[ParticipantId],
    rng: &mut R,
) -> Result<Matching, MatchError> {
    if participants.len() < 2 {
        return Err(MatchError::InsufficientParticipants {
            count: participants.len(),
        });
    }

    let mut givers = participants.to_vec();
    givers.shuffle(rng);

    let mut giftees = participants.to_vec();
    let mut reshuffles = 0usize;
    loop {
        giftees.shuffle(rng);
        if !givers.iter().zip(&giftees).any(|(giver, giftee)| giver == giftee) {
            break;
        }
        reshuffles += 1;
    }
    trace!("Derangement found after {} reshuffle(s)", reshuffles);

    // No position pairs a participant with themselves, so every match builds
    let matches = givers
        .into_iter()
        .zip(giftees)
        .filter_map(|(giver, giftee)| Match::new(giver, giftee).ok())
        .collect();
    Ok(Matching::new(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn ids(n: u128) -> Vec<ParticipantId> {
        (1..=n).map(ParticipantId::from_value).collect()
    }

    #[test]
    fn test_rejects_fewer_than_two() {
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            generate(&[], &mut rng),
            Err(MatchError::InsufficientParticipants { count: 0 })
        );
        assert_eq!(
            generate(&ids(1), &mut rng),
            Err(MatchError::InsufficientParticipants { count: 1 })
        );
    }

    #[test]
    fn test_two_participants_swap() {
        let mut rng = StdRng::seed_from_u64(7);
        let people = ids(2);
        let matching = generate(&people, &mut rng).unwrap();

        assert_eq!(matching.giftee_of(people[0]), Some(people[1]));
        assert_eq!(matching.giftee_of(people[1]), Some(people[0]));
    }

    #[test]
    fn test_three_participants_form_a_cycle() {
        let people = ids(3);
        let mut seen = HashSet::new();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let matching = generate(&people, &mut rng).unwrap();
            assert!(matching.is_derangement_of(&people));

            let mut pairs: Vec<_> = matching.iter().map(|m| (m.giver(), m.giftee())).collect();
            pairs.sort();
            seen.insert(pairs);
        }

        // Only the two 3-cycles are derangements of three elements
        assert!(seen.len() <= 2);
    }

    #[test]
    fn test_same_seed_same_matching() {
        let people = ids(8);
        let a = generate(&people, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate(&people, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_input_order_untouched() {
        let people = ids(5);
        let before = people.clone();
        generate(&people, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(people, before);
    }
}
