//! Escalating retry controller
//!
//! Runs rounds of generate+accept cycles. A round that exhausts its retry
//! budget raises the probability multiplier by the escalation factor before
//! the next round, unless raising it cannot change anything because every
//! used strength level already resolves to probability 0 (or nothing is
//! constrained at all).

use crate::derangement::generate;
use crate::sampler::ProbabilityTable;
use crate::{EngineConfig, MatchError};
use giftmatch_domain::constraint::probability_values;
use giftmatch_domain::{Constraint, Matching, Participant, ParticipantId};
use rand::Rng;
use tracing::{debug, info, warn};

/// A round that ran out of retries while escalation was still possible
///
/// Not an error: the draw continues with `next_multiplier`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecoverableStall {
    /// 1-based round that stalled
    pub round: usize,

    /// Candidates tried in that round
    pub tries: usize,

    /// Multiplier the round ran with
    pub multiplier: f64,

    /// Multiplier the next round runs with
    pub next_multiplier: f64,
}

impl RecoverableStall {
    /// Effective acceptance probability of a base probability in the stalled round
    pub fn effective_probability(&self, base: f64) -> f64 {
        base * self.multiplier
    }
}

/// A successful draw
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// The accepted matching
    pub matching: Matching,

    /// Stalled rounds before the accepting one, in order
    pub stalls: Vec<RecoverableStall>,

    /// Candidates generated in total, including the accepted one
    pub attempts: usize,
}

impl MatchOutcome {
    /// Round in which the matching was accepted (1-based)
    pub fn round(&self) -> usize {
        self.stalls.len() + 1
    }

    /// Whether the draw had to escalate
    pub fn escalated(&self) -> bool {
        !self.stalls.is_empty()
    }
}

/// Draws matchings for exchanges
///
/// Holds configuration only; one engine can serve any number of concurrent
/// draws, each with its own random number generator.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: EngineConfig,
}

impl MatchingEngine {
    /// Create an engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Draw a matching for `participants` honoring `constraints`
    ///
    /// # Errors
    ///
    /// - [`MatchError::InvalidConfig`] when [`EngineConfig::validate`] fails
    /// - [`MatchError::InsufficientParticipants`] for fewer than two participants
    /// - [`MatchError::UnsatisfiableConstraints`] when no candidate was accepted
    ///   in any round
    pub fn find_matching<R: Rng + ?Sized>(
        &self,
        participants: &[Participant],
        constraints: &[Constraint],
        rng: &mut R,
    ) -> Result<MatchOutcome, MatchError> {
        let ids: Vec<ParticipantId> = participants.iter().map(Participant::id).collect();
        self.find_matching_for_ids(&ids, constraints, rng)
    }

    /// Same as [`MatchingEngine::find_matching`], over bare identifiers
    pub fn find_matching_for_ids<R: Rng + ?Sized>(
        &self,
        ids: &[ParticipantId],
        constraints: &[Constraint],
        rng: &mut R,
    ) -> Result<MatchOutcome, MatchError> {
        self.config.validate().map_err(MatchError::InvalidConfig)?;
        if ids.len() < 2 {
            return Err(MatchError::InsufficientParticipants { count: ids.len() });
        }

        let table = ProbabilityTable::from_constraints(constraints);
        // Vacuously false without constraints
        let can_escalate = probability_values(constraints).iter().any(|&p| p > 0.0);

        info!(
            "Drawing matching for {} participants with {} constraints ({} restricted pairs)",
            ids.len(),
            constraints.len(),
            table.len()
        );

        let retries = self.config.retries_per_round;
        let mut multiplier = 1.0;
        let mut attempts = 0;
        let mut rounds = 0;
        let mut stalls = Vec::new();

        for round in 1..=self.config.escalation_rounds {
            rounds = round;

            for _ in 0..retries {
                attempts += 1;
                let candidate = generate(ids, rng)?;
                if table.accept(&candidate, multiplier, rng) {
                    debug!(
                        "Accepted matching in round {} after {} attempt(s)",
                        round, attempts
                    );
                    return Ok(MatchOutcome {
                        matching: candidate,
                        stalls,
                        attempts,
                    });
                }
            }

            if !can_escalate {
                debug!("Round {} stalled and escalation cannot help, giving up", round);
                break;
            }
            if round == self.config.escalation_rounds {
                break;
            }

            let next_multiplier = multiplier * self.config.escalation_factor;
            warn!(
                "Could not generate a matching after {} tries, escalating (multiplier {:.3} -> {:.3})",
                retries, multiplier, next_multiplier
            );
            stalls.push(RecoverableStall {
                round,
                tries: retries,
                multiplier,
                next_multiplier,
            });
            multiplier = next_multiplier;
        }

        warn!(
            "No valid matching after {} round(s) and {} attempt(s)",
            rounds, attempts
        );
        Err(MatchError::UnsatisfiableConstraints { rounds, attempts })
    }
}

/// Draw a matching with the default escalation schedule
///
/// Shorthand for a [`MatchingEngine`] configured with `retries_per_round`.
pub fn find_matching<R: Rng + ?Sized>(
    participants: &[Participant],
    constraints: &[Constraint],
    retries_per_round: usize,
    rng: &mut R,
) -> Result<Matching, MatchError> {
    let config = EngineConfig::default().with_retries_per_round(retries_per_round);
    MatchingEngine::new(config)
        .find_matching(participants, constraints, rng)
        .map(|outcome| outcome.matching)
}
