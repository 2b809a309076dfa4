//! Giftmatch Engine
//!
//! Draws a gift exchange: assigns every participant exactly one giftee so that
//! nobody draws themselves, while honoring soft exclusion preferences.
//!
//! # Overview
//!
//! The engine is rejection sampling with escalating tolerance:
//!
//! ```text
//! Controller ─┬─> Derangement generator ──> candidate matching
//!             └─> Acceptance sampler (resolved constraints) ──> keep / discard
//! ```
//!
//! Each escalation round tries up to `retries_per_round` candidates. When a
//! round stalls and a softer reading of the constraints could help, the
//! acceptance multiplier grows by `escalation_factor` and a warning is logged.
//! After `escalation_rounds` rounds the draw fails.
//!
//! The engine is synchronous and stateless. Randomness is passed in, so a
//! seeded generator makes a draw reproducible.
//!
//! # Example Usage
//!
//! ```
//! use giftmatch_domain::{Constraint, Participant, StrengthLevel};
//! use giftmatch_engine::{EngineConfig, MatchingEngine};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let participants = vec![
//!     Participant::new("Alice"),
//!     Participant::new("Bob"),
//!     Participant::new("Carol"),
//! ];
//! let constraints = vec![Constraint::new(
//!     participants[0].id(),
//!     participants[1].id(),
//!     StrengthLevel::Never,
//! )];
//!
//! let engine = MatchingEngine::new(EngineConfig::default());
//! let mut rng = StdRng::seed_from_u64(2026);
//! let outcome = engine.find_matching(&participants, &constraints, &mut rng).unwrap();
//!
//! // Alice cannot draw Bob, so she draws Carol
//! assert_eq!(outcome.matching.giftee_of(participants[0].id()), Some(participants[2].id()));
//! ```

#![warn(missing_docs)]

mod config;
mod controller;
mod error;

pub mod derangement;
pub mod sampler;

pub use config::{
    EngineConfig, DEFAULT_ESCALATION_FACTOR, DEFAULT_ESCALATION_ROUNDS, DEFAULT_RETRIES_PER_ROUND,
};
pub use controller::{find_matching, MatchOutcome, MatchingEngine, RecoverableStall};
pub use error::MatchError;
pub use sampler::ProbabilityTable;
