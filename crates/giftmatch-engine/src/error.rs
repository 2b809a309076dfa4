//! Engine error types

use thiserror::Error;

/// Fatal outcomes of a draw
///
/// Rejected candidates and stalled rounds never surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// No derangement exists for fewer than two participants
    #[error("At least 2 participants are needed for a draw, got {count}")]
    InsufficientParticipants {
        /// Number of participants given
        count: usize,
    },

    /// Escalation ran out without an accepted matching
    #[error(
        "No valid matching found after {rounds} round(s) and {attempts} attempt(s). \
         Try removing constraints or adding participants"
    )]
    UnsatisfiableConstraints {
        /// Escalation rounds that ran
        rounds: usize,
        /// Candidates generated in total
        attempts: usize,
    },

    /// The engine configuration cannot drive a draw
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}
