//! Engine configuration
//!
//! Controls how many candidates are tried per escalation round, how many
//! rounds run, and how fast acceptance tolerance grows between rounds.

use serde::{Deserialize, Serialize};

/// Generate+accept cycles attempted per escalation round
pub const DEFAULT_RETRIES_PER_ROUND: usize = 100;

/// Escalation rounds before giving up
pub const DEFAULT_ESCALATION_ROUNDS: usize = 5;

/// Factor applied to the probability multiplier after a stalled round
pub const DEFAULT_ESCALATION_FACTOR: f64 = 1.2;

/// Configuration for the matching engine
///
/// # Examples
///
/// ```
/// use giftmatch_engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.retries_per_round, 100);
/// assert_eq!(config.escalation_rounds, 5);
///
/// let config = EngineConfig::default().with_retries_per_round(20);
/// assert_eq!(config.retries_per_round, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Candidates generated per round before the round counts as stalled
    /// Default: 100
    #[serde(default = "default_retries_per_round")]
    pub retries_per_round: usize,

    /// Maximum number of escalation rounds
    /// Default: 5
    #[serde(default = "default_escalation_rounds")]
    pub escalation_rounds: usize,

    /// Multiplier growth per stalled round (round k uses factor^(k-1))
    /// Default: 1.2
    #[serde(default = "default_escalation_factor")]
    pub escalation_factor: f64,
}

fn default_retries_per_round() -> usize {
    DEFAULT_RETRIES_PER_ROUND
}

fn default_escalation_rounds() -> usize {
    DEFAULT_ESCALATION_ROUNDS
}

fn default_escalation_factor() -> f64 {
    DEFAULT_ESCALATION_FACTOR
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            retries_per_round: DEFAULT_RETRIES_PER_ROUND,
            escalation_rounds: DEFAULT_ESCALATION_ROUNDS,
            escalation_factor: DEFAULT_ESCALATION_FACTOR,
        }
    }
}

impl EngineConfig {
    /// Override the per-round retry budget
    pub fn with_retries_per_round(mut self, retries: usize) -> Self {
        self.retries_per_round = retries;
        self
    }

    /// Multiplier used in the given 1-based round
    pub fn multiplier_for_round(&self, round: usize) -> f64 {
        self.escalation_factor.powi(round.saturating_sub(1) as i32)
    }

    /// Upper bound on candidates generated by one draw
    pub fn max_attempts(&self) -> usize {
        self.retries_per_round.saturating_mul(self.escalation_rounds)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.retries_per_round == 0 {
            return Err("retries_per_round must be greater than 0".to_string());
        }
        if self.escalation_rounds == 0 {
            return Err("escalation_rounds must be greater than 0".to_string());
        }
        if !self.escalation_factor.is_finite() || self.escalation_factor <= 1.0 {
            return Err(format!(
                "escalation_factor must be a finite number greater than 1, got {}",
                self.escalation_factor
            ));
        }
        Ok(())
    }
}
