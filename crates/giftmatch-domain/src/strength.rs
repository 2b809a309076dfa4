//! Strength module - how strongly a pairing should be avoided

/// Strength of an exclusion preference between a giver and a giftee
///
/// Variants are declared from most to least restrictive, so the derived
/// ordering doubles as the restrictiveness ordering: the minimum of a set of
/// levels is the one that wins.
///
/// - Never: hard exclusion, applies in both directions
/// - OnePastExchange / TwoPastExchange / ThreePastExchange: the pairing was used
///   that many exchanges ago, and becomes more acceptable the older it is
/// - None: no constraint at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    /// Never pair these two, in either direction
    Never,

    /// Paired in the most recent exchange
    OnePastExchange,

    /// Paired two exchanges ago
    TwoPastExchange,

    /// Paired three exchanges ago
    ThreePastExchange,

    /// Unconstrained
    None,
}

impl StrengthLevel {
    /// Every level, most restrictive first
    pub const ALL: [StrengthLevel; 5] = [
        StrengthLevel::Never,
        StrengthLevel::OnePastExchange,
        StrengthLevel::TwoPastExchange,
        StrengthLevel::ThreePastExchange,
        StrengthLevel::None,
    ];

    /// Probability that a candidate pairing at this level is accepted
    pub fn probability(&self) -> f64 {
        match self {
            StrengthLevel::Never => 0.0,
            StrengthLevel::OnePastExchange => 0.0,
            StrengthLevel::TwoPastExchange => 0.2,
            StrengthLevel::ThreePastExchange => 0.4,
            StrengthLevel::None => 1.0,
        }
    }

    /// Get the level name as stored and entered by users
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Never => "never",
            StrengthLevel::OnePastExchange => "1_past_exchange",
            StrengthLevel::TwoPastExchange => "2_past_exchange",
            StrengthLevel::ThreePastExchange => "3_past_exchange",
            StrengthLevel::None => "none",
        }
    }

    /// Parse a level from its stored name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "never" => Some(StrengthLevel::Never),
            "1_past_exchange" => Some(StrengthLevel::OnePastExchange),
            "2_past_exchange" => Some(StrengthLevel::TwoPastExchange),
            "3_past_exchange" => Some(StrengthLevel::ThreePastExchange),
            "none" => Some(StrengthLevel::None),
            _ => None,
        }
    }

    /// Whether this level propagates to the reverse direction
    pub fn is_symmetric(&self) -> bool {
        matches!(self, StrengthLevel::Never)
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StrengthLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid strength level: {}", s))
    }
}
